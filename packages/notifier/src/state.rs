//! Pipeline states and how each one is presented in Slack

use std::fmt;
use std::str::FromStr;

/// Pipeline execution states that produce a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    Succeeded,
    Failed,
    Resumed,
    Started,
    Superseded,
    Canceled,
}

impl PipelineState {
    pub const ALL: [PipelineState; 6] = [
        Self::Succeeded,
        Self::Failed,
        Self::Resumed,
        Self::Started,
        Self::Superseded,
        Self::Canceled,
    ];

    /// The state as it appears in the event's `detail.state`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Resumed => "RESUMED",
            Self::Started => "STARTED",
            Self::Superseded => "SUPERSEDED",
            Self::Canceled => "CANCELED",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Succeeded => "CodePipeline Success",
            Self::Failed => "CodePipeline Failure",
            Self::Resumed => "CodePipeline Resumed",
            Self::Started => "CodePipeline Started",
            Self::Superseded => "CodePipeline Superseded",
            Self::Canceled => "CodePipeline Canceled",
        }
    }

    /// Attachment side bar color
    pub fn color(&self) -> &'static str {
        match self {
            Self::Succeeded => "#00FF00",
            Self::Failed => "#FF0000",
            Self::Resumed => "#FFA500",
            Self::Started => "#87CEEB",
            Self::Superseded => "#D3D3D3",
            Self::Canceled => "#FFA07A",
        }
    }

    pub fn message(&self, pipeline: &str) -> String {
        match self {
            Self::Succeeded => format!("Hurray! CodePipeline {} succeeded.", pipeline),
            Self::Failed => format!("Oops! CodePipeline {} has failed.", pipeline),
            Self::Resumed => format!("CodePipeline {} has resumed.", pipeline),
            Self::Started => format!("CodePipeline {} has started.", pipeline),
            Self::Superseded => format!(
                "CodePipeline {} was superseded by a newer execution.",
                pipeline
            ),
            Self::Canceled => format!("CodePipeline {} was canceled.", pipeline),
        }
    }

    pub fn presentation(&self, pipeline: &str) -> Presentation {
        Presentation {
            title: self.title(),
            color: self.color(),
            text: self.message(pipeline),
        }
    }
}

impl FromStr for PipelineState {
    type Err = String;

    /// Case-sensitive: `succeeded` is not a known state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("Unknown pipeline state: {}", s))
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title, color and text of one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub title: &'static str,
    pub color: &'static str,
    pub text: String,
}
