//! Inbound EventBridge event extraction

use serde_json::Value;

/// EventBridge `source` emitted by CodePipeline
pub const PIPELINE_SOURCE: &str = "aws.codepipeline";

/// EventBridge `detail-type` for pipeline execution state changes
pub const PIPELINE_DETAIL_TYPE: &str = "CodePipeline Pipeline Execution State Change";

/// The fields of an EventBridge event the notifier cares about.
///
/// Every field is optional. Events arrive as arbitrary JSON and anything
/// missing or of the wrong type is simply absent here, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineEvent {
    pub source: Option<String>,
    pub detail_type: Option<String>,
    pub state: Option<String>,
    pub pipeline: Option<String>,
}

impl PipelineEvent {
    pub fn from_value(value: &Value) -> Self {
        let detail = value.get("detail");

        Self {
            source: string_field(Some(value), "source"),
            detail_type: string_field(Some(value), "detail-type"),
            state: string_field(detail, "state"),
            pipeline: string_field(detail, "pipeline"),
        }
    }

    /// Whether this is a CodePipeline execution state change
    pub fn is_pipeline_state_change(&self) -> bool {
        self.source.as_deref() == Some(PIPELINE_SOURCE)
            && self.detail_type.as_deref() == Some(PIPELINE_DETAIL_TYPE)
    }
}

fn string_field(value: Option<&Value>, key: &str) -> Option<String> {
    value?.get(key)?.as_str().map(str::to_string)
}
