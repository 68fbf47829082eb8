//! Slack incoming webhook payload

use crate::state::Presentation;
use serde::Serialize;

/// Body posted to the Slack webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackPayload {
    pub attachments: Vec<Attachment>,
}

/// A legacy Slack message attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub color: String,
    pub title: String,
    pub text: String,
}

impl From<Presentation> for SlackPayload {
    fn from(presentation: Presentation) -> Self {
        Self {
            attachments: vec![Attachment {
                color: presentation.color.to_string(),
                title: presentation.title.to_string(),
                text: presentation.text,
            }],
        }
    }
}
