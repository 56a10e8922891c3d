use serde::{Deserialize, Serialize};

pub(crate) const ATTACHMENT_ANSWER: &str = "response generated (see the query results)";
pub(crate) const EMPTY_ANSWER: &str = "no response received";

#[derive(Debug, Serialize)]
pub(crate) struct StartConversationRequest<'a> {
    pub(crate) content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartConversationResponse {
    pub(crate) conversation: IdRef,
    pub(crate) message: IdRef,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdRef {
    pub(crate) id: String,
}

impl StartConversationResponse {
    pub(crate) fn into_handle(self) -> MessageHandle {
        MessageHandle {
            conversation_id: self.conversation.id,
            message_id: self.message.id,
        }
    }
}

/// Identifies the pending answer to poll for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHandle {
    pub conversation_id: String,
    pub message_id: String,
}

/// Lifecycle state reported by the Genie space. Anything unrecognized is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Completed,
    Failed,
    Cancelled,
    #[serde(other)]
    InProgress,
}

impl MessageStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MessageStatus::Completed => "COMPLETED",
            MessageStatus::Failed => "FAILED",
            MessageStatus::Cancelled => "CANCELLED",
            MessageStatus::InProgress => "IN_PROGRESS",
        }
    }
}

/// Polled message body; only the fields the proxy reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenieMessage {
    pub status: MessageStatus,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<serde_json::Value>>,
}

impl GenieMessage {
    pub fn pending() -> Self {
        Self::with_status(MessageStatus::InProgress)
    }

    pub fn with_status(status: MessageStatus) -> Self {
        Self {
            status,
            content: None,
            message: None,
            attachments: None,
        }
    }

    /// Prefer `content`, then `message`, then a notice that only query attachments came back.
    pub fn answer_text(&self) -> String {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        present(&self.content)
            .or_else(|| present(&self.message))
            .unwrap_or_else(|| {
                let has_attachments = self
                    .attachments
                    .as_ref()
                    .is_some_and(|attachments| !attachments.is_empty());
                if has_attachments {
                    ATTACHMENT_ANSWER.to_string()
                } else {
                    EMPTY_ANSWER.to_string()
                }
            })
    }
}
