use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use super::protocol::{GenieMessage, MessageHandle, MessageStatus};
use super::GenieError;
use crate::config::GenieConfig;

/// Outbound seam to the Genie space so the polling loop can be exercised without a network.
pub trait GenieTransport: Send + Sync {
    fn start_conversation(
        &self,
        question: &str,
    ) -> impl Future<Output = Result<MessageHandle, GenieError>> + Send;

    fn fetch_message(
        &self,
        handle: &MessageHandle,
    ) -> impl Future<Output = Result<GenieMessage, GenieError>> + Send;
}

/// How long to wait for an answer: `max_polls` fetches spaced `interval` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_polls: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(GenieConfig::DEFAULT_POLL_INTERVAL_MS),
            max_polls: GenieConfig::DEFAULT_MAX_POLLS,
        }
    }
}

impl From<&GenieConfig> for PollPolicy {
    fn from(config: &GenieConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.poll_interval_ms),
            max_polls: config.max_polls,
        }
    }
}

/// Forwards free-text questions to Genie and waits for a terminal answer.
pub struct GenieClient<T> {
    pub(crate) transport: T,
    policy: PollPolicy,
}

impl<T: GenieTransport> GenieClient<T> {
    pub fn new(transport: T, policy: PollPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    pub async fn ask(&self, question: &str) -> Result<String, GenieError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(GenieError::EmptyQuestion);
        }

        let handle = self
            .transport
            .start_conversation(question)
            .await
            .inspect_err(|err| warn!(error = %err, "genie conversation did not start"))?;

        let max_polls = self.policy.max_polls;
        for attempt in 1..=max_polls {
            let message = self
                .transport
                .fetch_message(&handle)
                .await
                .inspect_err(|err| warn!(error = %err, attempt, "genie poll failed"))?;

            debug!(
                attempt,
                status = message.status.label(),
                conversation_id = %handle.conversation_id,
                "genie poll"
            );

            match message.status {
                MessageStatus::Completed => return Ok(message.answer_text()),
                MessageStatus::Failed | MessageStatus::Cancelled => {
                    warn!(status = message.status.label(), "genie query ended without an answer");
                    return Err(GenieError::Terminal {
                        status: message.status,
                    });
                }
                MessageStatus::InProgress => {}
            }

            if attempt < max_polls {
                tokio::time::sleep(self.policy.interval).await;
            }
        }

        warn!(attempts = max_polls, "genie answer timed out");
        Err(GenieError::Timeout {
            attempts: max_polls,
        })
    }
}
