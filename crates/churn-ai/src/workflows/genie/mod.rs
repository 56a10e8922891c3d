//! Proxy for the Genie conversational space behind the retention chat assistant.
//!
//! A question starts a conversation, then the message is polled until it reaches a terminal
//! status or the poll budget runs out. No scoring happens here.

mod client;
mod http;
mod protocol;
pub mod router;

pub use client::{GenieClient, GenieTransport, PollPolicy};
pub use http::HttpGenieTransport;
pub use protocol::{GenieMessage, MessageHandle, MessageStatus};
pub use router::genie_router;

use crate::config::GenieConfig;

/// Failures surfaced to chat callers.
#[derive(Debug, thiserror::Error)]
pub enum GenieError {
    #[error("question must not be blank")]
    EmptyQuestion,
    #[error("Genie {operation} failed with HTTP {status}")]
    Http { operation: &'static str, status: u16 },
    #[error("could not reach Genie: {0}")]
    Transport(String),
    #[error("unreadable Genie response: {0}")]
    Decode(String),
    #[error("Genie query ended with status {}", .status.label())]
    Terminal { status: MessageStatus },
    #[error("timed out waiting for Genie after {attempts} polls")]
    Timeout { attempts: u32 },
}

impl GenieClient<HttpGenieTransport> {
    pub fn from_config(config: &GenieConfig) -> Self {
        GenieClient::new(HttpGenieTransport::new(config), PollPolicy::from(config))
    }
}
