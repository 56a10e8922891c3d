use reqwest::{Client, RequestBuilder, Response};

use super::client::GenieTransport;
use super::protocol::{
    GenieMessage, MessageHandle, StartConversationRequest, StartConversationResponse,
};
use super::GenieError;
use crate::config::GenieConfig;

/// Genie REST transport: `start-conversation`, then per-message polling.
#[derive(Debug, Clone)]
pub struct HttpGenieTransport {
    client: Client,
    base_url: String,
    space_id: String,
    token: Option<String>,
}

impl HttpGenieTransport {
    pub fn new(config: &GenieConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            space_id: config.space_id.clone(),
            token: config.token.clone(),
        }
    }

    fn space_url(&self) -> String {
        format!("{}/api/2.0/genie/spaces/{}", self.base_url, self.space_id)
    }

    pub(crate) fn start_url(&self) -> String {
        format!("{}/start-conversation", self.space_url())
    }

    pub(crate) fn message_url(&self, handle: &MessageHandle) -> String {
        format!(
            "{}/conversations/{}/messages/{}",
            self.space_url(),
            handle.conversation_id,
            handle.message_id
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn check_status(response: Response, operation: &'static str) -> Result<Response, GenieError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response.text().await.unwrap_or_default();
    tracing::warn!(%status, operation, detail = %detail, "genie returned an error status");
    Err(GenieError::Http {
        operation,
        status: status.as_u16(),
    })
}

impl GenieTransport for HttpGenieTransport {
    async fn start_conversation(&self, question: &str) -> Result<MessageHandle, GenieError> {
        let response = self
            .authorize(self.client.post(self.start_url()))
            .json(&StartConversationRequest { content: question })
            .send()
            .await
            .map_err(|err| GenieError::Transport(err.to_string()))?;

        let body: StartConversationResponse = check_status(response, "start conversation")
            .await?
            .json()
            .await
            .map_err(|err| GenieError::Decode(err.to_string()))?;

        Ok(body.into_handle())
    }

    async fn fetch_message(&self, handle: &MessageHandle) -> Result<GenieMessage, GenieError> {
        let response = self
            .authorize(self.client.get(self.message_url(handle)))
            .send()
            .await
            .map_err(|err| GenieError::Transport(err.to_string()))?;

        check_status(response, "fetch message")
            .await?
            .json()
            .await
            .map_err(|err| GenieError::Decode(err.to_string()))
    }
}
