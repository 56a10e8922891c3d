use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::{GenieClient, GenieTransport};
use super::GenieError;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Router forwarding chat questions to the Genie space.
pub fn genie_router<T>(client: Arc<GenieClient<T>>) -> Router
where
    T: GenieTransport + 'static,
{
    Router::new()
        .route("/api/v1/genie/ask", post(ask_handler::<T>))
        .with_state(client)
}

pub(crate) async fn ask_handler<T>(
    State(client): State<Arc<GenieClient<T>>>,
    Json(request): Json<AskRequest>,
) -> Response
where
    T: GenieTransport + 'static,
{
    match client.ask(&request.question).await {
        Ok(answer) => (StatusCode::OK, Json(AskResponse { answer })).into_response(),
        Err(err) => {
            let status = match err {
                GenieError::EmptyQuestion => StatusCode::UNPROCESSABLE_ENTITY,
                GenieError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                GenieError::Http { .. }
                | GenieError::Transport(_)
                | GenieError::Decode(_)
                | GenieError::Terminal { .. } => StatusCode::BAD_GATEWAY,
            };
            let payload = json!({ "error": err.to_string() });
            (status, Json(payload)).into_response()
        }
    }
}
