use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::genie::GenieError;
use crate::workflows::portfolio::PortfolioImportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Top-level failure for the service and CLI; renders as a `{"error": ...}` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("portfolio import error: {0}")]
    Portfolio(#[from] PortfolioImportError),
    #[error("genie error: {0}")]
    Genie(#[from] GenieError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Portfolio(_) => StatusCode::BAD_REQUEST,
            AppError::Genie(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
