use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use churn_ai::error::AppError;
use churn_ai::workflows::churn::churn_router;
use churn_ai::workflows::genie::{genie_router, GenieClient, GenieTransport};
use churn_ai::workflows::portfolio::{PortfolioEntry, PortfolioImporter, PortfolioSummary};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct PortfolioRequest {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) summary: PortfolioSummary,
    pub(crate) entries: Vec<PortfolioEntry>,
}

pub(crate) fn with_service_routes<T>(genie: Option<Arc<GenieClient<T>>>) -> Router
where
    T: GenieTransport + 'static,
{
    let genie_routes = match genie {
        Some(client) => genie_router(client),
        None => Router::new().route("/api/v1/genie/ask", post(genie_unavailable)),
    };

    churn_router()
        .merge(genie_routes)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/churn/portfolio", post(portfolio_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn genie_unavailable() -> impl IntoResponse {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "error": "Genie assistant is not configured" })),
    )
}

pub(crate) async fn portfolio_endpoint(
    Json(payload): Json<PortfolioRequest>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let PortfolioRequest { csv, limit } = payload;

    let report = PortfolioImporter::from_reader(Cursor::new(csv.into_bytes()))?;
    let mut entries = report.entries;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    Ok(Json(PortfolioResponse {
        generated_at: Utc::now(),
        summary: report.summary,
        entries,
    }))
}
