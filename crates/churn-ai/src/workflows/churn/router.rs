use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::debug;

use super::assess;
use super::intake::RawCustomerRecord;

/// Router exposing the scoring engine over HTTP.
pub fn churn_router() -> Router {
    Router::new().route("/api/v1/churn/score", post(score_handler))
}

pub(crate) async fn score_handler(Json(record): Json<RawCustomerRecord>) -> Response {
    let result = assess(&record);

    debug!(
        customer_id = record.get(super::field::CUSTOMER_ID).unwrap_or("anonymous"),
        probability = result.churn_probability(),
        tier = result.risk_tier().label(),
        "churn assessment completed"
    );

    (StatusCode::OK, Json(result)).into_response()
}
