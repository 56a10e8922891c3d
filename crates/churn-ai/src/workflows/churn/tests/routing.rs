use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::workflows::churn::router::score_handler;
use crate::workflows::churn::{churn_router, RawCustomerRecord};

#[tokio::test]
async fn score_handler_returns_assessment() {
    let response = score_handler(axum::Json(unhappy_fiber_record())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["churn_flag"], 1);
    assert_eq!(body["risk_tier"], "high");
    assert_eq!(body["reasons"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["reasons"][0]["reason"], "support");
    assert_eq!(body["reasons"][0]["label"], "Customer service / support");
    assert_eq!(body["adjustments"][0]["factor"], "month_to_month_contract");
}

#[tokio::test]
async fn score_route_accepts_loose_json() {
    let payload = json!({
        "tenure": 2,
        "contract": "Month-to-month",
        "monthly_charges": "not a number",
        "SeniorCitizen": true,
        "CustomerFeedback": null
    });

    let response = churn_router()
        .oneshot(
            Request::post("/api/v1/churn/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    // 0.25 + 0.15 (tenure) + 0.20 (contract) + 0.05 (senior)
    let probability = body["churn_probability"].as_f64().expect("probability");
    assert!(approx_eq(probability, 0.65));
    assert_eq!(body["risk_tier"], "high");
}

#[tokio::test]
async fn score_route_accepts_an_empty_object() {
    let response = churn_router()
        .oneshot(
            Request::post("/api/v1/churn/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["churn_probability"], 0.25);
    assert_eq!(body["risk_tier"], "low");
    assert!(!body["actions"].as_array().expect("actions").is_empty());
}

#[tokio::test]
async fn score_route_rejects_non_object_payloads() {
    let response = churn_router()
        .oneshot(
            Request::post("/api/v1/churn/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("[1, 2, 3]"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[test]
fn raw_record_round_trips_through_serde() {
    let record = RawCustomerRecord::new().with("Contract", "Two year");
    let value = serde_json::to_value(&record).expect("serializes");
    assert_eq!(value, json!({ "contract": "Two year" }));
}
