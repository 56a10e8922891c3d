use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::churn::domain::{CustomerProfile, ReasonCategory, RiskFactor};
use crate::workflows::churn::intake::{field, normalize, RawCustomerRecord};
use crate::workflows::churn::ChurnResult;

pub(super) fn baseline_profile() -> CustomerProfile {
    normalize(&RawCustomerRecord::new())
}

/// Month-to-month fiber customer without tech support complaining about price and support.
pub(super) fn unhappy_fiber_record() -> RawCustomerRecord {
    RawCustomerRecord::new()
        .with(field::CUSTOMER_ID, "7590-VHVEG")
        .with(field::CONTRACT, "Month-to-month")
        .with(field::INTERNET_SERVICE, "Fiber optic")
        .with(field::TECH_SUPPORT, "No")
        .with(field::CUSTOMER_FEEDBACK, "muito caro, atendimento horrível")
}

/// Long-standing two-year customer with every protection add-on.
pub(super) fn loyal_record() -> RawCustomerRecord {
    RawCustomerRecord::new()
        .with(field::CUSTOMER_ID, "5575-GNVDE")
        .with(field::CONTRACT, "Two year")
        .with(field::TENURE, "48")
        .with(field::TECH_SUPPORT, "Yes")
        .with(field::ONLINE_SECURITY, "Yes")
        .with(field::CUSTOMER_FEEDBACK, "")
}

/// Every risk rule fires.
pub(super) fn worst_case_record() -> RawCustomerRecord {
    RawCustomerRecord::new()
        .with(field::TENURE, "1")
        .with(field::CONTRACT, "Month-to-month")
        .with(field::MONTHLY_CHARGES, "150")
        .with(field::PAYMENT_METHOD, "Electronic check")
        .with(field::INTERNET_SERVICE, "Fiber optic")
        .with(field::TECH_SUPPORT, "No")
        .with(field::ONLINE_SECURITY, "No")
        .with(field::DEVICE_PROTECTION, "No")
        .with(field::SENIOR_CITIZEN, "1")
        .with(field::PARTNER, "No")
        .with(field::DEPENDENTS, "No")
        .with(field::PAPERLESS_BILLING, "Yes")
        .with(
            field::CUSTOMER_FEEDBACK,
            "Conexão lenta, modem ruim e não consigo pagar a fatura",
        )
}

pub(super) fn factors(result: &ChurnResult) -> Vec<RiskFactor> {
    result
        .adjustments()
        .iter()
        .map(|adjustment| adjustment.factor)
        .collect()
}

pub(super) fn ranked_categories(result: &ChurnResult) -> Vec<ReasonCategory> {
    result
        .reasons()
        .iter()
        .map(|estimate| estimate.category)
        .collect()
}

pub(super) fn probability_of(result: &ChurnResult, category: ReasonCategory) -> f64 {
    result
        .reasons()
        .iter()
        .find(|estimate| estimate.category == category)
        .map(|estimate| estimate.probability)
        .expect("every category is estimated")
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
