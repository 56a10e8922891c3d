//! Rule-based churn assessment.
//!
//! [`assess`] is the single entry point: it normalizes a raw intake record, scans the feedback
//! text, and returns an immutable [`ChurnResult`]. Nothing here performs I/O or keeps state
//! between calls, so it is safe to call from any number of tasks at once.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod router;
pub mod signals;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, ChurnResult, ContractType, CustomerProfile, InternetService, PaymentMethod,
    ReasonCategory, ReasonEstimate, RiskAdjustment, RiskFactor, RiskTier, FALLBACK_ACTION,
};
pub use intake::{field, normalize, RawCustomerRecord};
pub use router::churn_router;
pub use signals::TextSignals;

/// Score a raw intake record. Never fails: unusable fields fall back to their defaults.
pub fn assess(record: &RawCustomerRecord) -> ChurnResult {
    let profile = normalize(record);
    assess_profile(&profile)
}

pub fn assess_profile(profile: &CustomerProfile) -> ChurnResult {
    let signals = TextSignals::scan(&profile.feedback);
    evaluation::evaluate(profile, &signals)
}
