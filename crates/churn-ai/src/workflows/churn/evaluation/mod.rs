mod actions;
mod reasons;
mod rules;

pub use actions::recommend_actions;
pub use reasons::{estimate_reasons, rank_reasons, REASON_PROBABILITY_CAP};
pub use rules::{score_risk, RiskScore};

use super::domain::{ChurnResult, CustomerProfile};
use super::signals::TextSignals;

/// Run the scoring pipeline over an already-normalized profile.
pub fn evaluate(profile: &CustomerProfile, signals: &TextSignals) -> ChurnResult {
    let RiskScore {
        probability,
        adjustments,
    } = score_risk(profile);

    let ranked = rank_reasons(estimate_reasons(profile, signals));
    let actions = recommend_actions(&ranked);

    ChurnResult::assemble(probability, adjustments, ranked, actions)
}
