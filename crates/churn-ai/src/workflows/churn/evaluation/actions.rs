use super::super::domain::{ReasonEstimate, FALLBACK_ACTION};

const CONSIDERED_REASONS: usize = 3;
const ACTIONS_PER_REASON: usize = 2;
const ACTIONABLE_PROBABILITY: f64 = 0.20;

/// Retention playbook for the strongest reasons; expects `ranked` sorted most likely first.
pub fn recommend_actions(ranked: &[ReasonEstimate]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::new();

    for estimate in ranked
        .iter()
        .take(CONSIDERED_REASONS)
        .filter(|estimate| estimate.probability > ACTIONABLE_PROBABILITY)
    {
        for action in estimate.category.actions().iter().take(ACTIONS_PER_REASON) {
            if !actions.iter().any(|existing| existing == action) {
                actions.push((*action).to_string());
            }
        }
    }

    if actions.is_empty() {
        actions.push(FALLBACK_ACTION.to_string());
    }

    actions
}
