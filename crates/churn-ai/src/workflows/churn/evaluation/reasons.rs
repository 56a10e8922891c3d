use super::super::domain::{
    ContractType, CustomerProfile, InternetService, PaymentMethod, ReasonCategory, ReasonEstimate,
};
use super::super::signals::TextSignals;
use std::cmp::Ordering;

/// A rule-based estimate never claims certainty.
pub const REASON_PROBABILITY_CAP: f64 = 0.95;
const SERVICE_QUALITY_FLOOR: f64 = 0.10;

/// One estimate per category, in declaration order.
pub fn estimate_reasons(profile: &CustomerProfile, signals: &TextSignals) -> Vec<ReasonEstimate> {
    ReasonCategory::ALL
        .into_iter()
        .map(|category| ReasonEstimate {
            category,
            probability: estimate(category, profile, signals.mentions(category)),
        })
        .collect()
}

fn estimate(category: ReasonCategory, profile: &CustomerProfile, mentioned: bool) -> f64 {
    let mut floor: f64 = 0.0;
    let mut probability: f64;

    match category {
        ReasonCategory::Price => {
            probability = 0.30;
            if profile.monthly_charge > 80.0 {
                probability += 0.20;
            }
            if mentioned {
                probability += 0.30;
            }
        }
        ReasonCategory::ServiceQuality => {
            probability = 0.25;
            if mentioned {
                probability += 0.35;
            }
            if profile.internet_service == InternetService::Fiber {
                probability -= 0.10;
            }
            floor = SERVICE_QUALITY_FLOOR;
        }
        ReasonCategory::Support => {
            probability = 0.20;
            if profile.tech_support.is_no() {
                probability += 0.15;
            }
            if mentioned {
                probability += 0.30;
            }
        }
        ReasonCategory::Competition => {
            probability = 0.15;
            if mentioned {
                probability += 0.40;
            }
            if profile.contract == ContractType::MonthToMonth {
                probability += 0.10;
            }
        }
        ReasonCategory::TechnicalProblems => {
            probability = 0.15;
            if mentioned {
                probability += 0.35;
            }
            if profile.device_protection.is_no() {
                probability += 0.10;
            }
        }
        ReasonCategory::Relocation => {
            probability = 0.08;
            if mentioned {
                probability += 0.40;
            }
        }
        ReasonCategory::FinancialHardship => {
            probability = 0.12;
            if mentioned {
                probability += 0.35;
            }
            if profile.payment_method == PaymentMethod::ElectronicCheck {
                probability += 0.10;
            }
        }
    }

    probability.clamp(floor, REASON_PROBABILITY_CAP)
}

/// Most likely first; equal probabilities keep category declaration order.
pub fn rank_reasons(mut estimates: Vec<ReasonEstimate>) -> Vec<ReasonEstimate> {
    estimates.sort_by(|left, right| {
        right
            .probability
            .partial_cmp(&left.probability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| left.category.cmp(&right.category))
    });
    estimates
}
