use super::common::*;
use crate::workflows::churn::domain::{
    Answer, ContractType, InternetService, ReasonCategory, RiskFactor, RiskTier, FALLBACK_ACTION,
};
use crate::workflows::churn::evaluation::score_risk;
use crate::workflows::churn::intake::RawCustomerRecord;
use crate::workflows::churn::{assess, assess_profile};

#[test]
fn empty_record_scores_the_base_probability() {
    let result = assess(&RawCustomerRecord::new());

    assert_eq!(result.churn_probability(), 0.25);
    assert!(result.adjustments().is_empty());
    assert_eq!(result.churn_flag(), 0);
    assert_eq!(result.risk_tier(), RiskTier::Low);
    assert_eq!(result.reasons().len(), 7);
}

#[test]
fn tenure_band_edges_are_exclusive() {
    let mut profile = baseline_profile();

    profile.tenure_months = 5;
    let five = score_risk(&profile);
    assert_eq!(five.adjustments[0].factor, RiskFactor::VeryShortTenure);
    assert!(approx_eq(five.probability, 0.40));

    profile.tenure_months = 6;
    let six = score_risk(&profile);
    assert_eq!(six.adjustments[0].factor, RiskFactor::ShortTenure);
    assert!(approx_eq(six.probability, 0.33));

    profile.tenure_months = 12;
    assert!(score_risk(&profile).adjustments.is_empty());

    profile.tenure_months = 36;
    assert!(score_risk(&profile).adjustments.is_empty());

    profile.tenure_months = 37;
    let long = score_risk(&profile);
    assert_eq!(long.adjustments[0].factor, RiskFactor::LongTenure);
    assert!(approx_eq(long.probability, 0.10));
}

#[test]
fn monthly_charge_edges_are_exclusive() {
    let mut profile = baseline_profile();

    profile.monthly_charge = 100.0;
    assert!(score_risk(&profile).adjustments.is_empty());

    profile.monthly_charge = 100.01;
    let high = score_risk(&profile);
    assert_eq!(high.adjustments[0].factor, RiskFactor::HighMonthlyCharge);
    assert!(approx_eq(high.probability, 0.35));

    profile.monthly_charge = 30.0;
    assert!(score_risk(&profile).adjustments.is_empty());

    profile.monthly_charge = 29.99;
    let low = score_risk(&profile);
    assert_eq!(low.adjustments[0].factor, RiskFactor::LowMonthlyCharge);
    assert!(approx_eq(low.probability, 0.20));
}

#[test]
fn contract_terms_move_the_score_both_ways() {
    let mut profile = baseline_profile();

    profile.contract = ContractType::MonthToMonth;
    assert!(approx_eq(score_risk(&profile).probability, 0.45));

    profile.contract = ContractType::OneYear;
    assert!(approx_eq(score_risk(&profile).probability, 0.30));

    profile.contract = ContractType::TwoYear;
    assert!(approx_eq(score_risk(&profile).probability, 0.15));
}

#[test]
fn missing_add_ons_only_count_with_internet() {
    let mut profile = baseline_profile();
    profile.tech_support = Answer::No;
    profile.online_security = Answer::No;

    profile.internet_service = InternetService::None;
    assert!(score_risk(&profile).adjustments.is_empty());

    profile.internet_service = InternetService::Unspecified;
    assert_eq!(
        score_risk(&profile)
            .adjustments
            .iter()
            .map(|adjustment| adjustment.factor)
            .collect::<Vec<_>>(),
        vec![RiskFactor::NoTechSupport, RiskFactor::NoOnlineSecurity]
    );

    profile.internet_service = InternetService::Dsl;
    assert!(approx_eq(score_risk(&profile).probability, 0.40));
}

#[test]
fn absence_rules_need_explicit_no_answers() {
    let mut profile = baseline_profile();
    profile.tech_support = Answer::NotApplicable;
    profile.partner = Answer::No;
    profile.dependents = Answer::Unanswered;
    assert!(score_risk(&profile).adjustments.is_empty());

    profile.dependents = Answer::No;
    let score = score_risk(&profile);
    assert_eq!(score.adjustments[0].factor, RiskFactor::NoPartnerOrDependents);
    assert!(approx_eq(score.probability, 0.30));
}

#[test]
fn probability_is_clamped_to_one() {
    let result = assess(&worst_case_record());

    assert_eq!(result.churn_probability(), 1.0);
    assert_eq!(result.adjustments().len(), 10);
    let raw_sum: f64 = 0.25
        + result
            .adjustments()
            .iter()
            .map(|adjustment| adjustment.delta)
            .sum::<f64>();
    assert!(raw_sum > 1.0);
    assert_eq!(result.risk_tier(), RiskTier::High);
    assert!(result.will_churn());
}

#[test]
fn unhappy_fiber_customer_is_flagged_with_price_and_support_on_top() {
    let result = assess(&unhappy_fiber_record());

    assert_eq!(
        factors(&result),
        vec![
            RiskFactor::MonthToMonthContract,
            RiskFactor::FiberInternet,
            RiskFactor::NoTechSupport,
        ]
    );
    assert!(approx_eq(result.churn_probability(), 0.60));
    assert_eq!(result.churn_flag(), 1);

    let ranked = ranked_categories(&result);
    assert_eq!(
        &ranked[..2],
        &[ReasonCategory::Support, ReasonCategory::Price]
    );
    assert!(result.reasons()[0].probability > 0.5);
    assert!(result.reasons()[1].probability > 0.5);
    assert!(approx_eq(probability_of(&result, ReasonCategory::Support), 0.65));
    assert!(approx_eq(probability_of(&result, ReasonCategory::Price), 0.60));

    assert_eq!(
        result.actions(),
        &[
            "Escalate to a dedicated relationship manager",
            "Offer a priority support channel",
            "Offer a loyalty discount or temporary promotion",
            "Present a plan with better cost-benefit",
            "Present a side-by-side benefits comparison",
            "Offer special conditions to stay",
        ]
    );
}

#[test]
fn loyal_two_year_customer_lands_in_low_tier() {
    let result = assess(&loyal_record());

    assert_eq!(result.churn_probability(), 0.0);
    assert_eq!(result.risk_tier(), RiskTier::Low);
    assert_eq!(result.churn_flag(), 0);
    assert_eq!(
        factors(&result),
        vec![RiskFactor::LongTenure, RiskFactor::TwoYearContract]
    );

    // The price and service baselines stay above the action threshold.
    assert!(!result.actions().iter().any(|action| action == FALLBACK_ACTION));
    assert_eq!(result.actions().len(), 4);
}

#[test]
fn assessing_twice_is_bit_identical() {
    let record = worst_case_record();
    let first = assess(&record);
    let second = assess(&record);

    assert_eq!(first, second);
    assert_eq!(
        first.churn_probability().to_bits(),
        second.churn_probability().to_bits()
    );
    for (left, right) in first.reasons().iter().zip(second.reasons()) {
        assert_eq!(left.probability.to_bits(), right.probability.to_bits());
    }
}

#[test]
fn assess_profile_matches_assess_on_the_normalized_record() {
    let record = unhappy_fiber_record();
    let profile = crate::workflows::churn::normalize(&record);
    assert_eq!(assess_profile(&profile), assess(&record));
}

#[test]
fn risk_tier_thresholds_are_inclusive() {
    assert_eq!(RiskTier::from_probability(0.6), RiskTier::High);
    assert_eq!(RiskTier::from_probability(0.5999), RiskTier::Medium);
    assert_eq!(RiskTier::from_probability(0.35), RiskTier::Medium);
    assert_eq!(RiskTier::from_probability(0.3499), RiskTier::Low);
    assert_eq!(crate::workflows::churn::domain::churn_flag(0.5), 1);
    assert_eq!(crate::workflows::churn::domain::churn_flag(0.4999), 0);
}
