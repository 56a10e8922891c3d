use super::super::domain::{
    ContractType, CustomerProfile, InternetService, PaymentMethod, RiskAdjustment, RiskFactor,
};

pub(crate) const BASE_SCORE: f64 = 0.25;

/// Overall churn probability plus the adjustments that produced it, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskScore {
    pub probability: f64,
    pub adjustments: Vec<RiskAdjustment>,
}

struct Ledger {
    score: f64,
    adjustments: Vec<RiskAdjustment>,
}

impl Ledger {
    fn apply(&mut self, factor: RiskFactor, delta: f64) {
        self.score += delta;
        self.adjustments.push(RiskAdjustment { factor, delta });
    }
}

/// Every rule is evaluated; the running sum is clamped only once at the end.
pub fn score_risk(profile: &CustomerProfile) -> RiskScore {
    let mut ledger = Ledger {
        score: BASE_SCORE,
        adjustments: Vec::new(),
    };

    let tenure = profile.tenure_months;
    if tenure < 6 {
        ledger.apply(RiskFactor::VeryShortTenure, 0.15);
    } else if tenure < 12 {
        ledger.apply(RiskFactor::ShortTenure, 0.08);
    } else if tenure > 36 {
        ledger.apply(RiskFactor::LongTenure, -0.15);
    }

    match profile.contract {
        ContractType::MonthToMonth => ledger.apply(RiskFactor::MonthToMonthContract, 0.20),
        ContractType::OneYear => ledger.apply(RiskFactor::OneYearContract, 0.05),
        ContractType::TwoYear => ledger.apply(RiskFactor::TwoYearContract, -0.10),
        ContractType::Unspecified => {}
    }

    let charge = profile.monthly_charge;
    if charge > 100.0 {
        ledger.apply(RiskFactor::HighMonthlyCharge, 0.10);
    } else if charge < 30.0 {
        ledger.apply(RiskFactor::LowMonthlyCharge, -0.05);
    }

    if profile.payment_method == PaymentMethod::ElectronicCheck {
        ledger.apply(RiskFactor::ElectronicCheckPayment, 0.10);
    }

    if profile.internet_service == InternetService::Fiber {
        ledger.apply(RiskFactor::FiberInternet, 0.05);
    }

    let connected = profile.internet_service.is_connected();
    if profile.tech_support.is_no() && connected {
        ledger.apply(RiskFactor::NoTechSupport, 0.10);
    }

    if profile.online_security.is_no() && connected {
        ledger.apply(RiskFactor::NoOnlineSecurity, 0.05);
    }

    if profile.senior_citizen.is_yes() {
        ledger.apply(RiskFactor::SeniorCitizen, 0.05);
    }

    if profile.partner.is_no() && profile.dependents.is_no() {
        ledger.apply(RiskFactor::NoPartnerOrDependents, 0.05);
    }

    if profile.paperless_billing.is_yes() {
        ledger.apply(RiskFactor::PaperlessBilling, 0.05);
    }

    RiskScore {
        probability: ledger.score.clamp(0.0, 1.0),
        adjustments: ledger.adjustments,
    }
}
