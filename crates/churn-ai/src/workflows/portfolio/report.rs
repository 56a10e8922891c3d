use crate::workflows::churn::{ChurnResult, ReasonCategory, RiskTier};
use serde::Serialize;
use std::cmp::Ordering;

/// One scored customer from an imported portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioEntry {
    pub customer_id: String,
    pub monthly_charge: f64,
    pub assessment: ChurnResult,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// How often a category came out as a customer's most likely reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonTally {
    pub reason: ReasonCategory,
    pub label: &'static str,
    pub customers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_customers: usize,
    pub tiers: TierCounts,
    pub flagged_customers: usize,
    pub average_probability: f64,
    pub revenue_at_risk: f64,
    pub reason_leaderboard: Vec<ReasonTally>,
}

/// Scored portfolio, riskiest customers first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    pub summary: PortfolioSummary,
    pub entries: Vec<PortfolioEntry>,
}

impl PortfolioReport {
    pub fn from_entries(mut entries: Vec<PortfolioEntry>) -> Self {
        entries.sort_by(|left, right| {
            right
                .assessment
                .churn_probability()
                .partial_cmp(&left.assessment.churn_probability())
                .unwrap_or(Ordering::Equal)
                .then_with(|| left.customer_id.cmp(&right.customer_id))
        });

        let summary = summarize(&entries);
        Self { summary, entries }
    }

    pub fn high_risk(&self) -> impl Iterator<Item = &PortfolioEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.assessment.risk_tier() == RiskTier::High)
    }
}

fn summarize(entries: &[PortfolioEntry]) -> PortfolioSummary {
    let mut tiers = TierCounts::default();
    let mut flagged_customers = 0;
    let mut probability_total = 0.0;
    let mut revenue_at_risk = 0.0;
    let mut top_reasons = [0usize; ReasonCategory::ALL.len()];

    for entry in entries {
        let assessment = &entry.assessment;
        match assessment.risk_tier() {
            RiskTier::Low => tiers.low += 1,
            RiskTier::Medium => tiers.medium += 1,
            RiskTier::High => tiers.high += 1,
        }

        probability_total += assessment.churn_probability();

        if assessment.will_churn() {
            flagged_customers += 1;
            revenue_at_risk += entry.monthly_charge;
        }

        if let Some(top) = assessment.top_reason() {
            top_reasons[top.category.index()] += 1;
        }
    }

    let average_probability = if entries.is_empty() {
        0.0
    } else {
        probability_total / entries.len() as f64
    };

    let mut reason_leaderboard: Vec<ReasonTally> = ReasonCategory::ALL
        .into_iter()
        .filter(|category| top_reasons[category.index()] > 0)
        .map(|category| ReasonTally {
            reason: category,
            label: category.label(),
            customers: top_reasons[category.index()],
        })
        .collect();
    // Stable sort keeps declaration order among equal counts.
    reason_leaderboard.sort_by(|left, right| right.customers.cmp(&left.customers));

    PortfolioSummary {
        total_customers: entries.len(),
        tiers,
        flagged_customers,
        average_probability,
        revenue_at_risk,
        reason_leaderboard,
    }
}
