use churn_ai::workflows::churn::{ReasonCategory, RiskTier};
use churn_ai::workflows::portfolio::{PortfolioImporter, PortfolioReport};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("telco_sample.csv")
}

fn sample_report() -> PortfolioReport {
    PortfolioImporter::from_path(fixture_path()).expect("fixture imports")
}

#[test]
fn telco_export_is_ranked_riskiest_first() {
    let report = sample_report();

    let ranking: Vec<(&str, RiskTier)> = report
        .entries
        .iter()
        .map(|entry| (entry.customer_id.as_str(), entry.assessment.risk_tier()))
        .collect();
    assert_eq!(
        ranking,
        vec![
            ("9237-HQITU", RiskTier::High),
            ("7590-VHVEG", RiskTier::High),
            ("5575-GNVDE", RiskTier::Medium),
            ("7795-CFOCW", RiskTier::Low),
        ]
    );

    let fiber = &report.entries[0].assessment;
    assert_eq!(fiber.churn_probability(), 1.0);
    assert_eq!(fiber.adjustments().len(), 9);

    let loyal = &report.entries[3].assessment;
    assert_eq!(loyal.churn_probability(), 0.0);
    assert_eq!(loyal.churn_flag(), 0);
}

#[test]
fn feedback_column_drives_top_reasons() {
    let report = sample_report();
    let top = |id: &str| {
        report
            .entries
            .iter()
            .find(|entry| entry.customer_id == id)
            .and_then(|entry| entry.assessment.top_reason())
            .map(|reason| reason.category)
            .expect("customer present")
    };

    assert_eq!(top("7590-VHVEG"), ReasonCategory::Support);
    assert_eq!(top("9237-HQITU"), ReasonCategory::Competition);
    assert_eq!(top("5575-GNVDE"), ReasonCategory::Support);
    assert_eq!(top("7795-CFOCW"), ReasonCategory::Price);

    let unhappy = report
        .entries
        .iter()
        .find(|entry| entry.customer_id == "7590-VHVEG")
        .expect("customer present");
    assert_eq!(
        &unhappy.assessment.actions()[..2],
        &[
            "Escalate to a dedicated relationship manager".to_string(),
            "Offer a priority support channel".to_string(),
        ]
    );
}

#[test]
fn summary_totals_flagged_revenue_and_reasons() {
    let summary = sample_report().summary;

    assert_eq!(summary.total_customers, 4);
    assert_eq!(summary.tiers.high, 2);
    assert_eq!(summary.tiers.medium, 1);
    assert_eq!(summary.tiers.low, 1);
    assert_eq!(summary.flagged_customers, 2);
    assert!((summary.revenue_at_risk - 100.55).abs() < 1e-9);
    assert!((summary.average_probability - 0.575).abs() < 1e-9);

    let leaderboard: Vec<(ReasonCategory, usize)> = summary
        .reason_leaderboard
        .iter()
        .map(|tally| (tally.reason, tally.customers))
        .collect();
    assert_eq!(
        leaderboard,
        vec![
            (ReasonCategory::Support, 2),
            (ReasonCategory::Price, 1),
            (ReasonCategory::Competition, 1),
        ]
    );
}

#[test]
fn report_serializes_for_the_dashboard() {
    let value = serde_json::to_value(sample_report()).expect("serializes");

    assert_eq!(value["summary"]["total_customers"], 4);
    assert_eq!(value["entries"][0]["customer_id"], "9237-HQITU");
    assert_eq!(value["entries"][0]["assessment"]["risk_tier"], "high");
    assert_eq!(
        value["entries"][0]["assessment"]["reasons"][0]["reason"],
        "competition"
    );
}
