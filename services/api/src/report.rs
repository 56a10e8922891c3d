use chrono::Utc;
use churn_ai::config::{AppConfig, ConfigError};
use churn_ai::error::AppError;
use churn_ai::workflows::churn::{assess, field, ChurnResult, RawCustomerRecord};
use churn_ai::workflows::genie::GenieClient;
use churn_ai::workflows::portfolio::{PortfolioImporter, PortfolioReport};
use clap::Args;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Customer attribute as KEY=VALUE using Telco column names (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = crate::infra::parse_field)]
    pub(crate) fields: Vec<(String, String)>,
    /// Free-text customer feedback
    #[arg(long)]
    pub(crate) feedback: Option<String>,
    /// Print the raw JSON assessment instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PortfolioArgs {
    /// Customer export in Telco CSV layout
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Number of highest-risk customers to list
    #[arg(long, default_value_t = 10)]
    pub(crate) limit: usize,
    /// Print the full JSON report instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question forwarded to the Genie space
    pub(crate) question: String,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        fields,
        feedback,
        json,
    } = args;

    let mut record = RawCustomerRecord::from_pairs(fields);
    if let Some(feedback) = feedback {
        record.insert(field::CUSTOMER_FEEDBACK, feedback);
    }
    let assessment = assess(&record);

    if json {
        match serde_json::to_string_pretty(&assessment) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Assessment payload unavailable: {}", err),
        }
    } else {
        print!("{}", render_assessment(&assessment));
    }

    Ok(())
}

pub(crate) fn run_portfolio(args: PortfolioArgs) -> Result<(), AppError> {
    let PortfolioArgs { csv, limit, json } = args;
    let report = PortfolioImporter::from_path(&csv)?;

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Portfolio payload unavailable: {}", err),
        }
    } else {
        println!("Churn portfolio for {}", csv.display());
        print!("{}", render_portfolio(&report, limit));
    }

    Ok(())
}

pub(crate) async fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let genie = config.genie.ok_or(ConfigError::GenieNotConfigured)?;
    let client = GenieClient::from_config(&genie);

    let answer = client.ask(&args.question).await?;
    println!("{}", answer);
    Ok(())
}

pub(crate) fn render_assessment(assessment: &ChurnResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Churn probability: {:.1}% ({} risk, flag {})",
        assessment.churn_probability() * 100.0,
        assessment.risk_tier().label(),
        assessment.churn_flag()
    );

    if assessment.adjustments().is_empty() {
        let _ = writeln!(out, "Score adjustments: none (base score only)");
    } else {
        let _ = writeln!(out, "Score adjustments:");
        for adjustment in assessment.adjustments() {
            let _ = writeln!(out, "  - {:?}: {:+.2}", adjustment.factor, adjustment.delta);
        }
    }

    let _ = writeln!(out, "Likely reasons:");
    for reason in assessment.reasons().iter().take(3) {
        let _ = writeln!(
            out,
            "  - {}: {:.0}%",
            reason.label(),
            reason.probability * 100.0
        );
    }

    let _ = writeln!(out, "Recommended actions:");
    for action in assessment.actions() {
        let _ = writeln!(out, "  - {}", action);
    }

    out
}

pub(crate) fn render_portfolio(report: &PortfolioReport, limit: usize) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    let _ = writeln!(out, "Generated at {}", Utc::now().format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(
        out,
        "- {} customers | {} flagged to churn | average risk {:.1}%",
        summary.total_customers,
        summary.flagged_customers,
        summary.average_probability * 100.0
    );
    let _ = writeln!(
        out,
        "- Tiers: {} high / {} medium / {} low",
        summary.tiers.high, summary.tiers.medium, summary.tiers.low
    );
    let _ = writeln!(
        out,
        "- Monthly revenue at risk: {:.2}",
        summary.revenue_at_risk
    );

    if !summary.reason_leaderboard.is_empty() {
        let _ = writeln!(out, "Top reasons across the portfolio:");
        for tally in &summary.reason_leaderboard {
            let _ = writeln!(out, "  - {}: {} customers", tally.label, tally.customers);
        }
    }

    if report.entries.is_empty() {
        let _ = writeln!(out, "No customers found in the export");
        return out;
    }

    let _ = writeln!(out, "Retention call list:");
    for entry in report.entries.iter().take(limit) {
        let assessment = &entry.assessment;
        let reason = assessment
            .top_reason()
            .map(|reason| reason.label())
            .unwrap_or("unknown");
        let action = assessment
            .actions()
            .first()
            .map(String::as_str)
            .unwrap_or("none");
        let _ = writeln!(
            out,
            "  - {} | {:.0}% {} | {} | next step: {}",
            entry.customer_id,
            assessment.churn_probability() * 100.0,
            assessment.risk_tier().label(),
            reason,
            action
        );
    }

    let remaining = report.entries.len().saturating_sub(limit);
    if remaining > 0 {
        let _ = writeln!(out, "  ... {} more customers", remaining);
    }

    out
}
