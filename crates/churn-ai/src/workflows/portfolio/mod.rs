//! Batch scoring for customer exports, feeding the retention team's call list and dashboard.

mod parser;
mod report;

pub use report::{PortfolioEntry, PortfolioReport, PortfolioSummary, ReasonTally, TierCounts};

use crate::workflows::churn::{assess_profile, field, normalize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum PortfolioImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for PortfolioImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortfolioImportError::Io(err) => write!(f, "failed to read customer export: {}", err),
            PortfolioImportError::Csv(err) => write!(f, "invalid customer CSV data: {}", err),
        }
    }
}

impl std::error::Error for PortfolioImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortfolioImportError::Io(err) => Some(err),
            PortfolioImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PortfolioImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PortfolioImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct PortfolioImporter;

impl PortfolioImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PortfolioReport, PortfolioImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Score every row. Rows without a `customerID` are named `row-N`, counting from 1.
    pub fn from_reader<R: Read>(reader: R) -> Result<PortfolioReport, PortfolioImportError> {
        let records = parser::parse_records(reader)?;
        let mut entries = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let profile = normalize(record);
            let customer_id = record
                .get(field::CUSTOMER_ID)
                .map(str::to_string)
                .unwrap_or_else(|| format!("row-{}", index + 1));

            entries.push(PortfolioEntry {
                customer_id,
                monthly_charge: profile.monthly_charge,
                assessment: assess_profile(&profile),
            });
        }

        let report = PortfolioReport::from_entries(entries);
        debug!(
            customers = report.summary.total_customers,
            high_risk = report.summary.tiers.high,
            "portfolio scored"
        );

        Ok(report)
    }
}
