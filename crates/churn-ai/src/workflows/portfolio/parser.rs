use crate::workflows::churn::RawCustomerRecord;
use std::io::Read;

/// Read a Telco-style export: one header row naming intake fields, one customer per row.
/// Empty cells are left out so they take the intake defaults.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RawCustomerRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let pairs = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.trim_start_matches('\u{feff}'), value))
            .filter(|(_, value)| !value.is_empty());
        records.push(RawCustomerRecord::from_pairs(pairs));
    }

    Ok(records)
}
