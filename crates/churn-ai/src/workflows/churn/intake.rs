use super::domain::{Answer, ContractType, CustomerProfile, InternetService, PaymentMethod};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_TENURE_MONTHS: u32 = 12;
pub const DEFAULT_MONTHLY_CHARGE: f64 = 70.0;

/// Intake form keys, using the Telco dataset column names.
pub mod field {
    pub const CUSTOMER_ID: &str = "customerID";
    pub const TENURE: &str = "tenure";
    pub const CONTRACT: &str = "Contract";
    pub const MONTHLY_CHARGES: &str = "MonthlyCharges";
    pub const PAYMENT_METHOD: &str = "PaymentMethod";
    pub const INTERNET_SERVICE: &str = "InternetService";
    pub const TECH_SUPPORT: &str = "TechSupport";
    pub const ONLINE_SECURITY: &str = "OnlineSecurity";
    pub const DEVICE_PROTECTION: &str = "DeviceProtection";
    pub const SENIOR_CITIZEN: &str = "SeniorCitizen";
    pub const PARTNER: &str = "Partner";
    pub const DEPENDENTS: &str = "Dependents";
    pub const PAPERLESS_BILLING: &str = "PaperlessBilling";
    pub const CUSTOMER_FEEDBACK: &str = "CustomerFeedback";
}

/// Raw, string-valued intake record exactly as a form or CSV row supplied it.
///
/// Keys are folded on insert (case, `_`, `-` and spaces ignored) so `MonthlyCharges` and
/// `monthly_charges` address the same field. Later values replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawCustomerRecord {
    fields: BTreeMap<String, String>,
}

impl RawCustomerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(fold_key(key), value.into());
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(key.as_ref(), value);
        }
        record
    }

    /// Trimmed value for `key`; blank values read as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(&fold_key(key))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for RawCustomerRecord {
    /// Accepts a flat JSON object. Scalars are stringified; nulls, arrays and nested objects are
    /// dropped so a malformed field behaves like a missing one.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut record = Self::new();
        for (key, value) in raw {
            let text = match value {
                Value::String(text) => text,
                Value::Number(number) => number.to_string(),
                Value::Bool(true) => "Yes".to_string(),
                Value::Bool(false) => "No".to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => continue,
            };
            record.insert(&key, text);
        }
        Ok(record)
    }
}

/// Resolve every profile field, substituting the documented default where input is unusable.
pub fn normalize(record: &RawCustomerRecord) -> CustomerProfile {
    CustomerProfile {
        customer_id: record.get(field::CUSTOMER_ID).map(str::to_string),
        tenure_months: record
            .get(field::TENURE)
            .and_then(parse_tenure)
            .unwrap_or(DEFAULT_TENURE_MONTHS),
        contract: record
            .get(field::CONTRACT)
            .map(parse_contract)
            .unwrap_or(ContractType::Unspecified),
        monthly_charge: record
            .get(field::MONTHLY_CHARGES)
            .and_then(parse_charge)
            .unwrap_or(DEFAULT_MONTHLY_CHARGE),
        payment_method: record
            .get(field::PAYMENT_METHOD)
            .map(parse_payment_method)
            .unwrap_or(PaymentMethod::Unspecified),
        internet_service: record
            .get(field::INTERNET_SERVICE)
            .map(parse_internet_service)
            .unwrap_or(InternetService::Unspecified),
        tech_support: answer(record, field::TECH_SUPPORT),
        online_security: answer(record, field::ONLINE_SECURITY),
        device_protection: answer(record, field::DEVICE_PROTECTION),
        senior_citizen: answer(record, field::SENIOR_CITIZEN),
        partner: answer(record, field::PARTNER),
        dependents: answer(record, field::DEPENDENTS),
        paperless_billing: answer(record, field::PAPERLESS_BILLING),
        feedback: record
            .get(field::CUSTOMER_FEEDBACK)
            .unwrap_or_default()
            .to_string(),
    }
}

fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|ch| !matches!(ch, '_' | '-') && !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn fold_value(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Leading-digit parse: `"7.9"` reads as 7 and `"12 months"` as 12. Zero counts as missing.
fn parse_tenure(raw: &str) -> Option<u32> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<u32>().ok().filter(|months| *months > 0)
}

/// Reads the leading decimal, so `"80.5 reais"` is 80.5. A comma is not a decimal separator.
fn parse_charge(raw: &str) -> Option<f64> {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let mut end = raw.len() - unsigned.len();
    let mut seen_dot = false;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    raw[..end]
        .parse::<f64>()
        .ok()
        .filter(|charge| charge.is_finite() && *charge > 0.0)
}

fn parse_contract(raw: &str) -> ContractType {
    match fold_value(raw).as_str() {
        "monthtomonth" | "monthly" => ContractType::MonthToMonth,
        "oneyear" => ContractType::OneYear,
        "twoyear" => ContractType::TwoYear,
        _ => ContractType::Unspecified,
    }
}

fn parse_payment_method(raw: &str) -> PaymentMethod {
    match fold_value(raw).as_str() {
        "electroniccheck" => PaymentMethod::ElectronicCheck,
        "mailedcheck" => PaymentMethod::MailedCheck,
        "banktransfer" | "banktransferautomatic" => PaymentMethod::BankTransfer,
        "creditcard" | "creditcardautomatic" => PaymentMethod::CreditCard,
        _ => PaymentMethod::Unspecified,
    }
}

fn parse_internet_service(raw: &str) -> InternetService {
    match fold_value(raw).as_str() {
        "no" | "none" => InternetService::None,
        "dsl" => InternetService::Dsl,
        "fiberoptic" | "fiber" => InternetService::Fiber,
        _ => InternetService::Unspecified,
    }
}

fn answer(record: &RawCustomerRecord, key: &str) -> Answer {
    record.get(key).map(parse_answer).unwrap_or(Answer::Unanswered)
}

fn parse_answer(raw: &str) -> Answer {
    match fold_value(raw).as_str() {
        "yes" | "y" | "1" | "true" | "sim" | "s" => Answer::Yes,
        "no" | "n" | "0" | "false" | "não" | "nao" => Answer::No,
        "nointernetservice" | "nophoneservice" | "seminternet" => Answer::NotApplicable,
        _ => Answer::Unanswered,
    }
}
