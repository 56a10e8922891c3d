use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Action recommended when no reason is strong enough to act on.
pub const FALLBACK_ACTION: &str = "maintain relationship and regular follow-up";

/// Commitment term of the customer's current contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    MonthToMonth,
    OneYear,
    TwoYear,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    ElectronicCheck,
    MailedCheck,
    BankTransfer,
    CreditCard,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternetService {
    None,
    Dsl,
    Fiber,
    Unspecified,
}

impl InternetService {
    /// Anything but an explicit "no internet" counts as connected, including an unknown plan.
    pub const fn is_connected(self) -> bool {
        !matches!(self, InternetService::None)
    }
}

/// Answer to a yes/no question on the intake form.
///
/// `NotApplicable` captures Telco-style "No internet service" answers, which are neither a
/// subscription nor an explicit refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    NotApplicable,
    Unanswered,
}

impl Answer {
    pub const fn is_yes(self) -> bool {
        matches!(self, Answer::Yes)
    }

    pub const fn is_no(self) -> bool {
        matches!(self, Answer::No)
    }
}

/// Fully populated customer snapshot produced by intake normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub customer_id: Option<String>,
    pub tenure_months: u32,
    pub contract: ContractType,
    pub monthly_charge: f64,
    pub payment_method: PaymentMethod,
    pub internet_service: InternetService,
    pub tech_support: Answer,
    pub online_security: Answer,
    pub device_protection: Answer,
    pub senior_citizen: Answer,
    pub partner: Answer,
    pub dependents: Answer,
    pub paperless_billing: Answer,
    pub feedback: String,
}

/// Closed set of cancellation causes tracked by the engine, in ranking tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCategory {
    Price,
    ServiceQuality,
    Support,
    Competition,
    TechnicalProblems,
    Relocation,
    FinancialHardship,
}

impl ReasonCategory {
    pub const ALL: [ReasonCategory; 7] = [
        ReasonCategory::Price,
        ReasonCategory::ServiceQuality,
        ReasonCategory::Support,
        ReasonCategory::Competition,
        ReasonCategory::TechnicalProblems,
        ReasonCategory::Relocation,
        ReasonCategory::FinancialHardship,
    ];

    /// Position in declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn key(self) -> &'static str {
        match self {
            ReasonCategory::Price => "price",
            ReasonCategory::ServiceQuality => "service_quality",
            ReasonCategory::Support => "support",
            ReasonCategory::Competition => "competition",
            ReasonCategory::TechnicalProblems => "technical_problems",
            ReasonCategory::Relocation => "relocation",
            ReasonCategory::FinancialHardship => "financial_hardship",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ReasonCategory::Price => "Price / high cost",
            ReasonCategory::ServiceQuality => "Service quality / network",
            ReasonCategory::Support => "Customer service / support",
            ReasonCategory::Competition => "Competition / better offer",
            ReasonCategory::TechnicalProblems => "Recurring technical problems",
            ReasonCategory::Relocation => "Address change / relocation",
            ReasonCategory::FinancialHardship => "Financial issues / delinquency",
        }
    }

    /// Retention playbook for the category, most effective first.
    pub const fn actions(self) -> &'static [&'static str] {
        match self {
            ReasonCategory::Price => &[
                "Offer a loyalty discount or temporary promotion",
                "Present a plan with better cost-benefit",
                "Highlight exclusive benefits that justify the price",
            ],
            ReasonCategory::ServiceQuality => &[
                "Schedule a technical visit to check the installation",
                "Offer a speed upgrade at no extra cost",
                "Monitor service quality over the coming weeks",
            ],
            ReasonCategory::Support => &[
                "Escalate to a dedicated relationship manager",
                "Offer a priority support channel",
                "Follow up after every interaction",
            ],
            ReasonCategory::Competition => &[
                "Present a side-by-side benefits comparison",
                "Offer special conditions to stay",
                "Highlight exclusive differentiators of our service",
            ],
            ReasonCategory::TechnicalProblems => &[
                "Schedule complete preventive maintenance",
                "Replace equipment with the latest version",
                "Offer priority technical support",
            ],
            ReasonCategory::Relocation => &[
                "Check coverage at the new address",
                "Offer a free, simplified service transfer",
                "Suspend service temporarily until the move is settled",
            ],
            ReasonCategory::FinancialHardship => &[
                "Offer an installment plan for outstanding debt",
                "Propose renegotiation with flexible terms",
                "Suggest a more affordable plan",
            ],
        }
    }

    /// Feedback fragments (already lowercase) that signal the category.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            ReasonCategory::Price => &["caro", "preço", "custo"],
            ReasonCategory::ServiceQuality => &["lento", "queda", "instável", "conexão"],
            ReasonCategory::Support => &["atendimento", "suporte", "demora"],
            ReasonCategory::Competition => &["outra", "concorr", "melhor oferta"],
            ReasonCategory::TechnicalProblems => &["técnico", "modem", "roteador", "instalação"],
            ReasonCategory::Relocation => &["mudança", "mudar", "endereço"],
            ReasonCategory::FinancialHardship => &["pagar", "dívida", "atraso", "financeiro"],
        }
    }
}

/// Likelihood that a single category is driving the customer away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReasonEstimate {
    pub category: ReasonCategory,
    pub probability: f64,
}

impl ReasonEstimate {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

impl Serialize for ReasonEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReasonEstimate", 3)?;
        state.serialize_field("reason", &self.category)?;
        state.serialize_field("label", self.category.label())?;
        state.serialize_field("probability", &self.probability)?;
        state.end()
    }
}

/// Display bucket for the overall churn probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const HIGH_THRESHOLD: f64 = 0.6;
    pub const MEDIUM_THRESHOLD: f64 = 0.35;

    pub fn from_probability(probability: f64) -> Self {
        if probability >= Self::HIGH_THRESHOLD {
            RiskTier::High
        } else if probability >= Self::MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

/// Profile predicate behind a risk adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    VeryShortTenure,
    ShortTenure,
    LongTenure,
    MonthToMonthContract,
    OneYearContract,
    TwoYearContract,
    HighMonthlyCharge,
    LowMonthlyCharge,
    ElectronicCheckPayment,
    FiberInternet,
    NoTechSupport,
    NoOnlineSecurity,
    SeniorCitizen,
    NoPartnerOrDependents,
    PaperlessBilling,
}

/// One fired rule and the amount it moved the churn score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAdjustment {
    pub factor: RiskFactor,
    pub delta: f64,
}

/// Engine output. Built once per assessment and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChurnResult {
    churn_probability: f64,
    churn_flag: u8,
    risk_tier: RiskTier,
    reasons: Vec<ReasonEstimate>,
    actions: Vec<String>,
    adjustments: Vec<RiskAdjustment>,
}

impl ChurnResult {
    pub const FLAG_THRESHOLD: f64 = 0.5;

    pub(crate) fn assemble(
        churn_probability: f64,
        adjustments: Vec<RiskAdjustment>,
        reasons: Vec<ReasonEstimate>,
        actions: Vec<String>,
    ) -> Self {
        Self {
            churn_probability,
            churn_flag: churn_flag(churn_probability),
            risk_tier: RiskTier::from_probability(churn_probability),
            reasons,
            actions,
            adjustments,
        }
    }

    pub fn churn_probability(&self) -> f64 {
        self.churn_probability
    }

    /// 1 when the customer is predicted to cancel.
    pub fn churn_flag(&self) -> u8 {
        self.churn_flag
    }

    pub fn will_churn(&self) -> bool {
        self.churn_flag == 1
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }

    /// All seven categories, most likely first.
    pub fn reasons(&self) -> &[ReasonEstimate] {
        &self.reasons
    }

    pub fn top_reason(&self) -> Option<&ReasonEstimate> {
        self.reasons.first()
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn adjustments(&self) -> &[RiskAdjustment] {
        &self.adjustments
    }
}

pub fn churn_flag(probability: f64) -> u8 {
    u8::from(probability >= ChurnResult::FLAG_THRESHOLD)
}
