pub mod churn;
pub mod genie;
pub mod portfolio;
