//! Churn risk scoring for subscriber retention teams.
//!
//! The heart of the crate is [`workflows::churn::assess`], a pure rule-based engine that turns a
//! raw customer record into a churn probability, ranked reasons and retention actions. The
//! remaining modules wrap it for batch scoring, HTTP exposure and the Genie query proxy.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
