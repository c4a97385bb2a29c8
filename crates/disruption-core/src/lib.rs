//! Core types for supply chain disruption events and risk alerts.
//!
//! This crate provides the shared data model consumed by the risk-monitor
//! engine. It defines:
//!
//! - [`Disruption`] - An immutable record describing one disruption event
//! - [`DisruptionType`] / [`SeverityLevel`] - Closed event classifications
//! - [`Alert`] - The structured output produced per ingested disruption
//! - [`ValidationError`] - Field-invariant violations, rejected before registration
//!
//! # Example
//!
//! ```rust
//! use disruption_core::{Disruption, DisruptionType, SeverityLevel};
//!
//! let disruption = Disruption {
//!     id: "DISRUPT_001".to_string(),
//!     kind: DisruptionType::Supplier,
//!     title: "Semiconductor plant maintenance shutdown".to_string(),
//!     description: "Scheduled fab maintenance".to_string(),
//!     severity: SeverityLevel::Medium,
//!     location: "Taiwan".to_string(),
//!     affected_regions: vec!["Asia Pacific".to_string()],
//!     affected_suppliers: vec!["Fab 18".to_string()],
//!     estimated_impact_days: 14,
//!     estimated_cost_per_day: 75_000.0,
//!     timestamp: chrono::Utc::now(),
//!     source: "Supplier communication".to_string(),
//!     confidence: 1.0,
//! };
//!
//! assert!(disruption.validate().is_ok());
//! assert_eq!(disruption.severity.base_score(), 40.0);
//! ```

mod alert;
mod disruption;
mod error;

pub use alert::{Alert, DisruptionSnapshot, RiskAssessment, Urgency};
pub use disruption::{Disruption, DisruptionType, SeverityLevel};
pub use error::ValidationError;
