//! Disruption ingestion and risk alerting engine.
//!
//! This crate provides the [`RiskMonitor`] type which converts supply
//! chain disruption events into scored, actionable alerts:
//!
//! - Computes a 0-100 risk score from severity, impact duration, daily
//!   cost and detection confidence
//! - Generates recommended actions from an ordered, additive rule table
//! - Classifies response urgency from the risk score
//! - Tracks the active-disruption registry and the cumulative alert history
//! - Produces summary reports over the active set
//!
//! # Architecture
//!
//! ```text
//! Disruption (from external feeds / callers)
//!          ↓
//! ┌─────────────────────────────────────────────────┐
//! │                  RISK MONITOR                   │
//! │                                                 │
//! │  1. Validate field invariants                   │
//! │         ↓                                       │
//! │  2. Compute risk score (severity + factors)     │
//! │         ↓                                       │
//! │  3. Build alert (recommendations + urgency)     │
//! │         ↓                                       │
//! │  4. Upsert active registry, append history      │
//! │         ↓                                       │
//! │  5. Notify observer                             │
//! └─────────────────────────────────────────────────┘
//!          ↓
//! Alert / SummaryReport (plain data, serializable)
//! ```
//!
//! Failures never mutate state: a rejected disruption leaves both the
//! registry and the history exactly as they were.
//!
//! # Example
//!
//! ```rust
//! use disruption_core::{Disruption, DisruptionType, SeverityLevel, Urgency};
//! use risk_monitor::RiskMonitor;
//!
//! # fn main() -> Result<(), risk_monitor::MonitorError> {
//! let mut monitor = RiskMonitor::default();
//!
//! let alert = monitor.ingest(Disruption {
//!     id: "DISRUPT_001".to_string(),
//!     kind: DisruptionType::Weather,
//!     title: "Hurricane approaching coast".to_string(),
//!     description: "Category 4 hurricane expected to impact ports".to_string(),
//!     severity: SeverityLevel::Critical,
//!     location: "Florida, USA".to_string(),
//!     affected_regions: vec!["Southeast US".to_string()],
//!     affected_suppliers: vec!["Port of Miami".to_string()],
//!     estimated_impact_days: 7,
//!     estimated_cost_per_day: 500_000.0,
//!     timestamp: chrono::Utc::now(),
//!     source: "National Weather Service".to_string(),
//!     confidence: 0.95,
//! })?;
//!
//! assert_eq!(alert.risk_assessment.risk_score, 100.0);
//! assert_eq!(alert.urgency, Urgency::Critical);
//!
//! let report = monitor.summary_report();
//! assert_eq!(report.summary.total_active_disruptions, 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod formatting;
mod monitor;
mod observer;
mod recommendations;
mod report;
mod scoring;

pub use error::MonitorError;
pub use formatting::format_usd;
pub use monitor::{RiskMonitor, DEFAULT_MONITOR_ID};
pub use observer::{LoggingObserver, MonitorObserver, NoOpObserver};
pub use recommendations::recommended_actions;
pub use report::{DisruptionSummary, ReportSummary, SummaryReport};
pub use scoring::{compute_risk_score, urgency_for};

// Re-export the core data model for convenience.
pub use disruption_core::{
    Alert, Disruption, DisruptionSnapshot, DisruptionType, RiskAssessment, SeverityLevel,
    Urgency, ValidationError,
};
