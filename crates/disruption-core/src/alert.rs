//! Alert output types.
//!
//! An [`Alert`] is produced once per ingested disruption and never mutated
//! afterwards. Field names and nesting are preserved exactly as existing
//! presentation layers consume them, so alerts serialize directly.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::disruption::{Disruption, DisruptionType, SeverityLevel};

/// Compact copy of a disruption's public fields embedded in an [`Alert`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionSnapshot {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DisruptionType,
    pub title: String,
    pub description: String,
    pub severity: SeverityLevel,
    pub location: String,
    pub affected_regions: Vec<String>,
    pub affected_suppliers: Vec<String>,
}

impl From<&Disruption> for DisruptionSnapshot {
    fn from(disruption: &Disruption) -> Self {
        Self {
            id: disruption.id.clone(),
            kind: disruption.kind,
            title: disruption.title.clone(),
            description: disruption.description.clone(),
            severity: disruption.severity,
            location: disruption.location.clone(),
            affected_regions: disruption.affected_regions.clone(),
            affected_suppliers: disruption.affected_suppliers.clone(),
        }
    }
}

/// Computed risk figures for one disruption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Composite risk score in [0.0, 100.0], rounded to two decimals.
    pub risk_score: f64,
    pub estimated_impact_days: u32,
    pub estimated_daily_cost: f64,
    /// Projected total cost over the impact window (days x daily cost).
    pub total_estimated_cost: f64,
    pub confidence: f64,
}

/// Coarse response-time classification derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "CRITICAL - Immediate Action Required")]
    Critical,
    #[serde(rename = "HIGH - Action Required Within 4 Hours")]
    High,
    #[serde(rename = "MEDIUM - Action Required Within 24 Hours")]
    Medium,
    #[serde(rename = "LOW - Monitoring Required")]
    Low,
}

impl Urgency {
    /// Full label, as shown to operators.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL - Immediate Action Required",
            Self::High => "HIGH - Action Required Within 4 Hours",
            Self::Medium => "MEDIUM - Action Required Within 24 Hours",
            Self::Low => "LOW - Monitoring Required",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The structured output record produced for each ingested disruption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Derived key: `"ALERT_"` followed by the disruption id.
    pub alert_id: String,
    /// When the alert was generated.
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the triggering disruption.
    pub disruption: DisruptionSnapshot,
    /// Computed risk figures.
    pub risk_assessment: RiskAssessment,
    /// Recommended actions, in descending operational priority. Never empty.
    pub recommended_actions: Vec<String>,
    /// Response-time classification.
    pub urgency: Urgency,
}
