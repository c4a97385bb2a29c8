//! Disruption event records and their classifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of a supply chain disruption event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisruptionType {
    Weather,
    Geopolitical,
    Supplier,
    Transportation,
    NaturalDisaster,
    Pandemic,
    CyberSecurity,
}

impl DisruptionType {
    /// Get the wire name for this disruption type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Geopolitical => "geopolitical",
            Self::Supplier => "supplier",
            Self::Transportation => "transportation",
            Self::NaturalDisaster => "natural_disaster",
            Self::Pandemic => "pandemic",
            Self::CyberSecurity => "cyber_security",
        }
    }
}

/// Severity of a disruption, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityLevel {
    /// Base risk contribution for this severity level.
    ///
    /// Severity is the dominant scoring term: up to 90 of the 100-point
    /// scale comes from this table, so secondary factors can only break
    /// ties, not override the classification.
    pub fn base_score(&self) -> f64 {
        match self {
            Self::Low => 20.0,
            Self::Medium => 40.0,
            Self::High => 70.0,
            Self::Critical => 90.0,
        }
    }

    /// Get the wire name for this severity level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// A supply chain disruption event.
///
/// Records are treated as immutable once ingested: the monitor stores them
/// in its active registry and snapshots their public fields into alerts,
/// but never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disruption {
    /// Caller-supplied identifier (e.g., "DISRUPT_001"). Re-using an id
    /// overwrites the previous entry in the active registry.
    pub id: String,
    /// Event category.
    #[serde(rename = "type")]
    pub kind: DisruptionType,
    /// Short headline.
    pub title: String,
    /// Longer free-text description.
    pub description: String,
    /// Severity classification.
    pub severity: SeverityLevel,
    /// Free-text location.
    pub location: String,
    /// Regions affected, in reported order.
    pub affected_regions: Vec<String>,
    /// Suppliers affected, in reported order.
    pub affected_suppliers: Vec<String>,
    /// Expected duration of the impact, in days.
    pub estimated_impact_days: u32,
    /// Expected cost per day of impact, in currency units.
    pub estimated_cost_per_day: f64,
    /// When the disruption was detected or reported.
    pub timestamp: DateTime<Utc>,
    /// Provenance of the report (e.g., "National Weather Service").
    pub source: String,
    /// Detection confidence in [0.0, 1.0].
    pub confidence: f64,
}

impl Disruption {
    /// Check the record's field invariants.
    ///
    /// Rejects empty ids, confidence outside [0.0, 1.0], and negative or
    /// non-finite monetary values. The monitor runs this before a
    /// disruption is registered, so invalid records never reach the
    /// active set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange(self.confidence));
        }

        if !self.estimated_cost_per_day.is_finite() || self.estimated_cost_per_day < 0.0 {
            return Err(ValidationError::InvalidCost(self.estimated_cost_per_day));
        }

        Ok(())
    }
}
