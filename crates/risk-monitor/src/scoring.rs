//! Risk scoring and urgency classification.
//!
//! Both functions here are pure: the monitor calls them during ingestion,
//! and tests can exercise them without any registry state.

use disruption_core::{Disruption, Urgency};

/// Cap applied to the composite score.
const MAX_SCORE: f64 = 100.0;

/// Impact duration (days) at which the duration factor saturates.
const IMPACT_SATURATION_DAYS: f64 = 10.0;

/// Daily cost at which the cost factor saturates.
const COST_SATURATION: f64 = 1_000_000.0;

/// Compute the composite risk score in [0.0, 100.0].
///
/// Severity dominates (up to 90 points via [`SeverityLevel::base_score`]);
/// impact duration, daily cost and detection confidence each contribute at
/// most 10 points. The capped secondary factors break ties between events
/// of the same severity without overriding the classification.
///
/// The result never falls below the severity base score and never exceeds
/// 100, and is monotonically non-decreasing in impact days, daily cost and
/// confidence.
///
/// [`SeverityLevel::base_score`]: disruption_core::SeverityLevel::base_score
pub fn compute_risk_score(disruption: &Disruption) -> f64 {
    let base = disruption.severity.base_score();

    let impact_factor =
        (disruption.estimated_impact_days as f64 / IMPACT_SATURATION_DAYS).min(1.0) * 10.0;
    let cost_factor = (disruption.estimated_cost_per_day / COST_SATURATION).min(1.0) * 10.0;
    let confidence_adjustment = disruption.confidence * 10.0;

    (base + impact_factor + cost_factor + confidence_adjustment).min(MAX_SCORE)
}

/// Classify a risk score into a response urgency tier.
///
/// Thresholds are inclusive lower bounds evaluated highest-first: a score
/// exactly on a boundary (40, 60, 80) belongs to the higher tier.
pub fn urgency_for(risk_score: f64) -> Urgency {
    if risk_score >= 80.0 {
        Urgency::Critical
    } else if risk_score >= 60.0 {
        Urgency::High
    } else if risk_score >= 40.0 {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}
