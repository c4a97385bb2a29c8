//! Summary report types.

use chrono::{DateTime, Utc};
use disruption_core::{Disruption, DisruptionType, SeverityLevel};
use serde::{Deserialize, Serialize};

/// Compact view of one active disruption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DisruptionType,
    pub title: String,
    pub severity: SeverityLevel,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Disruption> for DisruptionSummary {
    fn from(disruption: &Disruption) -> Self {
        Self {
            id: disruption.id.clone(),
            kind: disruption.kind,
            title: disruption.title.clone(),
            severity: disruption.severity,
            location: disruption.location.clone(),
            timestamp: disruption.timestamp,
        }
    }
}

/// Aggregate figures over the active set.
///
/// All four severity counts are always present, defaulting to zero.
/// `total_estimated_cost` stays numeric; presentation layers format it
/// (see [`crate::format_usd`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_active_disruptions: usize,
    pub critical_alerts: usize,
    pub high_alerts: usize,
    pub medium_alerts: usize,
    pub low_alerts: usize,
    /// Sum of days x daily cost over all active disruptions, recomputed
    /// from the active set at report time.
    pub total_estimated_cost: f64,
    /// Alerts generated over the monitor's lifetime, including overwrites.
    pub total_alerts_generated: usize,
}

/// Snapshot report over all currently active disruptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub monitor_id: String,
    pub report_timestamp: DateTime<Utc>,
    pub summary: ReportSummary,
    pub active_disruptions: Vec<DisruptionSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_projects_disruption_fields() {
        let disruption = Disruption {
            id: "DISRUPT_004".to_string(),
            kind: DisruptionType::Geopolitical,
            title: "Port strike".to_string(),
            description: "Dockworkers union strike".to_string(),
            severity: SeverityLevel::Critical,
            location: "Los Angeles, California".to_string(),
            affected_regions: vec!["West Coast US".to_string()],
            affected_suppliers: vec!["Port of LA".to_string()],
            estimated_impact_days: 10,
            estimated_cost_per_day: 800_000.0,
            timestamp: Utc::now(),
            source: "Labor Relations Board".to_string(),
            confidence: 0.9,
        };

        let summary = DisruptionSummary::from(&disruption);
        assert_eq!(summary.id, "DISRUPT_004");
        assert_eq!(summary.kind, DisruptionType::Geopolitical);
        assert_eq!(summary.severity, SeverityLevel::Critical);
        assert_eq!(summary.location, "Los Angeles, California");
        assert_eq!(summary.timestamp, disruption.timestamp);
    }

    #[test]
    fn test_report_serialized_field_names() {
        let report = SummaryReport {
            monitor_id: "risk_monitor_001".to_string(),
            report_timestamp: Utc::now(),
            summary: ReportSummary {
                total_active_disruptions: 1,
                critical_alerts: 1,
                high_alerts: 0,
                medium_alerts: 0,
                low_alerts: 0,
                total_estimated_cost: 8_000_000.0,
                total_alerts_generated: 1,
            },
            active_disruptions: vec![],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["monitor_id"], "risk_monitor_001");
        assert_eq!(value["summary"]["total_active_disruptions"], 1);
        assert_eq!(value["summary"]["critical_alerts"], 1);
        assert_eq!(value["summary"]["low_alerts"], 0);
        assert_eq!(value["summary"]["total_estimated_cost"], 8_000_000.0);
        assert_eq!(value["summary"]["total_alerts_generated"], 1);
    }
}
