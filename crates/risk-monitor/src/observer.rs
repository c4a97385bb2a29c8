//! Monitor observer trait and implementations.

use disruption_core::Alert;

use crate::error::MonitorError;

/// Hooks invoked by the monitor on ingestion outcomes.
///
/// Abstracted so instrumentation stays decoupled from the scoring logic
/// (tests, metrics pipelines, etc.)
pub trait MonitorObserver: Send + Sync {
    /// Called after an alert is generated and recorded.
    fn on_alert(&self, alert: &Alert);

    /// Called when ingestion fails. No state was changed.
    fn on_error(&self, error: &MonitorError);
}

/// A no-op observer that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoOpObserver;

impl MonitorObserver for NoOpObserver {
    fn on_alert(&self, _alert: &Alert) {}

    fn on_error(&self, _error: &MonitorError) {}
}

/// An observer that logs all events.
#[derive(Debug, Clone, Default)]
pub struct LoggingObserver;

impl MonitorObserver for LoggingObserver {
    fn on_alert(&self, alert: &Alert) {
        tracing::info!(
            "[{}] {} (Risk Score: {:.2}, Urgency: {})",
            alert.alert_id,
            alert.disruption.title,
            alert.risk_assessment.risk_score,
            alert.urgency
        );
    }

    fn on_error(&self, error: &MonitorError) {
        tracing::error!("Error monitoring disruption: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use disruption_core::{
        DisruptionSnapshot, DisruptionType, RiskAssessment, SeverityLevel, Urgency,
        ValidationError,
    };

    fn sample_alert() -> Alert {
        Alert {
            alert_id: "ALERT_DISRUPT_001".to_string(),
            timestamp: Utc::now(),
            disruption: DisruptionSnapshot {
                id: "DISRUPT_001".to_string(),
                kind: DisruptionType::Weather,
                title: "Hurricane approaching coast".to_string(),
                description: "Category 4 hurricane".to_string(),
                severity: SeverityLevel::Critical,
                location: "Florida, USA".to_string(),
                affected_regions: vec![],
                affected_suppliers: vec![],
            },
            risk_assessment: RiskAssessment {
                risk_score: 100.0,
                estimated_impact_days: 7,
                estimated_daily_cost: 500_000.0,
                total_estimated_cost: 3_500_000.0,
                confidence: 0.95,
            },
            recommended_actions: vec!["URGENT: Activate emergency response team".to_string()],
            urgency: Urgency::Critical,
        }
    }

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;

        // Should not panic
        observer.on_alert(&sample_alert());
        observer.on_error(&MonitorError::InvalidDisruption(ValidationError::EmptyId));
    }

    #[test]
    fn test_logging_observer() {
        let observer = LoggingObserver;

        // Should not panic
        observer.on_alert(&sample_alert());
        observer.on_error(&MonitorError::AlertGeneration("test".to_string()));
    }
}
