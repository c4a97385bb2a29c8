//! The risk monitor engine.

use chrono::Utc;
use disruption_core::{Alert, Disruption, DisruptionSnapshot, RiskAssessment, SeverityLevel};
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::error::MonitorError;
use crate::observer::{MonitorObserver, NoOpObserver};
use crate::recommendations::recommended_actions;
use crate::report::{DisruptionSummary, ReportSummary, SummaryReport};
use crate::scoring::{compute_risk_score, urgency_for};

/// Monitor id used when none is supplied.
pub const DEFAULT_MONITOR_ID: &str = "risk_monitor_001";

/// Stateful registry and alerting engine for disruption events.
///
/// Tracks the currently active disruptions (latest write wins per id) and
/// the cumulative alert history. Nothing is ever evicted or expired; the
/// caller's process lifetime bounds the data lifetime.
///
/// The monitor is single-threaded and synchronous. Callers exposing it
/// behind a concurrent boundary must wrap it in a single lock, since
/// [`ingest`](RiskMonitor::ingest) performs a read-modify-write over both
/// collections as one logical unit.
pub struct RiskMonitor {
    monitor_id: String,
    /// Active disruptions by id, in registration order.
    active_disruptions: IndexMap<String, Disruption>,
    /// Every alert ever generated, oldest first.
    alert_history: Vec<Alert>,
    observer: Box<dyn MonitorObserver>,
}

impl Default for RiskMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_MONITOR_ID)
    }
}

impl RiskMonitor {
    /// Create a monitor with the given id and no observer.
    pub fn new(monitor_id: impl Into<String>) -> Self {
        let monitor_id = monitor_id.into();
        info!("Risk monitor {} initialized", monitor_id);

        Self {
            monitor_id,
            active_disruptions: IndexMap::new(),
            alert_history: Vec::new(),
            observer: Box::new(NoOpObserver),
        }
    }

    /// Attach an observer notified on alert emission and ingestion errors.
    pub fn with_observer(mut self, observer: impl MonitorObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// The monitor's identifier, included in summary reports.
    pub fn monitor_id(&self) -> &str {
        &self.monitor_id
    }

    /// Ingest a disruption event and return the generated alert.
    ///
    /// The record is validated, scored and turned into an alert before any
    /// state is touched. On success the disruption is upserted into the
    /// active set (a re-used id overwrites the previous entry) and the
    /// alert is appended to history. On failure both collections are left
    /// unchanged.
    pub fn ingest(&mut self, disruption: Disruption) -> Result<Alert, MonitorError> {
        let alert = match self.build_alert(&disruption) {
            Ok(alert) => alert,
            Err(err) => {
                warn!("Rejected disruption {:?}: {}", disruption.id, err);
                self.observer.on_error(&err);
                return Err(err);
            }
        };

        info!(
            "New disruption detected: {} (Severity: {}, Risk Score: {:.2})",
            disruption.title,
            disruption.severity.as_str(),
            alert.risk_assessment.risk_score,
        );

        self.active_disruptions
            .insert(disruption.id.clone(), disruption);
        self.alert_history.push(alert.clone());
        self.observer.on_alert(&alert);

        Ok(alert)
    }

    fn build_alert(&self, disruption: &Disruption) -> Result<Alert, MonitorError> {
        disruption.validate()?;

        let risk_score = compute_risk_score(disruption);
        let total_estimated_cost =
            disruption.estimated_impact_days as f64 * disruption.estimated_cost_per_day;

        Ok(Alert {
            alert_id: format!("ALERT_{}", disruption.id),
            timestamp: Utc::now(),
            disruption: DisruptionSnapshot::from(disruption),
            risk_assessment: RiskAssessment {
                risk_score: round2(risk_score),
                estimated_impact_days: disruption.estimated_impact_days,
                estimated_daily_cost: disruption.estimated_cost_per_day,
                total_estimated_cost,
                confidence: disruption.confidence,
            },
            recommended_actions: recommended_actions(disruption, risk_score),
            urgency: urgency_for(risk_score),
        })
    }

    /// Compact summaries of all currently active disruptions, in
    /// registration order.
    pub fn active_disruptions_view(&self) -> Vec<DisruptionSummary> {
        self.active_disruptions
            .values()
            .map(DisruptionSummary::from)
            .collect()
    }

    /// All alerts generated so far, oldest first.
    pub fn alert_history(&self) -> &[Alert] {
        &self.alert_history
    }

    /// Aggregate report over the current active set.
    ///
    /// Severity counts and the projected total cost are recomputed from
    /// the active set each call; the alert total covers the monitor's
    /// whole lifetime.
    pub fn summary_report(&self) -> SummaryReport {
        let mut critical_alerts = 0;
        let mut high_alerts = 0;
        let mut medium_alerts = 0;
        let mut low_alerts = 0;
        let mut total_estimated_cost = 0.0;

        for disruption in self.active_disruptions.values() {
            match disruption.severity {
                SeverityLevel::Critical => critical_alerts += 1,
                SeverityLevel::High => high_alerts += 1,
                SeverityLevel::Medium => medium_alerts += 1,
                SeverityLevel::Low => low_alerts += 1,
            }
            total_estimated_cost +=
                disruption.estimated_impact_days as f64 * disruption.estimated_cost_per_day;
        }

        SummaryReport {
            monitor_id: self.monitor_id.clone(),
            report_timestamp: Utc::now(),
            summary: ReportSummary {
                total_active_disruptions: self.active_disruptions.len(),
                critical_alerts,
                high_alerts,
                medium_alerts,
                low_alerts,
                total_estimated_cost,
                total_alerts_generated: self.alert_history.len(),
            },
            active_disruptions: self.active_disruptions_view(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
