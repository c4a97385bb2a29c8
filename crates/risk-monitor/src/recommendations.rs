//! Recommended-action rules.
//!
//! Rules live in an explicit ordered table so the firing order and
//! additivity stay auditable rule-by-rule. Multiple rules may fire for one
//! disruption; earlier entries carry higher operational priority.

use disruption_core::{Disruption, DisruptionType, SeverityLevel};

/// Daily cost above which the financial-impact rule fires.
const HIGH_COST_THRESHOLD: f64 = 100_000.0;

/// One entry in the rule table: a predicate over the disruption and its
/// computed risk score, plus the pair of actions emitted when it fires.
struct Rule {
    applies: fn(&Disruption, f64) -> bool,
    actions: [&'static str; 2],
}

/// Ordered rule table, checked top to bottom.
const RULES: &[Rule] = &[
    Rule {
        applies: |_, risk_score| risk_score >= 70.0,
        actions: [
            "URGENT: Activate emergency response team",
            "Notify executive leadership immediately",
        ],
    },
    Rule {
        applies: |d, _| d.severity >= SeverityLevel::High,
        actions: [
            "Identify alternative suppliers immediately",
            "Increase safety stock for affected items",
        ],
    },
    Rule {
        applies: |d, _| d.kind == DisruptionType::Weather,
        actions: [
            "Monitor weather patterns for route planning",
            "Consider alternative transportation routes",
        ],
    },
    Rule {
        applies: |d, _| d.kind == DisruptionType::Supplier,
        actions: [
            "Review supplier contracts and SLAs",
            "Contact backup suppliers",
        ],
    },
    Rule {
        applies: |d, _| d.estimated_cost_per_day > HIGH_COST_THRESHOLD,
        actions: [
            "Prepare financial impact report",
            "Update stakeholder communications",
        ],
    },
];

/// Actions emitted when no rule in the table fires.
const DEFAULT_ACTIONS: [&str; 2] = [
    "Continue monitoring situation",
    "Document disruption for future analysis",
];

/// Generate recommended actions for a disruption.
///
/// The returned list is never empty: if no rule fires, the default
/// monitoring actions are emitted instead.
pub fn recommended_actions(disruption: &Disruption, risk_score: f64) -> Vec<String> {
    let mut actions: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(disruption, risk_score))
        .flat_map(|rule| rule.actions.iter().map(|action| action.to_string()))
        .collect();

    if actions.is_empty() {
        actions.extend(DEFAULT_ACTIONS.iter().map(|action| action.to_string()));
    }

    actions
}
