//! Risk monitor demo.
//!
//! Ingests four sample disruptions, prints each generated alert, then
//! prints the summary report.
//!
//! Run with: cargo run -p risk-monitor --example monitor_demo

use chrono::Utc;
use risk_monitor::{
    format_usd, Disruption, DisruptionType, LoggingObserver, RiskMonitor, SeverityLevel,
};

fn sample_disruptions() -> Vec<Disruption> {
    vec![
        Disruption {
            id: "DISRUPT_001".to_string(),
            kind: DisruptionType::Weather,
            title: "Hurricane Milton Approaching Florida Coast".to_string(),
            description: "Category 4 hurricane expected to impact major shipping ports"
                .to_string(),
            severity: SeverityLevel::Critical,
            location: "Florida, USA".to_string(),
            affected_regions: vec!["Southeast US".to_string(), "Gulf Coast".to_string()],
            affected_suppliers: vec![
                "Port of Miami".to_string(),
                "Jacksonville Port Authority".to_string(),
            ],
            estimated_impact_days: 7,
            estimated_cost_per_day: 500_000.0,
            timestamp: Utc::now(),
            source: "National Weather Service".to_string(),
            confidence: 0.95,
        },
        Disruption {
            id: "DISRUPT_002".to_string(),
            kind: DisruptionType::Supplier,
            title: "Semiconductor Manufacturer Maintenance Shutdown".to_string(),
            description: "Taiwan-based chip supplier scheduled maintenance".to_string(),
            severity: SeverityLevel::Medium,
            location: "Taiwan".to_string(),
            affected_regions: vec!["Asia Pacific".to_string(), "North America".to_string()],
            affected_suppliers: vec!["TSMC Fab 18".to_string()],
            estimated_impact_days: 14,
            estimated_cost_per_day: 75_000.0,
            timestamp: Utc::now(),
            source: "Supplier Communication".to_string(),
            confidence: 1.0,
        },
        Disruption {
            id: "DISRUPT_003".to_string(),
            kind: DisruptionType::Transportation,
            title: "Suez Canal Traffic Delays".to_string(),
            description: "Container ship experiencing mechanical issues causing backlog"
                .to_string(),
            severity: SeverityLevel::High,
            location: "Suez Canal, Egypt".to_string(),
            affected_regions: vec![
                "Europe".to_string(),
                "Asia".to_string(),
                "Middle East".to_string(),
            ],
            affected_suppliers: vec!["Multiple shipping lines".to_string()],
            estimated_impact_days: 3,
            estimated_cost_per_day: 250_000.0,
            timestamp: Utc::now(),
            source: "Maritime Traffic Monitor".to_string(),
            confidence: 0.85,
        },
        Disruption {
            id: "DISRUPT_004".to_string(),
            kind: DisruptionType::Geopolitical,
            title: "Port Strike in Los Angeles".to_string(),
            description: "Dockworkers union strike affecting West Coast operations".to_string(),
            severity: SeverityLevel::Critical,
            location: "Los Angeles, California".to_string(),
            affected_regions: vec!["West Coast US".to_string()],
            affected_suppliers: vec![
                "Port of LA".to_string(),
                "Port of Long Beach".to_string(),
            ],
            estimated_impact_days: 10,
            estimated_cost_per_day: 800_000.0,
            timestamp: Utc::now(),
            source: "Labor Relations Board".to_string(),
            confidence: 0.90,
        },
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("Supply Chain Disruption Response System - Demo");
    println!("{}", "=".repeat(60));

    let mut monitor = RiskMonitor::default().with_observer(LoggingObserver);

    println!("\nProcessing Disruptions...\n");
    for disruption in sample_disruptions() {
        let alert = monitor.ingest(disruption)?;

        println!("{}", alert.disruption.title);
        println!("   Severity: {}", alert.disruption.severity.as_str());
        println!("   Risk Score: {}/100", alert.risk_assessment.risk_score);
        println!("   Urgency: {}", alert.urgency);
        println!(
            "   Estimated Cost: {}",
            format_usd(alert.risk_assessment.total_estimated_cost)
        );
        println!("   Top Recommendation: {}", alert.recommended_actions[0]);
        println!();
    }

    println!("{}", "=".repeat(60));
    let report = monitor.summary_report();
    println!("\nSUMMARY REPORT");
    println!(
        "Total Active Disruptions: {}",
        report.summary.total_active_disruptions
    );
    println!("Critical Alerts: {}", report.summary.critical_alerts);
    println!("High Alerts: {}", report.summary.high_alerts);
    println!(
        "Total Estimated Cost: {}",
        format_usd(report.summary.total_estimated_cost)
    );
    println!(
        "Total Alerts Generated: {}",
        report.summary.total_alerts_generated
    );

    Ok(())
}
