use simulation::report::{SessionReport, DEFAULT_REPORT_PATH};
use simulation::session::{self, SessionConfig};
use simulation::summary::Summary;

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting market session simulation");

    let config = SessionConfig::default();
    println!("Generating {} orders...", config.order_count);
    println!("Simulating market...");

    let result = session::run(&config)?;
    println!("Simulation complete.");

    println!("\nFinal Order Book State:");
    println!("{}", result.engine.book());

    let summary = Summary::from_session(&result);
    println!("\n{summary}");

    let report = SessionReport::new(summary);
    report.write_to_file(DEFAULT_REPORT_PATH)?;
    println!("\nSummary report saved to {DEFAULT_REPORT_PATH}");

    tracing::info!("Session finished");
    Ok(())
}
