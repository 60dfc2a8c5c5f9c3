use anyhow::Context;
use school_report::prelude::*;
use school_report::telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    telemetry::init_logging();

    tracing::info!("Starting roster report...");

    let config = ConfigService::from_env();
    let database =
        DatabaseConfig::from_config(&config).context("Failed to load database configuration")?;
    tracing::info!(database = %database.redacted_url(), "Configuration loaded");

    let container = build_container(database);
    let generator = container
        .resolve_trait::<dyn ReportGenerator>()
        .context("Failed to resolve report generator")?;

    match generator.generate().await {
        Ok(summary) => {
            tracing::info!(
                teachers = summary.teachers,
                courses = summary.courses,
                enrollments = summary.enrollments,
                "Roster report finished"
            );
        }
        // Already recorded by the generator; not a process failure
        Err(ReportError::DeliveryFailed { .. }) => {
            tracing::warn!("Roster report finished without delivery");
        }
        Err(e) => return Err(e).context("Roster report failed"),
    }

    Ok(())
}
