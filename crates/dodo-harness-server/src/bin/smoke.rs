//! Backend smoke probes
//!
//! Runs the probe sequence against `BACKEND_URL` and exits non-zero when any
//! probe fails.

use dodo_harness_core::{ApiClient, HarnessConfig, smoke};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HarnessConfig::from_env()?;
    let origin = std::env::var("HARNESS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());
    let client = ApiClient::new(&config);

    tracing::info!(backend = %client.base_url(), mode = %config.mode, "Starting smoke probes");

    let report = smoke::run(&client, &origin).await;
    for result in &report.results {
        println!("{result}");
    }
    println!(
        "\n{} passed, {} failed, {} total",
        report.passed(),
        report.failed(),
        report.results.len()
    );

    if !report.is_success() {
        anyhow::bail!("{} probe(s) failed", report.failed());
    }

    Ok(())
}
