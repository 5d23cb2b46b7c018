use clap::Parser;
use notifier_rs::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    tracing::debug!(version = notifier_rs::pkg_version(), "Starting notifier");

    let outcome = execute_command(&cli, settings).await.map_err(|err| {
        if err.is_delivery_failure() {
            anyhow::Error::new(err).context("Delivery failed (pass --silent to ignore)")
        } else {
            err.into()
        }
    })?;
    tracing::debug!(delivered = outcome.is_delivered(), "Done");
    Ok(())
}
