//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{EmailCommandHandler, SlackCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::notifications::DeliveryOutcome;

/// Execute a CLI command with the given settings
///
/// A failure suppressed by `--silent` is logged and reported as success.
/// Other failures are returned unlogged; the binary prints them once.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Merged and validated settings
///
/// # Errors
/// Returns configuration, validation or delivery errors from the handlers
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<DeliveryOutcome> {
    match &cli.command {
        Commands::Email(args) => EmailCommandHandler::new(settings).execute(args).await,
        Commands::Slack(args) => SlackCommandHandler::new(settings).execute(args).await,
    }
}
