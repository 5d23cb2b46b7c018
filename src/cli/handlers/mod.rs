//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod email;
pub mod slack;

pub use email::EmailCommandHandler;
pub use slack::SlackCommandHandler;

use crate::services::notifications::DeliveryOutcome;

/// Logs the final outcome of a dispatch for the operator
pub(crate) fn report(channel: &str, outcome: &DeliveryOutcome) {
    match outcome.suppressed_error() {
        None => tracing::info!(channel, "Notification delivered"),
        Some(err) => tracing::debug!(channel, status = ?err.status(), "Notification suppressed"),
    }
}
