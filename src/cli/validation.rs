//! Value parsers for CLI arguments

use crate::services::notifications::{self, is_valid_mailbox};

/// Validate that an argument is not blank
pub fn validate_non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("Value cannot be empty".to_string());
    }
    Ok(value.to_string())
}

/// Validate an email address or `Name <address>` mailbox
pub fn validate_address(value: &str) -> Result<String, String> {
    if !is_valid_mailbox(value) {
        return Err(format!("'{}' is not a valid email address", value));
    }
    Ok(value.to_string())
}

/// Validate a Slack workspace subdomain
pub fn validate_subdomain(value: &str) -> Result<String, String> {
    notifications::validate_subdomain(value)
        .map(|()| value.to_string())
        .map_err(|e| e.to_string())
}
