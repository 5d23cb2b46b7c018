//! Notifier-RS Library
//!
//! Outbound notification dispatch: plain-text email through Mailgun and
//! channel messages through Slack incoming webhooks.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod services;

pub use services::notifications::{
    ChatMessage, DeliveryOutcome, DispatchError, EmailRequest, NotificationService, Recipients,
    send_chat_message, send_email,
};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
