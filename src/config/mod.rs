//! Configuration management module for notifier-rs
//!
//! Settings are read from `NOTIFIER_*` environment variables on top of
//! built-in defaults. Nested keys use `__` as separator, e.g.
//! `NOTIFIER_EMAIL__DOMAIN` maps to `email.domain`.
//!
//! Credentials are not part of these settings; they are passed
//! to the dispatchers explicitly by the caller.

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ChatSettings, EmailSettings, HttpSettings, LoggerSettings, Settings};
