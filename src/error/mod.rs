//! Error handling module
//!
//! `AppError` is the application-level error returned by CLI handlers. It
//! wraps dispatch failures and adds configuration and validation errors
//! raised before a dispatcher is ever called.

pub mod app_error;

pub use app_error::{AppError, AppResult};
