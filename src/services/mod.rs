//! Service layer for notification dispatch.

pub mod notifications;

pub use notifications::NotificationService;
