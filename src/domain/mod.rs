//! Records exchanged with the service tools backend.

pub mod column_mapping;
pub mod ingester;
pub mod job_instance;
pub mod job_log_entry;
pub mod log_notification;
pub mod types;
pub mod user;
