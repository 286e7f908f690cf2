use serde::{Deserialize, Serialize};

/// One row of the job log entries table.
///
/// `payload` and `stacktrace` can be arbitrarily large and are shown through
/// the text viewer rather than inline.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobLogEntry {
    pub id: i64,
    #[serde(default)]
    pub job_instance_id: Option<i64>,
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub record_id: Option<i64>,
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub event_ts: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub stacktrace: Option<String>,
}

pub const JOB_LOG_ENTRY_TYPES: &[&str] = &["START", "PROCESS", "END"];
pub const JOB_LOG_ENTRY_STATUSES: &[&str] = &["SUCCESS", "ERROR", "WARNING"];
