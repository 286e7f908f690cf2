use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the log notifications table.
///
/// The backend has shipped several shapes of this record, so every field is
/// optional and anything unrecognised is kept in `extra` for display.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogNotification {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub party_id: Option<i64>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "cMode")]
    pub c_mode: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub received_time: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogNotification {
    /// Time shown in the table: the creation stamp, else the receive time.
    pub fn display_time(&self) -> Option<&str> {
        self.timestamp.as_deref().or(self.received_time.as_deref())
    }
}

pub const LOG_LEVELS: &[&str] = &["ERROR", "WARN", "INFO", "DEBUG", "TRACE"];

pub const SUCCESS_OPTIONS: &[&str] = &["true", "false"];
