//! Table rows as rendered by the list screens.

use serde::Serialize;

use crate::domain::column_mapping::ColumnMapping;
use crate::domain::job_instance::JobInstance;
use crate::domain::job_log_entry::JobLogEntry;
use crate::domain::log_notification::LogNotification;
use crate::dto::format_timestamp;
use crate::viewer::TextPanel;

fn timestamp(raw: Option<&str>) -> String {
    raw.map(format_timestamp).unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct LogNotificationRow {
    #[serde(flatten)]
    pub notification: LogNotification,
    pub time: String,
    pub message_panel: TextPanel,
}

impl LogNotificationRow {
    pub fn new(index: usize, notification: LogNotification) -> Self {
        let message_panel = TextPanel::new(
            format!("message-{index}"),
            "Message",
            notification.message.as_deref(),
        );
        Self {
            time: timestamp(notification.display_time()),
            message_panel,
            notification,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobInstanceRow {
    #[serde(flatten)]
    pub job: JobInstance,
    pub created_at: String,
    pub updated_at: String,
}

impl From<JobInstance> for JobInstanceRow {
    fn from(job: JobInstance) -> Self {
        Self {
            created_at: timestamp(job.created.as_deref()),
            updated_at: timestamp(job.updated.as_deref()),
            job,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobLogEntryRow {
    #[serde(flatten)]
    pub entry: JobLogEntry,
    pub event_time: String,
    pub payload_panel: TextPanel,
    pub stacktrace_panel: TextPanel,
}

impl From<JobLogEntry> for JobLogEntryRow {
    fn from(entry: JobLogEntry) -> Self {
        let payload_panel = TextPanel::new(
            format!("payload-{}", entry.id),
            format!("Payload #{}", entry.id),
            entry.payload.as_deref(),
        );
        let stacktrace_panel = TextPanel::new(
            format!("stacktrace-{}", entry.id),
            format!("Stacktrace #{}", entry.id),
            entry.stacktrace.as_deref(),
        );
        Self {
            event_time: timestamp(entry.event_ts.as_deref()),
            payload_panel,
            stacktrace_panel,
            entry,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColumnMappingRow {
    #[serde(flatten)]
    pub mapping: ColumnMapping,
    /// Alternate column names split on commas.
    pub alternates: Vec<String>,
}

impl From<ColumnMapping> for ColumnMappingRow {
    fn from(mapping: ColumnMapping) -> Self {
        let alternates = mapping
            .alternate_column_names
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self { mapping, alternates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::EMPTY_CONTENT;

    #[test]
    fn job_log_entry_panels_are_keyed_by_id() {
        let row = JobLogEntryRow::from(JobLogEntry {
            id: 9,
            stacktrace: Some("boom".to_string()),
            event_ts: Some("2025-10-04T19:52:07".to_string()),
            ..JobLogEntry::default()
        });

        assert_eq!(row.stacktrace_panel.id, "stacktrace-9");
        assert_eq!(row.stacktrace_panel.content, "boom");
        assert_eq!(row.payload_panel.content, EMPTY_CONTENT);
        assert_eq!(row.event_time, "2025-10-04 19:52:07");
    }

    #[test]
    fn alternates_are_split() {
        let row = ColumnMappingRow::from(ColumnMapping {
            id: 1,
            alternate_column_names: Some("UID, USR_ID,,".to_string()),
            ..ColumnMapping::default()
        });
        assert_eq!(row.alternates, vec!["UID", "USR_ID"]);
    }
}
