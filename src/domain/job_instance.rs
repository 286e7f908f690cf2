use serde::{Deserialize, Serialize};

/// One row of the job instances table.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobInstance {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

/// Statuses a job instance can be filtered by.
pub const JOB_INSTANCE_STATUSES: &[&str] =
    &["RUNNING", "COMPLETED", "FAILED", "PENDING", "CANCELLED"];
