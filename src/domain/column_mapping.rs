use serde::{Deserialize, Serialize};

use crate::domain::types::NonEmptyString;

/// Mapping between a JSON path and the spreadsheet column(s) feeding it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    pub id: i64,
    #[serde(default)]
    pub json_path: Option<String>,
    #[serde(default)]
    pub main_column_name: Option<String>,
    /// Comma separated list of alternate column names.
    #[serde(default)]
    pub alternate_column_names: Option<String>,
}

/// Body of the create and update requests.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMappingPayload {
    pub json_path: NonEmptyString,
    pub main_column_name: NonEmptyString,
    pub alternate_column_names: String,
}
