//! DTOs used by the column mapping editor.

use serde::Serialize;

use crate::domain::column_mapping::ColumnMapping;

/// Values pre-filled in the create/edit form.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct ColumnMappingFormData {
    pub id: Option<i64>,
    pub json_path: String,
    pub main_column_name: String,
    pub alternate_column_names: String,
}

impl From<ColumnMapping> for ColumnMappingFormData {
    fn from(mapping: ColumnMapping) -> Self {
        Self {
            id: Some(mapping.id),
            json_path: mapping.json_path.unwrap_or_default(),
            main_column_name: mapping.main_column_name.unwrap_or_default(),
            alternate_column_names: mapping.alternate_column_names.unwrap_or_default(),
        }
    }
}

/// Outcome of a create or update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SaveOutcome::Created => "Created successfully",
            SaveOutcome::Updated => "Updated successfully",
        }
    }
}
