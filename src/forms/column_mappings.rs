//! Forms for creating and editing column mappings.

use serde::Deserialize;
use validator::Validate;

use crate::domain::column_mapping::ColumnMappingPayload;
use crate::domain::types::NonEmptyString;
use crate::forms::FormError;

/// Create/edit form; a blank `id` creates a new mapping.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SaveColumnMappingForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub json_path: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub main_column_name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub alternate_column_names: String,
}

/// Validated save request.
#[derive(Debug, PartialEq)]
pub struct SaveColumnMapping {
    /// `Some` for an update of an existing mapping.
    pub id: Option<i64>,
    pub payload: ColumnMappingPayload,
}

impl TryFrom<SaveColumnMappingForm> for SaveColumnMapping {
    type Error = FormError;

    fn try_from(form: SaveColumnMappingForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let id = match form.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse().map_err(|_| FormError::InvalidMappingId)?),
        };
        let json_path =
            NonEmptyString::new(&form.json_path).map_err(|_| FormError::MissingJsonPath)?;
        let main_column_name = NonEmptyString::new(&form.main_column_name)
            .map_err(|_| FormError::MissingMainColumn)?;

        Ok(Self {
            id,
            payload: ColumnMappingPayload {
                json_path,
                main_column_name,
                alternate_column_names: form.alternate_column_names.trim().to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, json_path: &str, main: &str) -> SaveColumnMappingForm {
        SaveColumnMappingForm {
            id: Some(id.to_string()),
            json_path: json_path.to_string(),
            main_column_name: main.to_string(),
            alternate_column_names: " UID,USR_ID ".to_string(),
        }
    }

    #[test]
    fn blank_id_creates() {
        let save = SaveColumnMapping::try_from(form(" ", " $.user.id ", "USER_ID")).unwrap();

        assert_eq!(save.id, None);
        assert_eq!(save.payload.json_path.as_str(), "$.user.id");
        assert_eq!(save.payload.alternate_column_names, "UID,USR_ID");
    }

    #[test]
    fn numeric_id_updates() {
        let save = SaveColumnMapping::try_from(form("7", "$.a", "A")).unwrap();
        assert_eq!(save.id, Some(7));
    }

    #[test]
    fn required_fields_are_checked() {
        assert_eq!(
            SaveColumnMapping::try_from(form("", "  ", "A")),
            Err(FormError::MissingJsonPath)
        );
        assert_eq!(
            SaveColumnMapping::try_from(form("", "$.a", "")),
            Err(FormError::MissingMainColumn)
        );
        assert_eq!(
            SaveColumnMapping::try_from(form("x", "$.a", "A")),
            Err(FormError::InvalidMappingId)
        );
    }
}
