//! Services behind the column mapping editor.

use crate::backend::{Backend, WriteMethod};
use crate::domain::column_mapping::ColumnMapping;
use crate::dto::column_mappings::{ColumnMappingFormData, SaveOutcome};
use crate::forms::column_mappings::{SaveColumnMapping, SaveColumnMappingForm};
use crate::services::{ServiceError, ServiceResult};

const RESOURCE: &str = "/column-mappings";

/// Loads one mapping to pre-fill the edit form.
pub async fn load_column_mapping<B>(backend: &B, id: i64) -> ServiceResult<ColumnMappingFormData>
where
    B: Backend + ?Sized,
{
    let body = backend
        .get_json(&format!("{RESOURCE}/{id}"), &[])
        .await
        .map_err(|err| {
            if err.is_not_found() {
                ServiceError::NotFound
            } else {
                log::error!("Failed to load column mapping {id}: {err}");
                ServiceError::Backend(err)
            }
        })?;

    let mapping: ColumnMapping = serde_json::from_value(body)
        .map_err(|err| ServiceError::Backend(err.into()))?;
    Ok(mapping.into())
}

/// Creates a mapping, or updates it when the form carries an id.
pub async fn save_column_mapping<B>(
    backend: &B,
    form: SaveColumnMappingForm,
) -> ServiceResult<SaveOutcome>
where
    B: Backend + ?Sized,
{
    let save = SaveColumnMapping::try_from(form)?;
    let body = serde_json::to_value(&save.payload)
        .map_err(|err| ServiceError::Backend(err.into()))?;

    let (method, path, outcome) = match save.id {
        Some(id) => (WriteMethod::Put, format!("{RESOURCE}/{id}"), SaveOutcome::Updated),
        None => (WriteMethod::Post, RESOURCE.to_string(), SaveOutcome::Created),
    };

    backend
        .send_json(method, &path, &body)
        .await
        .map_err(|err| {
            log::error!("Failed to save column mapping: {err}");
            err
        })?;

    Ok(outcome)
}
