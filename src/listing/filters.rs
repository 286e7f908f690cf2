//! Filter fields and the draft/committed filter values of a list screen.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// How a filter value is matched by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, substring match.
    Text,
    /// Timestamp typed into a `datetime-local` input.
    DateTime,
    /// Exact match against a fixed option list.
    Choice(&'static [&'static str]),
}

/// One named input of a screen's filter form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FilterField {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn datetime(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::DateTime,
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice(options),
        }
    }

    /// Normalizes a raw input for this field.
    ///
    /// Returns `Ok(None)` for blank input. Choice values are matched
    /// case-insensitively and returned in their canonical spelling.
    pub fn normalize(&self, raw: &str) -> Result<Option<String>, FilterError> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(None);
        }

        match self.kind {
            FieldKind::Text | FieldKind::DateTime => Ok(Some(value.to_string())),
            FieldKind::Choice(options) => options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(value))
                .map(|option| Some((*option).to_string()))
                .ok_or_else(|| FilterError::InvalidOption {
                    field: self.name,
                    value: value.to_string(),
                }),
        }
    }
}

/// Errors raised when editing filters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter `{0}`")]
    UnknownField(String),

    #[error("`{value}` is not a valid value for {field}")]
    InvalidOption { field: &'static str, value: String },
}

/// Filter values keyed by field name.
///
/// Values are stored trimmed; blank values are never stored, so "present"
/// always means "set".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to the trimmed `value`, or unsets it when blank.
    pub fn set(&mut self, name: impl Into<String>, value: &str) {
        let name = name.into();
        let value = value.trim();
        if value.is_empty() {
            self.values.remove(&name);
        } else {
            self.values.insert(name, value.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when `name` is set and nothing else is.
    pub fn is_only(&self, name: &str) -> bool {
        self.values.len() == 1 && self.is_set(name)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Set values in the order of `fields`; values without a field are skipped.
    pub fn in_field_order<'a>(
        &'a self,
        fields: &'a [FilterField],
    ) -> impl Iterator<Item = (&'static str, &'a str)> + 'a {
        fields
            .iter()
            .filter_map(|field| self.get(field.name).map(|value| (field.name, value)))
    }
}
