//! Result state of a list screen and normalization of backend responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::errors::BackendError;
use crate::listing::request::ResponseShape;

/// Paginated response shape shared by every search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<R> {
    pub content: Option<Vec<R>>,
    pub total_pages: Option<u64>,
    pub total_elements: Option<u64>,
}

/// Rows plus page metadata, as last settled by a search.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultState<R> {
    pub rows: Vec<R>,
    pub page: u32,
    pub total_pages: u64,
    pub total_elements: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R> Default for ResultState<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            page: 0,
            total_pages: 0,
            total_elements: 0,
            loading: false,
            error: None,
        }
    }
}

impl<R> ResultState<R> {
    /// Enters the loading state for `page`; previous rows stay visible.
    pub fn begin(&mut self, page: u32) {
        self.page = page;
        self.loading = true;
        self.error = None;
    }

    /// Replaces the rows with a successful response.
    pub fn settle(&mut self, rows: Rows<R>) {
        self.rows = rows.rows;
        self.total_pages = rows.total_pages;
        self.total_elements = rows.total_elements;
        self.error = None;
        self.loading = false;
    }

    /// Clears the rows and records `message`.
    pub fn fail(&mut self, message: String) {
        self.rows.clear();
        self.total_pages = 0;
        self.total_elements = 0;
        self.error = Some(message);
        self.loading = false;
    }

    pub fn map<T>(self, f: impl FnMut(R) -> T) -> ResultState<T> {
        ResultState {
            rows: self.rows.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            loading: self.loading,
            error: self.error,
        }
    }
}

/// Rows extracted from one response body.
#[derive(Debug, PartialEq)]
pub struct Rows<R> {
    pub rows: Vec<R>,
    pub total_pages: u64,
    pub total_elements: u64,
}

impl<R> Rows<R> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_pages: 0,
            total_elements: 0,
        }
    }
}

impl<R: DeserializeOwned> Rows<R> {
    /// Reads `body` according to the expected `shape`.
    ///
    /// A page body that is not an object and a list body that is not an array
    /// both count as empty. Rows that do not match `R` are a decode error.
    pub fn from_body(shape: ResponseShape, body: Value) -> Result<Self, BackendError> {
        match shape {
            ResponseShape::Page => {
                if !body.is_object() {
                    return Ok(Self::empty());
                }
                let envelope: PageEnvelope<R> = serde_json::from_value(body)?;
                Ok(Self {
                    rows: envelope.content.unwrap_or_default(),
                    total_pages: envelope.total_pages.unwrap_or(0),
                    total_elements: envelope.total_elements.unwrap_or(0),
                })
            }
            ResponseShape::List => {
                let rows: Vec<R> = match body {
                    Value::Array(_) => serde_json::from_value(body)?,
                    _ => Vec::new(),
                };
                let total_elements = rows.len() as u64;
                Ok(Self {
                    rows,
                    total_pages: 1,
                    total_elements,
                })
            }
            ResponseShape::Single => {
                let row: R = serde_json::from_value(body)?;
                Ok(Self {
                    rows: vec![row],
                    total_pages: 1,
                    total_elements: 1,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_envelope_defaults_missing_fields() {
        let rows: Rows<Value> = Rows::from_body(ResponseShape::Page, json!({})).unwrap();
        assert_eq!(rows, Rows::empty());

        let rows: Rows<Value> = Rows::from_body(
            ResponseShape::Page,
            json!({"content": [{"id": 1}], "totalPages": 4, "totalElements": 31}),
        )
        .unwrap();
        assert_eq!(rows.rows, vec![json!({"id": 1})]);
        assert_eq!((rows.total_pages, rows.total_elements), (4, 31));
    }

    #[test]
    fn page_envelope_with_null_content_is_empty() {
        let rows: Rows<Value> = Rows::from_body(
            ResponseShape::Page,
            json!({"content": null, "totalPages": null}),
        )
        .unwrap();
        assert_eq!(rows, Rows::empty());
    }

    #[test]
    fn list_body_must_be_an_array() {
        let rows: Rows<Value> =
            Rows::from_body(ResponseShape::List, json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!((rows.total_pages, rows.total_elements), (1, 2));

        let rows: Rows<Value> =
            Rows::from_body(ResponseShape::List, json!({"content": []})).unwrap();
        assert!(rows.rows.is_empty());
        assert_eq!(rows.total_pages, 1);
    }

    #[test]
    fn single_body_is_one_row() {
        let rows: Rows<Value> = Rows::from_body(ResponseShape::Single, json!({"id": 42})).unwrap();
        assert_eq!(rows.rows, vec![json!({"id": 42})]);
        assert_eq!((rows.total_pages, rows.total_elements), (1, 1));
    }

    #[test]
    fn failure_clears_rows_and_loading() {
        let mut state: ResultState<u32> = ResultState::default();
        state.begin(2);
        state.settle(Rows {
            rows: vec![1, 2],
            total_pages: 3,
            total_elements: 22,
        });
        state.begin(2);
        assert!(state.loading);

        state.fail("Request failed: 500".to_string());

        assert!(!state.loading);
        assert!(state.rows.is_empty());
        assert_eq!((state.total_pages, state.total_elements), (0, 0));
        assert_eq!(state.error.as_deref(), Some("Request failed: 500"));
    }
}
