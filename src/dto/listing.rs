//! Query parsing and page data of the list screens.

use serde::Serialize;

use crate::domain::types::PageSize;
use crate::listing::filters::{FieldKind, FilterField, FilterState};
use crate::listing::state::ResultState;
use crate::listing::{ListView, ScreenConfig};
use crate::pagination::Pager;

/// Filters and cursor read from a list screen's query string.
#[derive(Debug, Default, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<(String, String)>,
    pub page: u32,
    pub size: PageSize,
}

impl ListQuery {
    /// Parses `name=Sync&status=FAILED&page=2&size=20`.
    ///
    /// A missing or malformed `page`/`size` falls back to the first page and
    /// the default size; blank filters are dropped.
    pub fn parse(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_html_form::from_str(query).unwrap_or_default();

        let mut parsed = ListQuery::default();
        for (name, value) in pairs {
            match name.as_str() {
                "page" => parsed.page = value.trim().parse().unwrap_or(0),
                "size" => {
                    parsed.size = value
                        .trim()
                        .parse()
                        .ok()
                        .and_then(|size| PageSize::new(size).ok())
                        .unwrap_or_default();
                }
                _ if value.trim().is_empty() => {}
                _ => parsed.filters.push((name, value)),
            }
        }
        parsed
    }

    pub fn filter_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

const NO_OPTIONS: &[&str] = &[];

/// One input of the filter form.
#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    /// `text`, `datetime-local` or `select`.
    pub input: &'static str,
    pub options: &'static [&'static str],
    pub value: String,
}

impl FieldView {
    fn new(field: &FilterField, filters: &FilterState) -> Self {
        let (input, options) = match field.kind {
            FieldKind::Text => ("text", NO_OPTIONS),
            FieldKind::DateTime => ("datetime-local", NO_OPTIONS),
            FieldKind::Choice(options) => ("select", options),
        };
        Self {
            name: field.name,
            label: field.label,
            input,
            options,
            value: filters.get(field.name).unwrap_or_default().to_string(),
        }
    }
}

/// Everything a list template renders.
#[derive(Debug, Serialize)]
pub struct ListPageData<T> {
    pub key: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub result: ResultState<T>,
    pub pager: Pager,
    pub display_page: u64,
    pub size: u32,
    pub sizes: [u32; 3],
    /// Current filters, URL-encoded, for pager and size links.
    pub filter_query: String,
}

impl<T> ListPageData<T> {
    pub fn new<R>(screen: &ScreenConfig, view: ListView<R>, row: impl FnMut(R) -> T) -> Self {
        Self {
            key: screen.key,
            title: screen.title,
            fields: screen
                .fields
                .iter()
                .map(|field| FieldView::new(field, &view.filters))
                .collect(),
            display_page: view.pager.display_page(),
            pager: view.pager,
            size: view.size.get(),
            sizes: PageSize::ALLOWED,
            filter_query: serde_html_form::to_string(&view.filters).unwrap_or_default(),
            result: view.result.map(row),
        }
    }
}
