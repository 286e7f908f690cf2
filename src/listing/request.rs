//! Request descriptors and the routing policies that derive them.

use std::fmt::{self, Display, Formatter};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::domain::types::{PageSize, SortDirection};
use crate::listing::filters::{FilterField, FilterState};

/// Characters escaped when a filter value is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes `value` as one path segment.
///
/// `.` and `..` are refused: URL resolution would treat them as relative
/// segments and escape the resource path.
fn path_segment(value: &str) -> Option<String> {
    match value {
        "." | ".." => None,
        _ => Some(utf8_percent_encode(value, PATH_SEGMENT).to_string()),
    }
}

/// What the backend is expected to answer for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    /// Page envelope `{content, totalPages, totalElements}`.
    Page,
    /// Bare JSON array.
    List,
    /// One record looked up by id.
    Single,
}

/// One GET, fully derived from the committed filters and the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    endpoint_path: String,
    query_params: Vec<(String, String)>,
    shape: ResponseShape,
}

impl RequestDescriptor {
    pub fn new(endpoint_path: impl Into<String>, shape: ResponseShape) -> Self {
        Self {
            endpoint_path: endpoint_path.into(),
            query_params: Vec::new(),
            shape,
        }
    }

    /// Appends a parameter; a name that is already present is overwritten in
    /// place so every name appears once.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.query_params.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.query_params.push((name, value)),
        }
        self
    }

    /// Adds `page`, `size`, `sortBy` and `sortDirection` to paginated requests.
    pub fn with_pagination(
        self,
        page: u32,
        size: PageSize,
        sort_by: &str,
        sort_direction: SortDirection,
    ) -> Self {
        if !self.is_paginated() {
            return self;
        }
        self.with_param("page", page.to_string())
            .with_param("size", size.to_string())
            .with_param("sortBy", sort_by)
            .with_param("sortDirection", sort_direction.as_str())
    }

    /// Turns a page request into a bare-list request on the same resource.
    pub fn unpaginated(mut self) -> Self {
        if self.shape == ResponseShape::Page {
            if let Some(stripped) = self.endpoint_path.strip_suffix("/paginated") {
                self.endpoint_path = stripped.to_string();
            }
            self.shape = ResponseShape::List;
        }
        self
    }

    pub fn endpoint_path(&self) -> &str {
        &self.endpoint_path
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn shape(&self) -> ResponseShape {
        self.shape
    }

    pub fn is_paginated(&self) -> bool {
        self.shape == ResponseShape::Page
    }

    /// URL-encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        serde_html_form::to_string(&self.query_params).unwrap_or_default()
    }
}

impl Display for RequestDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.endpoint_path)?;
        if !self.query_params.is_empty() {
            write!(f, "?{}", self.query_string())?;
        }
        Ok(())
    }
}

/// One branch of a [`RoutingPolicy::PriorityExclusive`] chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExclusiveRoute {
    /// `resource + prefix + {value} + suffix`, e.g. `/party/{v}/paginated`.
    PathValue {
        field: &'static str,
        prefix: &'static str,
        suffix: &'static str,
    },
    /// `resource + path?param=value`, e.g. `/search/json-path?q=v`.
    QueryValue {
        field: &'static str,
        path: &'static str,
        param: &'static str,
    },
    /// Both bounds must be set; sent under their field names.
    Range {
        start_field: &'static str,
        end_field: &'static str,
        path: &'static str,
    },
}

impl ExclusiveRoute {
    fn select(&self, resource: &str, filters: &FilterState) -> Option<RequestDescriptor> {
        match *self {
            ExclusiveRoute::PathValue {
                field,
                prefix,
                suffix,
            } => filters.get(field).and_then(path_segment).map(|value| {
                RequestDescriptor::new(
                    format!("{resource}{prefix}{value}{suffix}"),
                    ResponseShape::Page,
                )
            }),
            ExclusiveRoute::QueryValue { field, path, param } => filters.get(field).map(|value| {
                RequestDescriptor::new(format!("{resource}{path}"), ResponseShape::Page)
                    .with_param(param, value)
            }),
            ExclusiveRoute::Range {
                start_field,
                end_field,
                path,
            } => match (filters.get(start_field), filters.get(end_field)) {
                (Some(start), Some(end)) => Some(
                    RequestDescriptor::new(format!("{resource}{path}"), ResponseShape::Page)
                        .with_param(start_field, start)
                        .with_param(end_field, end),
                ),
                _ => None,
            },
        }
    }
}

/// How a screen turns its committed filters into an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutingPolicy {
    /// Every set filter becomes a query parameter on `resource + path`.
    CombinedSearch { path: &'static str },
    /// `GET resource/{id}` when the id is the only set filter, combined
    /// search on `search_path` otherwise.
    DirectIdFallback {
        id_field: &'static str,
        search_path: &'static str,
    },
    /// The first route whose fields are set wins and every other filter is
    /// ignored; `fallback_path` when none matches.
    PriorityExclusive {
        routes: &'static [ExclusiveRoute],
        fallback_path: &'static str,
    },
}

impl RoutingPolicy {
    /// Derives the endpoint for `filters`, before pagination is applied.
    pub fn select(
        &self,
        resource: &str,
        fields: &[FilterField],
        filters: &FilterState,
    ) -> RequestDescriptor {
        match *self {
            RoutingPolicy::CombinedSearch { path } => combined(resource, path, fields, filters),
            RoutingPolicy::DirectIdFallback {
                id_field,
                search_path,
            } => match filters.get(id_field).and_then(path_segment) {
                Some(id) if filters.is_only(id_field) => {
                    RequestDescriptor::new(format!("{resource}/{id}"), ResponseShape::Single)
                }
                _ => combined(resource, search_path, fields, filters),
            },
            RoutingPolicy::PriorityExclusive {
                routes,
                fallback_path,
            } => routes
                .iter()
                .find_map(|route| route.select(resource, filters))
                .unwrap_or_else(|| {
                    RequestDescriptor::new(format!("{resource}{fallback_path}"), ResponseShape::Page)
                }),
        }
    }
}

fn combined(
    resource: &str,
    path: &str,
    fields: &[FilterField],
    filters: &FilterState,
) -> RequestDescriptor {
    filters.in_field_order(fields).fold(
        RequestDescriptor::new(format!("{resource}{path}"), ResponseShape::Page),
        |descriptor, (name, value)| descriptor.with_param(name, value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FilterField] = &[
        FilterField::text("id", "ID"),
        FilterField::text("name", "Name"),
        FilterField::choice("status", "Status", &["RUNNING", "FAILED"]),
    ];

    const ROUTES: &[ExclusiveRoute] = &[
        ExclusiveRoute::PathValue {
            field: "party",
            prefix: "/party/",
            suffix: "/paginated",
        },
        ExclusiveRoute::QueryValue {
            field: "name",
            path: "/search/name",
            param: "q",
        },
        ExclusiveRoute::Range {
            start_field: "start",
            end_field: "end",
            path: "/range/paginated",
        },
    ];

    const EXCLUSIVE: RoutingPolicy = RoutingPolicy::PriorityExclusive {
        routes: ROUTES,
        fallback_path: "/paginated",
    };

    fn filters(pairs: &[(&str, &str)]) -> FilterState {
        let mut filters = FilterState::new();
        for (name, value) in pairs {
            filters.set(*name, value);
        }
        filters
    }

    #[test]
    fn id_only_is_a_direct_lookup() {
        let policy = RoutingPolicy::DirectIdFallback {
            id_field: "id",
            search_path: "/search/paginated",
        };

        let descriptor = policy.select("/jobs", FIELDS, &filters(&[("id", "42")]));

        assert_eq!(descriptor.endpoint_path(), "/jobs/42");
        assert_eq!(descriptor.shape(), ResponseShape::Single);
        assert!(!descriptor.is_paginated());
        assert!(descriptor.query_params().is_empty());
    }

    #[test]
    fn id_with_other_filters_falls_back_to_search() {
        let policy = RoutingPolicy::DirectIdFallback {
            id_field: "id",
            search_path: "/search/paginated",
        };

        let descriptor = policy.select(
            "/jobs",
            FIELDS,
            &filters(&[("status", "FAILED"), ("id", "42"), ("name", "")]),
        );

        assert_eq!(descriptor.endpoint_path(), "/jobs/search/paginated");
        assert_eq!(
            descriptor.query_params(),
            &[
                ("id".to_string(), "42".to_string()),
                ("status".to_string(), "FAILED".to_string()),
            ]
        );
    }

    #[test]
    fn direct_id_is_percent_encoded() {
        let policy = RoutingPolicy::DirectIdFallback {
            id_field: "id",
            search_path: "/search/paginated",
        };

        let descriptor = policy.select("/jobs", FIELDS, &filters(&[("id", "a/b c")]));

        assert_eq!(descriptor.endpoint_path(), "/jobs/a%2Fb%20c");
    }

    #[test]
    fn dot_segments_never_reach_the_path() {
        let policy = RoutingPolicy::DirectIdFallback {
            id_field: "id",
            search_path: "/search/paginated",
        };

        let descriptor = policy.select("/jobs", FIELDS, &filters(&[("id", "..")]));
        assert_eq!(descriptor.endpoint_path(), "/jobs/search/paginated");
        assert_eq!(descriptor.query_param("id"), Some(".."));
        assert_eq!(descriptor.shape(), ResponseShape::Page);

        let descriptor = EXCLUSIVE.select("/jobs", FIELDS, &filters(&[("party", ".")]));
        assert_eq!(descriptor.endpoint_path(), "/jobs/paginated");

        let descriptor = policy.select("/jobs", FIELDS, &filters(&[("id", "v1.2")]));
        assert_eq!(descriptor.endpoint_path(), "/jobs/v1.2");
    }

    #[test]
    fn exclusive_routes_follow_priority() {
        let descriptor = EXCLUSIVE.select(
            "/logs",
            FIELDS,
            &filters(&[("name", "sync"), ("party", "7"), ("start", "a"), ("end", "b")]),
        );

        assert_eq!(descriptor.endpoint_path(), "/logs/party/7/paginated");
        assert!(descriptor.query_params().is_empty());
    }

    #[test]
    fn exclusive_query_route_sends_only_its_value() {
        let descriptor = EXCLUSIVE.select(
            "/logs",
            FIELDS,
            &filters(&[("name", "sync"), ("start", "a"), ("end", "b")]),
        );

        assert_eq!(descriptor.to_string(), "/logs/search/name?q=sync");
    }

    #[test]
    fn half_open_range_uses_the_fallback() {
        let descriptor = EXCLUSIVE.select("/logs", FIELDS, &filters(&[("start", "a")]));
        assert_eq!(descriptor.to_string(), "/logs/paginated");

        let descriptor =
            EXCLUSIVE.select("/logs", FIELDS, &filters(&[("start", "a"), ("end", "b")]));
        assert_eq!(descriptor.to_string(), "/logs/range/paginated?start=a&end=b");
    }

    #[test]
    fn pagination_is_appended_after_filters() {
        let policy = RoutingPolicy::CombinedSearch {
            path: "/search/paginated",
        };
        let descriptor = policy
            .select("/jobs", FIELDS, &filters(&[("name", "Sync Job")]))
            .with_pagination(3, PageSize::new(20).unwrap(), "created", SortDirection::Desc);

        assert_eq!(
            descriptor.to_string(),
            "/jobs/search/paginated?name=Sync+Job&page=3&size=20&sortBy=created&sortDirection=desc"
        );
    }

    #[test]
    fn single_and_list_requests_skip_pagination() {
        let single = RequestDescriptor::new("/jobs/1", ResponseShape::Single).with_pagination(
            0,
            PageSize::DEFAULT,
            "id",
            SortDirection::Asc,
        );
        assert!(single.query_params().is_empty());

        let list = RequestDescriptor::new("/jobs/paginated", ResponseShape::Page).unpaginated();
        assert_eq!(list.endpoint_path(), "/jobs");
        assert_eq!(list.shape(), ResponseShape::List);
    }

    #[test]
    fn identical_inputs_give_identical_descriptors() {
        let state = filters(&[("name", "Sync"), ("status", "FAILED")]);
        let policy = RoutingPolicy::CombinedSearch { path: "/search" };

        assert_eq!(
            policy.select("/jobs", FIELDS, &state),
            policy.select("/jobs", FIELDS, &state)
        );
    }
}
