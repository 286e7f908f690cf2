//! Per-screen configuration of the list view controller.

use crate::domain::job_instance::JOB_INSTANCE_STATUSES;
use crate::domain::job_log_entry::{JOB_LOG_ENTRY_STATUSES, JOB_LOG_ENTRY_TYPES};
use crate::domain::log_notification::{LOG_LEVELS, SUCCESS_OPTIONS};
use crate::domain::types::{PageSize, SortDirection};
use crate::listing::filters::{FilterError, FilterField, FilterState};
use crate::listing::request::{ExclusiveRoute, RequestDescriptor, RoutingPolicy};

/// Everything that distinguishes one list screen from another.
#[derive(Debug)]
pub struct ScreenConfig {
    /// Console route segment, e.g. `job-instances`.
    pub key: &'static str,
    pub title: &'static str,
    /// Backend resource path, e.g. `/job-instances`.
    pub resource: &'static str,
    pub fields: &'static [FilterField],
    pub routing: RoutingPolicy,
    pub sort_by: &'static str,
    pub sort_direction: SortDirection,
    /// `false` requests bare lists instead of page envelopes.
    pub paginated: bool,
}

impl ScreenConfig {
    pub fn field(&self, name: &str) -> Option<&FilterField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Validates and normalizes one filter input.
    pub fn normalize(&self, name: &str, value: &str) -> Result<Option<String>, FilterError> {
        self.field(name)
            .ok_or_else(|| FilterError::UnknownField(name.to_string()))?
            .normalize(value)
    }

    /// Builds the request for `filters` at `page`/`size`.
    pub fn describe(&self, filters: &FilterState, page: u32, size: PageSize) -> RequestDescriptor {
        let descriptor = self.routing.select(self.resource, self.fields, filters);
        let descriptor = if self.paginated {
            descriptor
        } else {
            descriptor.unpaginated()
        };
        descriptor.with_pagination(page, size, self.sort_by, self.sort_direction)
    }
}

pub static LOG_NOTIFICATIONS: ScreenConfig = ScreenConfig {
    key: "log-notifications",
    title: "Log Notifications",
    resource: "/log-notifications",
    fields: &[
        FilterField::text("message", "Message contains"),
        FilterField::choice("level", "Level", LOG_LEVELS),
        FilterField::text("source", "Source"),
        FilterField::text("partyId", "Party ID"),
        FilterField::choice("success", "Success", SUCCESS_OPTIONS),
        FilterField::datetime("start", "Received from"),
        FilterField::datetime("end", "Received to"),
    ],
    routing: RoutingPolicy::PriorityExclusive {
        routes: &[
            ExclusiveRoute::QueryValue {
                field: "message",
                path: "/search/paginated",
                param: "message",
            },
            ExclusiveRoute::PathValue {
                field: "level",
                prefix: "/level/",
                suffix: "/paginated",
            },
            ExclusiveRoute::PathValue {
                field: "source",
                prefix: "/source/",
                suffix: "/paginated",
            },
            ExclusiveRoute::PathValue {
                field: "partyId",
                prefix: "/party/",
                suffix: "/paginated",
            },
            ExclusiveRoute::PathValue {
                field: "success",
                prefix: "/success/",
                suffix: "/paginated",
            },
            ExclusiveRoute::Range {
                start_field: "start",
                end_field: "end",
                path: "/received-range/paginated",
            },
        ],
        fallback_path: "/paginated",
    },
    sort_by: "timestamp",
    sort_direction: SortDirection::Desc,
    paginated: true,
};

pub static JOB_INSTANCES: ScreenConfig = ScreenConfig {
    key: "job-instances",
    title: "Job Instances",
    resource: "/job-instances",
    fields: &[
        FilterField::text("id", "ID"),
        FilterField::text("name", "Name"),
        FilterField::choice("status", "Status", JOB_INSTANCE_STATUSES),
        FilterField::datetime("start", "Created from"),
        FilterField::datetime("end", "Created to"),
    ],
    routing: RoutingPolicy::DirectIdFallback {
        id_field: "id",
        search_path: "/search/paginated",
    },
    sort_by: "created",
    sort_direction: SortDirection::Desc,
    paginated: true,
};

pub static JOB_LOG_ENTRIES: ScreenConfig = ScreenConfig {
    key: "job-log-entries",
    title: "Job Log Entries",
    resource: "/job-log-entries",
    fields: &[
        FilterField::text("id", "ID"),
        FilterField::text("jobInstanceId", "Job Instance ID"),
        FilterField::text("jobName", "Job Name"),
        FilterField::choice("type", "Type", JOB_LOG_ENTRY_TYPES),
        FilterField::choice("status", "Status", JOB_LOG_ENTRY_STATUSES),
    ],
    routing: RoutingPolicy::DirectIdFallback {
        id_field: "id",
        search_path: "/search/paginated",
    },
    sort_by: "eventTs",
    sort_direction: SortDirection::Desc,
    paginated: true,
};

pub static COLUMN_MAPPINGS: ScreenConfig = ScreenConfig {
    key: "column-mappings",
    title: "Column Mappings",
    resource: "/column-mappings",
    fields: &[
        FilterField::text("jsonPath", "JSON Path"),
        FilterField::text("mainColumn", "Main Column"),
        FilterField::text("alternateColumns", "Alternate Columns"),
    ],
    routing: RoutingPolicy::PriorityExclusive {
        routes: &[
            ExclusiveRoute::QueryValue {
                field: "jsonPath",
                path: "/search/json-path",
                param: "q",
            },
            ExclusiveRoute::QueryValue {
                field: "mainColumn",
                path: "/search/main-column",
                param: "q",
            },
            ExclusiveRoute::QueryValue {
                field: "alternateColumns",
                path: "/search/alternate-columns",
                param: "q",
            },
        ],
        fallback_path: "/paginated",
    },
    sort_by: "id",
    sort_direction: SortDirection::Desc,
    paginated: true,
};

/// Every list screen, in navigation order.
pub static SCREENS: [&ScreenConfig; 4] = [
    &LOG_NOTIFICATIONS,
    &JOB_INSTANCES,
    &JOB_LOG_ENTRIES,
    &COLUMN_MAPPINGS,
];
