// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! These types allow command handlers to return data instead of printing
//! directly, improving testability and separation of concerns.

use std::time::Duration;

use orgstat_core::{Report, RepositoryRecord, SortKey, SortOrder};
use serde::Serialize;

/// Result from the report command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportResult {
    /// CPU time consumed by the process, in seconds.
    pub elapsed_cpu_seconds: f64,
    /// Column the repositories are ordered by.
    pub sort_by: SortKey,
    /// Direction of the ordering.
    pub order: SortOrder,
    /// Repositories in display order.
    pub repositories: Vec<RepositoryRecord>,
}

impl ReportResult {
    /// Wraps an ordered report; elapsed time is filled in just before output.
    pub fn new(report: Report) -> Self {
        Self {
            elapsed_cpu_seconds: 0.0,
            sort_by: report.sort_by(),
            order: report.order(),
            repositories: report.into_rows(),
        }
    }

    /// Records the CPU time spent producing the report.
    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed_cpu_seconds = elapsed.as_secs_f64();
        self
    }
}
