// SPDX-License-Identifier: Apache-2.0

//! Ordering of extracted records into a report.
//!
//! Sorting is stable: rows that compare equal keep the order in which they
//! appeared on the listing page. Rows missing the sort value go last in both
//! directions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::RepositoryRecord;

/// Header of the row-label column.
pub const NAME_COLUMN: &str = "tool name";

/// Headers of the value columns, in display order.
pub const VALUE_COLUMNS: [&str; 3] = [
    "number of issues",
    "number of pull requests",
    "last updated",
];

/// Column a report is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Open issue count.
    #[default]
    Issues,
    /// Open pull request count.
    PullRequests,
    /// Recency of the last update.
    LastUpdated,
    /// Repository name.
    Name,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

/// Records ordered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    rows: Vec<RepositoryRecord>,
    sort_by: SortKey,
    order: SortOrder,
}

impl Report {
    /// Sorts `records` by `sort_by` in the given `order`.
    #[must_use]
    pub fn build(mut records: Vec<RepositoryRecord>, sort_by: SortKey, order: SortOrder) -> Self {
        records.sort_by(|a, b| compare(a, b, sort_by, order));
        Self {
            rows: records,
            sort_by,
            order,
        }
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[RepositoryRecord] {
        &self.rows
    }

    /// Column the rows are ordered by.
    #[must_use]
    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Direction of the ordering.
    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Consumes the report, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<RepositoryRecord> {
        self.rows
    }
}

fn compare(a: &RepositoryRecord, b: &RepositoryRecord, key: SortKey, order: SortOrder) -> Ordering {
    match key {
        SortKey::Issues => compare_present(a.issue_count, b.issue_count, order),
        SortKey::PullRequests => compare_present(a.pull_request_count, b.pull_request_count, order),
        SortKey::LastUpdated => compare_present(a.updated_at, b.updated_at, order),
        SortKey::Name => compare_present(Some(&a.name), Some(&b.name), order),
    }
}

// Missing values sort after present ones regardless of direction.
fn compare_present<T: Ord>(a: Option<T>, b: Option<T>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
