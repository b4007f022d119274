// SPDX-License-Identifier: Apache-2.0

//! Per-repository metadata scraped from the listing page.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One repository row of the report.
///
/// Counts are `None` when the listing item had no matching link, which is
/// distinct from a link showing `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    /// Repository display name, unique within a report.
    pub name: String,
    /// Open issue count.
    pub issue_count: Option<u64>,
    /// Open pull request count.
    pub pull_request_count: Option<u64>,
    /// Instant of the last update.
    pub updated_at: Option<DateTime<Utc>>,
    /// Human-readable time since the last update (e.g. `"3 days"`).
    pub last_updated: Option<String>,
}

impl RepositoryRecord {
    /// Creates a record with only a name; other fields start out missing.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issue_count: None,
            pull_request_count: None,
            updated_at: None,
            last_updated: None,
        }
    }
}
