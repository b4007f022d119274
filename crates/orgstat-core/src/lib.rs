// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # orgstat core
//!
//! Core library for orgstat - a health snapshot of every repository in a
//! GitHub organization.
//!
//! The pipeline has three stages:
//! - [`fetch`] - download the organization listing page
//! - [`extract`] - turn the page into [`RepositoryRecord`]s
//! - [`report`] - order the records for display
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orgstat_core::{
//!     Extractor, HttpFetcher, OrgPageExtractor, PageFetcher, Report, SystemClock, TimeFormatter,
//!     load_config,
//! };
//!
//! # async fn example() -> orgstat_core::Result<()> {
//! let config = load_config()?;
//!
//! let document = HttpFetcher::new(&config.github)?.fetch().await?;
//! let records = OrgPageExtractor::new(TimeFormatter::new(SystemClock)).parse(&document)?;
//! let report = Report::build(records, config.report.sort_by, config.report.order);
//!
//! for row in report.rows() {
//!     println!("{}: {:?} open issues", row.name, row.issue_count);
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Error Handling
// ============================================================================

pub use error::OrgstatError;

/// Convenience Result type for orgstat operations.
///
/// This is equivalent to `std::result::Result<T, OrgstatError>`.
pub type Result<T> = std::result::Result<T, OrgstatError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, GitHubConfig, OutputFormat, ReportConfig, UiConfig, config_dir, config_file_path,
    load_config,
};

// ============================================================================
// Pipeline
// ============================================================================

pub use extract::{Extractor, OrgPageExtractor};
pub use fetch::{HttpFetcher, PageFetcher};
pub use record::RepositoryRecord;
pub use report::{NAME_COLUMN, Report, SortKey, SortOrder, VALUE_COLUMNS};
pub use time::{Clock, FixedClock, SystemClock, TimeFormatter};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod record;
pub mod report;
pub mod time;
