// SPDX-License-Identifier: Apache-2.0

//! Fetch, extract and order the organization's repositories.

use orgstat_core::{Extractor, PageFetcher, Report, ReportConfig};
use tracing::debug;

use super::types::ReportResult;

/// Runs the pipeline against the given page source and extractor.
pub async fn run(
    fetcher: &dyn PageFetcher,
    extractor: &dyn Extractor,
    config: &ReportConfig,
) -> orgstat_core::Result<ReportResult> {
    let document = fetcher.fetch().await?;
    let records = extractor.parse(&document)?;
    debug!(
        rows = records.len(),
        sort_by = ?config.sort_by,
        order = ?config.order,
        "Building report"
    );
    let report = Report::build(records, config.sort_by, config.order);
    Ok(ReportResult::new(report))
}
