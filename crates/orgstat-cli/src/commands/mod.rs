// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the orgstat CLI.

pub mod report;
pub mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use cpu_time::ProcessTime;
use indicatif::{ProgressBar, ProgressStyle};
use orgstat_core::{AppConfig, HttpFetcher, OrgPageExtractor, SystemClock, TimeFormatter};

use crate::context::OutputContext;
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Builds the report for the configured organization and prints it.
///
/// `started` is the CPU clock reading taken at process entry.
pub async fn run(ctx: &OutputContext, config: &AppConfig, started: ProcessTime) -> Result<()> {
    let fetcher = HttpFetcher::new(&config.github).context("Failed to create HTTP client")?;
    let extractor = OrgPageExtractor::new(TimeFormatter::new(SystemClock));

    let spinner = maybe_spinner(ctx, &format!("Fetching {}...", fetcher.url()));
    let result = report::run(&fetcher, &extractor, &config.report).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    let result = result?.with_elapsed(started.elapsed());
    output::render(&result, ctx)
}
