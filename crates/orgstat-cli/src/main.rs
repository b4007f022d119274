// SPDX-License-Identifier: Apache-2.0

//! orgstat - a health snapshot of a GitHub organization's repositories.
//!
//! Fetches the organization listing page, extracts open issue and pull
//! request counts plus the last update time of every repository, and prints
//! them as a sorted table.

mod commands;
mod context;
mod errors;
mod logging;
mod output;

use anyhow::{Context, Result};
use console::style;
use cpu_time::ProcessTime;
use orgstat_core::config;
use tracing::debug;

use crate::context::OutputContext;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let started = ProcessTime::now();

    match run(started).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("{} {formatted}", style("Error:").red().bold());
            Err(e)
        }
    }
}

async fn run(started: ProcessTime) -> Result<()> {
    let config = config::load_config().context("Failed to load configuration")?;
    logging::init_logging(config.ui.format);
    debug!("Configuration loaded successfully");

    let output_ctx = OutputContext::from_config(&config.ui);
    commands::run(&output_ctx, &config, started).await
}
