// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the orgstat CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//! Logs go to stderr so stdout carries only the report.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings (e.g. skipped repository entries) only
//! orgstat
//!
//! # Debug output for troubleshooting
//! RUST_LOG=orgstat=debug orgstat
//! ```

use orgstat_core::OutputFormat;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// The `RUST_LOG` environment variable controls tracing output. Without it,
/// text output shows warnings and JSON output stays quiet apart from errors.
pub fn init_logging(format: OutputFormat) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = match format {
        OutputFormat::Text => "orgstat=warn,reqwest=error",
        OutputFormat::Json => "orgstat=error,reqwest=error",
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
