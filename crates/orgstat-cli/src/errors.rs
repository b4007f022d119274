// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `OrgstatError` and appends a hint on what
//! to check next. The library carries the structured data; presentation
//! lives here.

use anyhow::Error;
use orgstat_core::error::OrgstatError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not an `OrgstatError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<OrgstatError>() else {
        return error.to_string();
    };

    match err {
        OrgstatError::Fetch { .. } if err.is_timeout() => format!(
            "{err}\n\nTip: The request timed out. Raise `github.timeout_seconds` in {} or set ORGSTAT_GITHUB__TIMEOUT_SECONDS.",
            config_location()
        ),
        OrgstatError::Fetch { .. } => {
            format!("{err}\n\nTip: Check your internet connection and try again.")
        }
        OrgstatError::HttpStatus { status: 404, .. } => {
            format!("{err}\n\nTip: Check that `github.organization` names an existing organization.")
        }
        OrgstatError::HttpStatus { status: 429, .. } => {
            format!("{err}\n\nTip: GitHub is rate limiting this address. Wait a while and try again.")
        }
        OrgstatError::HttpStatus { .. } => {
            format!("{err}\n\nTip: GitHub may be temporarily unavailable. Try again in a moment.")
        }
        OrgstatError::Structure { .. } => format!(
            "{err}\n\nTip: The listing page layout may have changed. Run with RUST_LOG=orgstat=debug for details."
        ),
        OrgstatError::Parse { .. } => err.to_string(),
        OrgstatError::Config { .. } => format!(
            "{err}\n\nTip: Check your config file at {}",
            config_location()
        ),
    }
}

fn config_location() -> String {
    orgstat_core::config::config_file_path().map_or_else(
        || "~/.config/orgstat/config.toml".to_string(),
        |path| path.display().to_string(),
    )
}
