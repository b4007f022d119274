// SPDX-License-Identifier: Apache-2.0

//! Output settings resolved once at startup and passed to commands.

use std::io::IsTerminal;

use orgstat_core::{OutputFormat, UiConfig};

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Show a spinner while waiting on the network
    pub progress_bars: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from the UI configuration.
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            format: ui.format,
            progress_bars: ui.progress_bars,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && self.progress_bars && matches!(self.format, OutputFormat::Text)
    }
}
