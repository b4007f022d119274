// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Centralizes all output formatting logic, supporting text and JSON formats.
//! Command handlers return data; this module handles presentation.

use anyhow::{Context, Result};
use orgstat_core::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

use crate::context::OutputContext;

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write) -> io::Result<()>;
}

/// Generic render function - handles JSON via serde, delegates text to the trait.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    render_to(result, ctx.format, &mut io::stdout().lock())
}

/// Renders `result` in `format` to an arbitrary writer.
pub fn render_to<T: Renderable>(result: &T, format: OutputFormat, w: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            writeln!(w, "{json}").context("Failed to write JSON")?;
        }
        OutputFormat::Text => {
            result.render_text(w).context("Failed to render text")?;
        }
    }
    Ok(())
}

mod report;
