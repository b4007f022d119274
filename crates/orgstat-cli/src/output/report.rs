// SPDX-License-Identifier: Apache-2.0

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};
use orgstat_core::{NAME_COLUMN, RepositoryRecord, VALUE_COLUMNS};
use std::io::{self, Write};

use crate::commands::types::ReportResult;

use super::Renderable;

/// Placeholder for values the listing page did not provide.
const MISSING: &str = "-";

impl Renderable for ReportResult {
    fn render_text(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}", self.elapsed_cpu_seconds)?;
        writeln!(w, "{}", build_table(&self.repositories))
    }
}

fn count_cell(count: Option<u64>) -> Cell {
    let text = count.map_or_else(|| MISSING.to_string(), |n| n.to_string());
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn build_table(rows: &[RepositoryRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_header(std::iter::once(NAME_COLUMN).chain(VALUE_COLUMNS));

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            count_cell(row.issue_count),
            count_cell(row.pull_request_count),
            Cell::new(row.last_updated.as_deref().unwrap_or(MISSING)),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render_to;
    use orgstat_core::{OutputFormat, SortKey, SortOrder};

    fn result() -> ReportResult {
        ReportResult {
            elapsed_cpu_seconds: 0.25,
            sort_by: SortKey::Issues,
            order: SortOrder::Descending,
            repositories: vec![
                RepositoryRecord {
                    issue_count: Some(43),
                    pull_request_count: Some(7),
                    last_updated: Some("3 days".to_string()),
                    ..RepositoryRecord::named("esm_tools")
                },
                RepositoryRecord {
                    pull_request_count: Some(0),
                    ..RepositoryRecord::named("esm_parser")
                },
            ],
        }
    }

    fn render_text(result: &ReportResult) -> String {
        let mut buf = Vec::new();
        render_to(result, OutputFormat::Text, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn elapsed_time_precedes_table() {
        let text = render_text(&result());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("0.25"));
        assert!(lines.next().unwrap().starts_with('+'));
    }

    #[test]
    fn header_lists_columns_in_order() {
        let text = render_text(&result());
        let header = text
            .lines()
            .find(|line| line.contains(NAME_COLUMN))
            .expect("header row");

        let positions: Vec<usize> = std::iter::once(NAME_COLUMN)
            .chain(VALUE_COLUMNS)
            .map(|column| header.find(column).expect("column present"))
            .collect();
        assert!(positions.is_sorted());
    }

    #[test]
    fn rows_follow_report_order_with_missing_markers() {
        let text = render_text(&result());
        let tools = text.find("esm_tools").unwrap();
        let parser_line = text.lines().find(|l| l.contains("esm_parser")).unwrap();

        assert!(tools < text.find("esm_parser").unwrap());
        assert!(text.contains("3 days"));
        assert!(parser_line.contains(MISSING));
        assert!(parser_line.contains('0'));
    }

    #[test]
    fn json_output_is_structured() {
        let mut buf = Vec::new();
        render_to(&result(), OutputFormat::Json, &mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["elapsed_cpu_seconds"], 0.25);
        assert_eq!(json["sort_by"], "issues");
        assert_eq!(json["order"], "descending");
        assert_eq!(json["repositories"][0]["name"], "esm_tools");
        assert_eq!(json["repositories"][0]["issue_count"], 43);
        assert!(json["repositories"][1]["issue_count"].is_null());
    }
}
