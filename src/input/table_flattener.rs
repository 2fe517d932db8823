//! Markdown table flattening
//!
//! Rewrites pipe-delimited tables as plain comma-separated lines so that
//! downstream text consumers (prompt builders, extractors) never have to
//! parse table syntax. Non-table lines pass through untouched and a
//! flattened table occupies the same position its rows occupied in the
//! source, so the pass is idempotent.

use regex::Regex;
use std::sync::OnceLock;

fn full_row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\|.*\|\s*$").expect("Invalid table row regex"))
}

fn separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Cells made only of dashes, optionally colon-bounded: ---|:--:|--
    RE.get_or_init(|| Regex::new(r"^:?-+:?\s*(\|:?-+:?\s*)*$").expect("Invalid separator regex"))
}

/// A line opens a table run if it has at least two pipes (guards against
/// inline `|` in prose) and spans the full `| ... |` shape.
fn is_table_start(line: &str) -> bool {
    line.matches('|').count() >= 2 && full_row_regex().is_match(line)
}

/// Flatten every pipe table in `text` into comma-joined lines.
pub fn flatten_tables(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if is_table_start(line) {
            // Table-consumption mode: keep taking consecutive pipe rows.
            while i < lines.len() && lines[i].matches('|').count() >= 2 {
                let current = lines[i].trim().trim_matches('|').trim();
                if !separator_regex().is_match(current) {
                    let row = current
                        .split('|')
                        .map(|cell| cell.trim())
                        .collect::<Vec<_>>()
                        .join(", ");
                    output.push(row);
                }
                i += 1;
            }
        } else {
            output.push(line.to_string());
            i += 1;
        }
    }

    let mut result = output.join("\n");
    result.push('\n');
    result
}
