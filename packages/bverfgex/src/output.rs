//! Rendering of command results as text, JSON or YAML.

use std::collections::BTreeMap;

use serde::Serialize;

use bverfgex_verweis::CitationMatch;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::types::{CitationRecord, Decision};

/// Render `value` in the requested format.
///
/// `text` produces the human-readable form; JSON and YAML come from the
/// value's `Serialize` implementation.
pub fn render<T, F>(value: &T, format: OutputFormat, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(value)?),
    }
}

/// Citations found in a single text, one chain per line.
pub fn render_matches(matches: &[CitationMatch], format: OutputFormat) -> Result<String> {
    render(matches, format, |matches| {
        matches
            .iter()
            .map(|m| format!("{}\t{}", m.chain, m.chain.short_forms().join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Paragraph rows of a decision.
pub fn render_decision(decision: &Decision, format: OutputFormat) -> Result<String> {
    render(&decision.rows, format, |rows| {
        rows.iter()
            .map(|row| {
                format!(
                    "{}\t{}\t{}\t{}",
                    row.file,
                    row.ebene,
                    row.rn.as_deref().unwrap_or("-"),
                    row.text_raw
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Citation records of a corpus scan.
pub fn render_records(records: &[CitationRecord], format: OutputFormat) -> Result<String> {
    render(records, format, |records| {
        records
            .iter()
            .map(|record| {
                format!(
                    "{}\t{}\t{}",
                    record.file,
                    record.rn.as_deref().unwrap_or("-"),
                    record.citation
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Citation counts per decision, most cited first in text form.
pub fn render_summary(summary: &BTreeMap<String, usize>, format: OutputFormat) -> Result<String> {
    render(summary, format, |summary| {
        let mut counts: Vec<(&String, &usize)> = summary.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        counts
            .into_iter()
            .map(|(short, count)| format!("{count}\t{short}"))
            .collect::<Vec<_>>()
            .join("\n")
    })
}
