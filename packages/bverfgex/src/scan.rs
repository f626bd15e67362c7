//! Citation scanning over decisions and corpus directories.

use std::collections::BTreeMap;
use std::path::PathBuf;

use bverfgex_verweis::find_citations;
use walkdir::WalkDir;

use crate::config::has_xml_extension;
use crate::error::{BverfgexError, Result};
use crate::types::{CitationRecord, Decision};

/// Expand paths into the list of decision files to scan.
///
/// Directories are walked recursively and contribute their `.xml` files in
/// sorted order. Files given explicitly are kept whatever their extension.
///
/// # Errors
/// Fails if a path does not exist or a directory cannot be read.
pub fn collect_xml_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry?;
                if entry.file_type().is_file() && has_xml_extension(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            tracing::debug!(dir = %path.display(), files = found.len(), "Collected decision files");
            files.extend(found);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(BverfgexError::InvalidInput(format!(
                "Path does not exist: {}",
                path.display()
            )));
        }
    }

    Ok(files)
}

/// Find the citations in every paragraph of a decision.
///
/// Returns one record per citation chain, in document order.
pub fn scan_decision(decision: &Decision) -> Vec<CitationRecord> {
    let records: Vec<CitationRecord> = decision
        .rows
        .iter()
        .flat_map(|row| {
            find_citations(&row.text_raw)
                .into_iter()
                .map(move |chain| CitationRecord::new(row, chain))
        })
        .collect();

    tracing::debug!(
        decision = %decision.name,
        citations = records.len(),
        "Scanned decision"
    );
    records
}

/// Count how often each decision is cited across records, by short form.
pub fn summarize(records: &[CitationRecord]) -> BTreeMap<String, usize> {
    bverfgex_verweis::count_short_forms(records.iter().map(|record| &record.references))
}
