//! File scanner — find function signatures and check the line after them.

pub mod classify;
pub mod reassemble;

use crate::config::ScanConfig;
use crate::report::Report;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read `path` and record every signature it contains into `report`.
///
/// Read failures (missing, unreadable, not UTF-8) are returned so the caller
/// can skip the file and keep going.
pub fn scan_file(path: &Path, config: &ScanConfig, report: &mut Report) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let key = path.to_string_lossy();
    let lines = split_lines(&content);
    debug!("scanning {} ({} lines)", key, lines.len());
    scan_lines(&key, &lines, config, report);
    Ok(())
}

/// Split file content into physical lines, keeping each line's newline.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Record every signature in `lines` under `path`.
pub fn scan_lines(path: &str, lines: &[&str], config: &ScanConfig, report: &mut Report) {
    report.record_file(path);

    for (i, line) in lines.iter().enumerate() {
        if classify::is_complete_signature(line) {
            if classify::is_ignored_function(line, &config.ignored_functions) {
                continue;
            }
            record(report, path, line, lines.get(i + 1).copied());
        } else if classify::is_partial_signature_start(line) {
            if classify::is_ignored_function(line, &config.ignored_functions) {
                continue;
            }
            match reassemble::reassemble(lines, i, config.lookahead) {
                Some(sig) => {
                    let next = lines.get(sig.closing_index + 1).copied();
                    record(report, path, &sig.text, next);
                }
                None => debug!("{}:{}: signature not closed, skipped", path, i + 1),
            }
        }
    }
}

fn record(report: &mut Report, path: &str, signature: &str, next: Option<&str>) {
    if next.is_some_and(classify::is_documentation_line) {
        report.record_documented(path, signature);
    } else {
        report.record_undocumented(path, signature);
    }
}
