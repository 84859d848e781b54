//! Aggregated findings for one run.
//!
//! The scanner only appends through [`Report::record_documented`] and
//! [`Report::record_undocumented`]; everything else reads.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Signature texts grouped by file path, in discovery order within a file.
pub type FindingsByFile = BTreeMap<String, Vec<String>>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    documented: FindingsByFile,
    undocumented: FindingsByFile,
    files_seen: BTreeSet<String>,
}

/// Counts derived from a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Files with at least one undocumented function.
    pub files_scanned: usize,
    /// Every file handed to the scanner, findings or not.
    pub files_seen: usize,
    pub total_functions: usize,
    pub documented: usize,
    pub undocumented: usize,
    pub percent_documented: f64,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_file(&mut self, path: &str) {
        self.files_seen.insert(path.to_string());
    }

    pub fn record_documented(&mut self, path: &str, signature: &str) {
        self.documented
            .entry(path.to_string())
            .or_default()
            .push(signature.to_string());
    }

    pub fn record_undocumented(&mut self, path: &str, signature: &str) {
        self.undocumented
            .entry(path.to_string())
            .or_default()
            .push(signature.to_string());
    }

    pub fn documented(&self) -> &FindingsByFile {
        &self.documented
    }

    pub fn undocumented(&self) -> &FindingsByFile {
        &self.undocumented
    }

    pub fn summarize(&self) -> Summary {
        let documented = count(&self.documented);
        let undocumented = count(&self.undocumented);
        let total_functions = documented + undocumented;
        let percent_documented = if total_functions == 0 {
            0.0
        } else {
            documented as f64 / total_functions as f64 * 100.0
        };

        Summary {
            files_scanned: self.undocumented.len(),
            files_seen: self.files_seen.len(),
            total_functions,
            documented,
            undocumented,
            percent_documented,
        }
    }

    /// Undocumented signatures per file, files in lexicographic order.
    pub fn detail(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.undocumented
            .iter()
            .map(|(path, sigs)| (path.as_str(), sigs.as_slice()))
    }
}

fn count(findings: &FindingsByFile) -> usize {
    findings.values().map(Vec::len).sum()
}
