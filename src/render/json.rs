//! JSON report — structured output for CI and editor tooling.

use crate::render::Renderer;
use crate::report::{FindingsByFile, Report, Summary};
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonReport {
    summary: Summary,
    undocumented: FindingsByFile,
    documented: FindingsByFile,
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let doc = JsonReport {
            summary: report.summarize(),
            undocumented: trimmed(report.undocumented()),
            documented: trimmed(report.documented()),
        };
        let mut out = serde_json::to_string_pretty(&doc).context("failed to serialize report")?;
        out.push('\n');
        Ok(out)
    }
}

fn trimmed(findings: &FindingsByFile) -> FindingsByFile {
    findings
        .iter()
        .map(|(path, sigs)| {
            let sigs: Vec<String> = sigs.iter().map(|s| s.trim().to_string()).collect();
            (path.clone(), sigs)
        })
        .collect()
}
