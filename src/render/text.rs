//! Plain-text report: undocumented signatures per file, then a summary.
//!
//! ```text
//! /project/app/views.py
//!     def index(request):
//!
//! 1 files scanned.
//! 4 total functions
//! 3 documented functions, 1 undocumented functions.
//! 75.000% documented
//! ```

use crate::render::Renderer;
use crate::report::{Report, Summary};
use crate::scan::reassemble::FRAGMENT_SPACING;
use anyhow::Result;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        for (path, signatures) in report.detail() {
            out.push_str(path);
            out.push('\n');
            for sig in signatures {
                out.push_str(FRAGMENT_SPACING);
                out.push_str(sig.trim());
                out.push_str("\n\n");
            }
        }
        out.push_str(&render_summary(&report.summarize()));
        Ok(out)
    }
}

fn render_summary(summary: &Summary) -> String {
    format!(
        "{} files scanned.\n{} total functions\n{} documented functions, {} undocumented functions.\n{:.3}% documented\n",
        summary.files_scanned,
        summary.total_functions,
        summary.documented,
        summary.undocumented,
        summary.percent_documented,
    )
}
