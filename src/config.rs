//! Scan configuration — what to look at and what to skip.

use crate::scan::reassemble::DEFAULT_LOOKAHEAD;
use anyhow::{bail, Context, Result};

/// File names skipped unless the caller clears them.
pub const DEFAULT_IGNORED_FILES: &[&str] = &["test.py", "tests.py"];

/// A file is skipped when any of its path segments is one of these.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["migrations", "tests", ".Trash"];

pub const PACKAGE_INIT_FILE: &str = "__init__.py";
pub const CONSTRUCTOR_NAME: &str = "__init__";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Continuation lines scanned for the end of a multi-line signature.
    pub lookahead: usize,
    /// Extension (without dot) of files to process.
    pub extension: String,
    pub ignored_files: Vec<String>,
    pub ignored_dirs: Vec<String>,
    pub ignored_functions: Vec<String>,
    /// Globs matched against the path relative to the scan root.
    pub exclude: Vec<glob::Pattern>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            extension: "py".to_string(),
            ignored_files: DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            ignored_functions: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Skip `__init__.py` package initializers.
    pub fn skip_init_py(&mut self) {
        self.ignored_files.push(PACKAGE_INIT_FILE.to_string());
    }

    /// Skip `__init__` constructors.
    pub fn skip_init_function(&mut self) {
        self.ignored_functions.push(CONSTRUCTOR_NAME.to_string());
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Result<Self> {
        if lookahead == 0 {
            bail!("--lookahead must be at least 1");
        }
        self.lookahead = lookahead;
        Ok(self)
    }

    pub fn add_excludes(&mut self, patterns: &[String]) -> Result<()> {
        for pattern in patterns {
            let compiled = glob::Pattern::new(pattern)
                .with_context(|| format!("invalid exclude pattern: {}", pattern))?;
            self.exclude.push(compiled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_lists() {
        let config = ScanConfig::default();
        assert_eq!(config.lookahead, 20);
        assert_eq!(config.extension, "py");
        assert_eq!(config.ignored_files, ["test.py", "tests.py"]);
        assert_eq!(config.ignored_dirs, ["migrations", "tests", ".Trash"]);
        assert!(config.ignored_functions.is_empty());
    }

    #[test]
    fn skip_flags_extend_lists() {
        let mut config = ScanConfig::default();
        config.skip_init_py();
        config.skip_init_function();
        assert!(config.ignored_files.iter().any(|f| f == "__init__.py"));
        assert_eq!(config.ignored_functions, ["__init__"]);
    }

    #[test]
    fn zero_lookahead_rejected() {
        assert!(ScanConfig::default().with_lookahead(0).is_err());
        assert_eq!(ScanConfig::default().with_lookahead(5).unwrap().lookahead, 5);
    }

    #[test]
    fn bad_glob_rejected() {
        let mut config = ScanConfig::default();
        let err = config.add_excludes(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("invalid exclude pattern"));
        assert!(config.add_excludes(&["vendor/*".to_string()]).is_ok());
        assert_eq!(config.exclude.len(), 1);
    }
}
