//! missing-docstrings — find Python functions without a docstring.
//!
//! Walks a project, picks out every `def` (including signatures whose
//! parameter list spans several lines) and checks whether the line right
//! after the signature opens a string. Prints the undocumented signatures per
//! file followed by a coverage summary.

mod config;
mod discover;
mod render;
mod report;
mod scan;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::ScanConfig;
use report::Report;
use std::io::IsTerminal;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "missing-docstrings",
    about = "Searches a Python project for functions with missing docstrings"
)]
struct Cli {
    /// The path to your Python project
    path: PathBuf,

    /// Skip __init__() methods
    #[arg(long)]
    skipinit: bool,

    /// Skip __init__.py files
    #[arg(long)]
    skipinitpy: bool,

    /// Additional file name to skip (repeatable)
    #[arg(long = "ignore-file", value_name = "NAME")]
    ignore_files: Vec<String>,

    /// Additional directory name to skip below the project root (repeatable).
    /// Directories above the root never cause a skip
    #[arg(long = "ignore-dir", value_name = "NAME")]
    ignore_dirs: Vec<String>,

    /// Additional function name to skip (repeatable)
    #[arg(long = "ignore-function", value_name = "NAME")]
    ignore_functions: Vec<String>,

    /// Glob matched against paths relative to the project root (repeatable)
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Lines to search for the end of a multi-line signature
    #[arg(long, default_value_t = scan::reassemble::DEFAULT_LOOKAHEAD)]
    lookahead: usize,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Log skipped files and signatures
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    let renderer = render::create_renderer(&cli.format)?;

    let root = resolve_root(&cli.path)?;
    let report = run(&root, &config);

    print!("{}", renderer.render(&report)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<ScanConfig> {
    let mut config = ScanConfig::default().with_lookahead(cli.lookahead)?;
    if cli.skipinitpy {
        config.skip_init_py();
    }
    if cli.skipinit {
        config.skip_init_function();
    }
    config.ignored_files.extend(cli.ignore_files.iter().cloned());
    config.ignored_dirs.extend(cli.ignore_dirs.iter().cloned());
    config
        .ignored_functions
        .extend(cli.ignore_functions.iter().cloned());
    config.add_excludes(&cli.exclude)?;
    Ok(config)
}

/// Make the root absolute, fold away `.` and `..`, and make sure it exists.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("failed to resolve {}", path.display()))?;
    let root = normalize(&absolute);
    if !root.exists() {
        bail!("{} is not a valid path", root.display());
    }
    Ok(root)
}

/// Lexical normalization: symlinks are left alone, `..` drops the previous
/// component and stops at the filesystem root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Scan every discovered file under `root`. Unreadable files are skipped.
fn run(root: &Path, config: &ScanConfig) -> Report {
    let mut report = Report::new();
    let files = discover::collect_files(root, config);
    debug!("{} candidate files under {}", files.len(), root.display());

    for path in &files {
        if let Err(e) = scan::scan_file(path, config, &mut report) {
            warn!("skipping {}: {:#}", path.display(), e);
        }
    }
    report
}
