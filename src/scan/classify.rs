//! Line classifier — single-line pattern predicates.
//!
//! Each predicate looks at one physical line (trailing newline included) and
//! answers a yes/no question about it. Nothing here parses Python: a line that
//! merely starts with a quote is treated as a docstring, and a `def` whose
//! parameter list closes on the same line is treated as a complete signature.

use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// `def name(...):` with an optional trailing comment
static RE_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*def\s+.*\(.*\):\s*(#.*)?$").unwrap());

// `def name(` with no `):` before end of line
static RE_SIGNATURE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*def\s+.*\([^):]*(#.*)?$").unwrap());

// Continuation line that closes the parameter list
static RE_SIGNATURE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^.*\):\s*(#.*)?$").unwrap());

static RE_DOCSTRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)^\s*("""|"|').*$"#).unwrap());

// -- Predicates ---------------------------------------------------------------

/// A `def` line whose parameter list is closed by `):` on the same line.
pub fn is_complete_signature(line: &str) -> bool {
    RE_SIGNATURE.is_match(line)
}

/// A `def` line whose parameter list continues onto following lines.
pub fn is_partial_signature_start(line: &str) -> bool {
    RE_SIGNATURE_START.is_match(line)
}

/// A continuation line ending in `):`, optionally followed by a comment.
pub fn is_signature_closing_line(line: &str) -> bool {
    RE_SIGNATURE_END.is_match(line)
}

/// A line starting (after indentation) with `"""`, `"` or `'`.
pub fn is_documentation_line(line: &str) -> bool {
    RE_DOCSTRING.is_match(line)
}

/// Whether a signature line defines one of the `ignored` function names.
///
/// `    def __init__(self):` → `__init__(self):` is checked against
/// `"<name>("` for each ignored name.
pub fn is_ignored_function(line: &str, ignored: &[String]) -> bool {
    if ignored.is_empty() {
        return false;
    }
    let Some(rest) = line.trim().strip_prefix("def") else {
        return false;
    };
    let rest = rest.trim_start();
    ignored
        .iter()
        .any(|name| rest.strip_prefix(name.as_str()).is_some_and(|r| r.starts_with('(')))
}
