//! Multi-line signature reassembly — bounded lookahead state machine.
//!
//! A `def` whose parameter list is left open starts accumulation. Each
//! following line is appended (behind [`FRAGMENT_SPACING`]) until one closes
//! the list with `):`. If no closing line shows up within the lookahead bound,
//! or the file runs out first, the attempt is dropped without a trace.

use super::classify;

/// Inserted in front of every continuation fragment of a reassembled signature.
pub const FRAGMENT_SPACING: &str = "    ";

/// Default number of continuation lines scanned before giving up.
pub const DEFAULT_LOOKAHEAD: usize = 20;

#[derive(Debug)]
enum State {
    Idle,
    Accumulating {
        text: String,
        consumed: usize,
    },
}

/// Outcome of feeding one continuation line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Still inside the parameter list.
    Continue,
    /// The line closed the signature; carries the reassembled text.
    Closed(String),
    /// The lookahead bound was hit without a closing line.
    Abandoned,
    /// No signature in progress; call `begin` first.
    Idle,
}

#[derive(Debug)]
pub struct Reassembler {
    lookahead: usize,
    state: State,
}

impl Reassembler {
    pub fn new(lookahead: usize) -> Self {
        Self {
            lookahead,
            state: State::Idle,
        }
    }

    /// Start accumulating from a partial signature line.
    pub fn begin(&mut self, line: &str) {
        self.state = State::Accumulating {
            text: line.to_string(),
            consumed: 0,
        };
    }

    /// Feed the next continuation line. Returns [`Step::Idle`] unless a
    /// signature was started with [`Reassembler::begin`].
    pub fn feed(&mut self, line: &str) -> Step {
        let State::Accumulating { text, consumed } = &mut self.state else {
            return Step::Idle;
        };

        text.push_str(FRAGMENT_SPACING);
        text.push_str(line);
        *consumed += 1;

        if classify::is_signature_closing_line(line) {
            let text = std::mem::take(text);
            self.state = State::Idle;
            return Step::Closed(text);
        }

        if *consumed >= self.lookahead {
            self.state = State::Idle;
            return Step::Abandoned;
        }

        Step::Continue
    }
}

/// A signature rebuilt from several physical lines.
#[derive(Debug, PartialEq, Eq)]
pub struct Reassembled {
    pub text: String,
    /// Index of the line that closed the parameter list.
    pub closing_index: usize,
}

/// Reassemble the signature opened at `lines[start]`.
///
/// Returns `None` when no closing line appears within `lookahead` lines or
/// before the end of `lines`.
pub fn reassemble(lines: &[&str], start: usize, lookahead: usize) -> Option<Reassembled> {
    let first = lines.get(start)?;
    let mut machine = Reassembler::new(lookahead);
    machine.begin(first);

    for (index, line) in lines.iter().enumerate().skip(start + 1) {
        match machine.feed(line) {
            Step::Continue => {}
            Step::Closed(text) => {
                return Some(Reassembled {
                    text,
                    closing_index: index,
                })
            }
            Step::Abandoned | Step::Idle => return None,
        }
    }

    // Ran out of lines mid-signature
    None
}
