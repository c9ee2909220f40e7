//! Groups the flat line stream into per-transaction blocks.
//!
//! One engine serves every layout. A layout supplies its date anchor, the
//! predicates that stop or skip continuation lines, and its limits through a
//! [`LayoutRules`] value; the engine walks the stream through
//! `Idle -> Accumulating -> Resolved` for each date line it meets.

use regex::Regex;
use tracing::trace;

use crate::has_word;
use crate::types::RawTransactionBlock;

/// Bounds that keep a single block from swallowing unrelated lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Description lines appended after the date line.
    pub max_continuations: usize,
    /// Non-blank lines examined after the date line.
    pub max_lookahead: usize,
    /// Consecutive boilerplate/noise lines tolerated before the block is closed.
    pub max_noise_run: Option<usize>,
    /// Consecutive blank lines tolerated before the block is closed.
    pub max_blank_run: Option<usize>,
}

/// Per-layout configuration for the reconstruction engine.
#[derive(Debug, Clone)]
pub struct LayoutRules {
    /// Date-line detector. Must capture the date text as group `date`.
    pub anchor: &'static Regex,
    /// Amount/balance line that closes a block (consumed).
    pub amount_line: Option<&'static Regex>,
    /// Phrases whose presence marks a header/footer line (substring match).
    pub boilerplate: &'static [&'static str],
    /// Prefixes that mark metadata lines.
    pub skip_prefixes: &'static [&'static str],
    /// Trailing fragment that ends a wrapped description (line is kept).
    pub closing: Option<&'static Regex>,
    /// Continuation lines of this many characters or fewer are noise.
    pub min_line_len: usize,
    pub limits: Limits,
    /// Extracts the first description fragment from the text after the date.
    pub first_fragment: fn(&str) -> Option<String>,
}

impl LayoutRules {
    fn is_boilerplate(&self, line: &str) -> bool {
        self.boilerplate.iter().any(|p| line.contains(p))
            || self.skip_prefixes.iter().any(|p| line.starts_with(p))
    }

    fn is_noise(&self, line: &str) -> bool {
        !has_word(line) || line.chars().count() <= self.min_line_len
    }

    /// Match the date anchor, returning the date text and the remainder of the line.
    pub fn match_anchor<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str)> {
        let caps = self.anchor.captures(line)?;
        let date = caps.name("date")?;
        Some((date.as_str(), line[date.end()..].trim()))
    }
}

/// How a continuation line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Line consumed, keep accumulating.
    Continue,
    /// Block complete; the line was consumed as part of it.
    CloseAfter,
    /// Block complete; the line belongs to whatever comes next.
    CloseBefore,
}

#[derive(Debug, Default, Clone, Copy)]
struct Progress {
    scanned: usize,
    continuations: usize,
    skip_run: usize,
}

impl Progress {
    /// Count a skipped line against `max`, closing the block once it is exceeded.
    /// Layouts without a threshold skip freely.
    fn skip(&mut self, max: Option<usize>) -> Step {
        let Some(max) = max else {
            return Step::Continue;
        };
        self.skip_run += 1;
        if self.skip_run > max {
            Step::CloseBefore
        } else {
            Step::Continue
        }
    }
}

enum ScanState {
    Idle,
    Accumulating(RawTransactionBlock, Progress),
    Resolved(RawTransactionBlock),
}

pub struct LineReconstructor<'r> {
    rules: &'r LayoutRules,
}

impl<'r> LineReconstructor<'r> {
    pub fn new(rules: &'r LayoutRules) -> Self {
        Self { rules }
    }

    /// One block per date line, in stream order.
    pub fn blocks(&self, lines: &[String]) -> Vec<RawTransactionBlock> {
        let mut out = Vec::new();
        let mut state = ScanState::Idle;
        let mut i = 0;

        while i < lines.len() {
            state = match state {
                ScanState::Idle => {
                    let opened = self.open(i, lines[i].trim());
                    i += 1;
                    match opened {
                        Some(block) => ScanState::Accumulating(block, Progress::default()),
                        None => ScanState::Idle,
                    }
                }
                ScanState::Accumulating(mut block, mut progress) => {
                    match self.step(&mut block, &mut progress, lines[i].trim()) {
                        Step::Continue => {
                            i += 1;
                            ScanState::Accumulating(block, progress)
                        }
                        Step::CloseAfter => {
                            i += 1;
                            ScanState::Resolved(block)
                        }
                        Step::CloseBefore => ScanState::Resolved(block),
                    }
                }
                ScanState::Resolved(block) => {
                    out.push(block);
                    ScanState::Idle
                }
            };
        }

        match state {
            ScanState::Accumulating(block, _) | ScanState::Resolved(block) => out.push(block),
            ScanState::Idle => {}
        }
        out
    }

    fn open(&self, index: usize, line: &str) -> Option<RawTransactionBlock> {
        let (date, remainder) = self.rules.match_anchor(line)?;
        Some(RawTransactionBlock {
            line_index: index,
            anchor: date.to_string(),
            date_line: line.to_string(),
            remainder: remainder.to_string(),
            fragments: (self.rules.first_fragment)(remainder).into_iter().collect(),
            amount_line: None,
        })
    }

    fn step(&self, block: &mut RawTransactionBlock, progress: &mut Progress, line: &str) -> Step {
        let rules = self.rules;
        let limits = &rules.limits;

        if progress.continuations >= limits.max_continuations
            || progress.scanned >= limits.max_lookahead
        {
            return Step::CloseBefore;
        }
        if rules.anchor.is_match(line) {
            return Step::CloseBefore;
        }
        // Blank lines never count against the lookahead.
        if line.is_empty() {
            return progress.skip(limits.max_blank_run);
        }
        progress.scanned += 1;

        if let Some(amount_line) = rules.amount_line {
            if amount_line.is_match(line) {
                block.amount_line = Some(line.to_string());
                return Step::CloseAfter;
            }
        }

        if rules.is_boilerplate(line) || rules.is_noise(line) {
            trace!(line, "skipped continuation candidate");
            return progress.skip(limits.max_noise_run);
        }

        block.fragments.push(line.to_string());
        progress.continuations += 1;
        progress.skip_run = 0;

        match rules.closing {
            Some(closing) if closing.is_match(line) => Step::CloseAfter,
            _ => Step::Continue,
        }
    }
}
