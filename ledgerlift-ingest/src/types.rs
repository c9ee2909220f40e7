use serde::{Deserialize, Serialize};

/// The text lines one page of a statement yields, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split extracted page text into lines (`\n`, tolerating `\r\n`).
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Apply a per-line transform, producing a new page.
    pub fn map_lines(&self, f: impl Fn(&str) -> String) -> Page {
        Page {
            lines: self.lines.iter().map(|l| f(l)).collect(),
        }
    }
}

/// Every page's lines concatenated in page order. Page boundaries are not
/// kept: a wrapped description may continue on the next page.
#[derive(Debug, Clone, Default)]
pub struct LineStream {
    lines: Vec<String>,
}

impl LineStream {
    pub fn from_pages(pages: &[Page]) -> Self {
        let lines = pages
            .iter()
            .flat_map(|p| p.lines().iter().cloned())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A date line plus the lines consumed with it, before amounts, dates and
/// descriptions are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransactionBlock {
    /// Index of the date line in the line stream.
    pub line_index: usize,
    /// Date text exactly as matched by the layout's anchor.
    pub anchor: String,
    /// The full (trimmed) date line.
    pub date_line: String,
    /// The date line after the anchor.
    pub remainder: String,
    /// Description pieces in reading order, first one from the date line.
    pub fragments: Vec<String>,
    /// Amount/balance line consumed as the block terminator, if the layout has one.
    pub amount_line: Option<String>,
}

impl RawTransactionBlock {
    pub fn description(&self) -> String {
        self.fragments.join(" ")
    }
}
