//! Input side: where page text comes from.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::Page;

/// Page separator emitted by PDF text layers such as `pdftotext`.
pub const PAGE_BREAK: char = '\x0c';

/// Anything that can hand over a document's pages in extraction order.
pub trait PageSource {
    fn pages(&self) -> Result<Vec<Page>>;
}

/// Split a text dump into pages on form feeds. The empty page after a final
/// form feed is dropped.
pub fn split_pages(text: &str) -> Vec<Page> {
    let mut pages: Vec<Page> = text.split(PAGE_BREAK).map(Page::from_text).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.lines().is_empty()) {
        pages.pop();
    }
    pages
}

/// A plain-text file holding a document's extracted text.
#[derive(Debug, Clone)]
pub struct TextDump {
    path: PathBuf,
}

impl TextDump {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PageSource for TextDump {
    fn pages(&self) -> Result<Vec<Page>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        Ok(split_pages(&text))
    }
}

/// Pages already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPages(pub Vec<Page>);

impl InMemoryPages {
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self(texts.iter().map(|t| Page::from_text(t.as_ref())).collect())
    }
}

impl PageSource for InMemoryPages {
    fn pages(&self) -> Result<Vec<Page>> {
        Ok(self.0.clone())
    }
}
