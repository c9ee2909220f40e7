//! Page sources for files named on the command line.

use anyhow::{Context, Result, bail};
use ledgerlift_ingest::source::split_pages;
use ledgerlift_ingest::{Page, PageSource, TextDump};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Text layer of a PDF via poppler's `pdftotext -layout`.
#[derive(Debug, Clone)]
pub struct PdfToText {
    path: PathBuf,
}

impl PdfToText {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PageSource for PdfToText {
    fn pages(&self) -> Result<Vec<Page>> {
        if which::which("pdftotext").is_err() {
            bail!(
                "pdftotext is not installed (needed for {}).\n\nmacOS (brew):  brew install poppler\nUbuntu:        apt install poppler-utils\n\nOr convert the PDF to text yourself and pass the .txt file.",
                self.path.display()
            );
        }

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(&self.path)
            .arg("-")
            .output()
            .with_context(|| format!("running pdftotext on {}", self.path.display()))?;

        if !output.status.success() {
            bail!(
                "pdftotext failed on {} ({}): {}",
                self.path.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(split_pages(&String::from_utf8_lossy(&output.stdout)))
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// `.pdf` goes through `pdftotext`; anything else is read as a text dump.
pub fn source_for(path: &Path) -> Box<dyn PageSource + Send + Sync> {
    if is_pdf(path) {
        Box::new(PdfToText::new(path))
    } else {
        Box::new(TextDump::new(path))
    }
}
