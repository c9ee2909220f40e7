//! ledgerlift-ingest: turns the text layer of bank statements into transactions.
//!
//! Pipeline: pages -> glyph decoding (ABSA) -> format detection -> line
//! reconstruction -> amount / date / description resolution -> assembly.

/// Declare a lazily compiled, process-wide regex accessor.
macro_rules! re {
    ($name:ident, $pat:expr) => {
        pub(crate) fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}

pub mod assemble;
pub mod clean;
pub mod dates;
pub mod detect;
pub mod glyph;
pub mod parsers;
pub mod reconstruct;
pub mod resolve;
pub mod source;
pub mod tables;
pub mod types;

pub use assemble::{Conversion, convert, convert_pages, identify};
pub use clean::DescriptionCleaner;
pub use dates::{StatementPeriod, YearContext, detect_period};
pub use detect::detect_format;
pub use glyph::GlyphDecoder;
pub use reconstruct::{LayoutRules, Limits, LineReconstructor};
pub use resolve::{AmountResolution, SignPolicy};
pub use source::{InMemoryPages, PageSource, TextDump};
pub use types::{LineStream, Page, RawTransactionBlock};

re!(re_word, r"[A-Za-z]{3,}");

/// True when the line holds an alphabetic run of at least three letters.
pub(crate) fn has_word(line: &str) -> bool {
    re_word().is_match(line)
}
