//! Transaction assembly: runs the per-format pipeline over a whole document.

use anyhow::Result;
use ledgerlift_core::{ConvertOptions, StatementFormat, Transaction, invert_amount};
use serde::Serialize;
use tracing::info;

use crate::dates::{StatementPeriod, YearContext, detect_period};
use crate::detect::detect_format;
use crate::glyph::GlyphDecoder;
use crate::parsers::{parse_absa_lines, parse_fnb_lines, parse_standard_bank_lines};
use crate::source::PageSource;
use crate::types::{LineStream, Page};

/// One converted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub format: StatementFormat,
    #[serde(skip)]
    pub period: StatementPeriod,
    pub transactions: Vec<Transaction>,
}

/// Format and statement period, read from the first page. Detection runs on
/// the text as extracted; the period is read after glyph decoding.
pub fn identify(pages: &[Page]) -> (StatementFormat, StatementPeriod) {
    let first_page = pages.first().map(Page::text).unwrap_or_default();
    let format = detect_format(&first_page);
    let first_page = if format.needs_glyph_decoding() {
        GlyphDecoder::absa().decode(&first_page)
    } else {
        first_page
    };
    (format, detect_period(format, &first_page))
}

/// Convert a document's pages into transactions, in date-line order.
///
/// An unrecognised or empty document yields an empty list, not an error.
pub fn convert_pages(pages: &[Page], options: &ConvertOptions) -> Conversion {
    let (format, period) = identify(pages);

    let decoded;
    let pages = if format.needs_glyph_decoding() {
        let decoder = GlyphDecoder::absa();
        decoded = pages
            .iter()
            .map(|p| p.map_lines(|l| decoder.decode(l)))
            .collect::<Vec<_>>();
        decoded.as_slice()
    } else {
        pages
    };

    let years = YearContext::new(period, options.statement_year);
    let stream = LineStream::from_pages(pages);

    let mut transactions = match format {
        StatementFormat::Fnb => parse_fnb_lines(stream.lines(), years.year()),
        StatementFormat::Absa => parse_absa_lines(stream.lines()),
        StatementFormat::StandardBank => parse_standard_bank_lines(stream.lines(), &years),
    };

    if options.invert_amounts {
        for txn in &mut transactions {
            txn.amount = invert_amount(&txn.amount);
        }
    }

    info!(
        %format,
        pages = pages.len(),
        lines = stream.len(),
        transactions = transactions.len(),
        inverted = options.invert_amounts,
        "statement converted"
    );

    Conversion {
        format,
        period,
        transactions,
    }
}

/// Load pages from `source` and convert them.
pub fn convert<S>(source: &S, options: &ConvertOptions) -> Result<Conversion>
where
    S: PageSource + ?Sized,
{
    let pages = source.pages()?;
    Ok(convert_pages(&pages, options))
}
