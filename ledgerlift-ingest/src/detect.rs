//! First-page issuer detection.

use ledgerlift_core::StatementFormat;
use tracing::debug;

use crate::tables::{MarkerCase, STRONG_MARKERS, WEAK_MARKERS};

/// Classify a statement from its first page.
///
/// Full issuer names win over short codes because one issuer's data blocks
/// can print another's abbreviation. Unrecognised text falls back to FNB.
pub fn detect_format(first_page: &str) -> StatementFormat {
    let upper = first_page.to_uppercase();
    let matches = |marker: &str, case: MarkerCase| match case {
        MarkerCase::Insensitive => upper.contains(marker),
        MarkerCase::Exact => first_page.contains(marker),
    };

    for markers in [STRONG_MARKERS, WEAK_MARKERS] {
        if let Some((marker, _, format)) = markers
            .iter()
            .find(|(marker, case, _)| matches(*marker, *case))
        {
            debug!(marker, %format, "statement format detected");
            return *format;
        }
    }

    debug!("no issuer marker on first page, defaulting to FNB");
    StatementFormat::Fnb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_names() {
        assert_eq!(detect_format("First National Bank\nFNB Fusion Aspire"), StatementFormat::Fnb);
        assert_eq!(detect_format("The Standard Bank of South Africa"), StatementFormat::StandardBank);
        assert_eq!(detect_format("Absa Bank Limited"), StatementFormat::Absa);
        assert_eq!(detect_format("ABSA BANK LTD"), StatementFormat::Absa);
    }

    #[test]
    fn test_full_name_beats_short_code() {
        // A Standard Bank statement listing a transfer to an FNB account.
        let text = "STANDARD BANK\nFrom: 30 Oct 25\nIB PAYMENT TO FNB CHEQUE";
        assert_eq!(detect_format(text), StatementFormat::StandardBank);
    }

    #[test]
    fn test_short_codes() {
        assert_eq!(detect_format("fnb gold account"), StatementFormat::Fnb);
        assert_eq!(detect_format("absa cheque account"), StatementFormat::Absa);
    }

    #[test]
    fn test_absa_full_name_is_case_sensitive() {
        // Not a strong marker, but the short code still catches it.
        assert_eq!(detect_format("absa bank"), StatementFormat::Absa);
    }

    #[test]
    fn test_defaults_to_fnb() {
        assert_eq!(detect_format(""), StatementFormat::Fnb);
        assert_eq!(detect_format("Some Other Bank plc"), StatementFormat::Fnb);
    }
}
