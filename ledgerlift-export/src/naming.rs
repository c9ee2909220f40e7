//! Output file names.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::sink::OutputFormat;

/// `<stem>_transactions.<ext>` for one input document.
pub fn document_output_name(input: &Path, format: OutputFormat) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "statement".to_string());
    format!("{stem}_transactions.{}", format.extension())
}

/// `combined_transactions_<YYYYmmdd_HHMMSS>.<ext>` for a multi-document run.
pub fn combined_output_name(at: NaiveDateTime, format: OutputFormat) -> String {
    format!(
        "combined_transactions_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_document_name() {
        let name = document_output_name(Path::new("/tmp/june 2024.pdf"), OutputFormat::Csv);
        assert_eq!(name, "june 2024_transactions.csv");
    }

    #[test]
    fn test_document_name_without_stem() {
        assert_eq!(
            document_output_name(Path::new("/"), OutputFormat::Json),
            "statement_transactions.json"
        );
    }

    #[test]
    fn test_combined_name() {
        let at = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();
        assert_eq!(
            combined_output_name(at, OutputFormat::Csv),
            "combined_transactions_20240701_090503.csv"
        );
    }
}
