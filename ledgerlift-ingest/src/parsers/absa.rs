//! ABSA cheque account statement parser.
//!
//! The PDF text layer is glyph-encoded; lines reach this module already
//! decoded. Decoded rows look like:
//!   01/07/2024 Digita Tranei            500.00     10,000.00
//!   Caro T. Haro85344807104
//!   02/07/2024 Snthn Fee  15.00 T  944.27  9,055.73
//!
//! Decoding leaves systematic misreads ("Digita", "Tranei", "Caro T."),
//! repaired afterwards by the description cleaner.
//!
//! Columns are Charge | Debit | Credit | Balance, but extraction drops their
//! positions, so only the count of amounts and the description tell them apart.

use std::sync::OnceLock;

use ledgerlift_core::Transaction;

use super::skipped;
use crate::clean::DescriptionCleaner;
use crate::dates::normalize_slash_date;
use crate::reconstruct::{LayoutRules, Limits, LineReconstructor};
use crate::resolve::{AmountResolution, ContextRules, SignPolicy, money_tokens, resolve};
use crate::tables::{
    ABSA_BOILERPLATE, ABSA_CARRIED_BALANCE, ABSA_CHARGE_CATEGORIES, ABSA_CREDIT_KEYWORDS,
};

re!(anchor, r"^(?P<date>\d{1,2}/\d{2}/\d{4})\s+");
re!(leading_words, r"^[A-Za-z\s:]+");
re!(money, r"\d{1,3}(?:[\s,]\d{3})*\.\d{2}");
re!(
    closing,
    r"(?i)(?:Njala|Garage|Holland\d+|\d+\s+(?:Aag|Aug|March|Sarch|Sept|Pa|Jan|Feb|Apr|May|Jun|Jul|Oct|Nov|Dec|Paye))$"
);

const POLICY: SignPolicy = SignPolicy::Contextual(ContextRules {
    charge_marker: '*',
    credit_keywords: ABSA_CREDIT_KEYWORDS,
    charge_categories: ABSA_CHARGE_CATEGORIES,
});

/// Only the leading words after the date belong to the description; the
/// rest of the date line is charge markers and amounts.
fn first_fragment(rest: &str) -> Option<String> {
    let words = leading_words().find(rest)?.as_str().trim();
    (!words.is_empty()).then(|| words.to_string())
}

pub fn rules() -> &'static LayoutRules {
    static RULES: OnceLock<LayoutRules> = OnceLock::new();
    RULES.get_or_init(|| LayoutRules {
        anchor: anchor(),
        amount_line: None,
        boilerplate: ABSA_BOILERPLATE,
        skip_prefixes: &[],
        closing: Some(closing()),
        min_line_len: 0,
        limits: Limits {
            max_continuations: 10,
            max_lookahead: 64,
            max_noise_run: Some(10),
            max_blank_run: Some(30),
        },
        first_fragment,
    })
}

/// Parse decoded ABSA lines (all pages, in order) into transactions.
pub fn parse_absa_lines(lines: &[String]) -> Vec<Transaction> {
    let cleaner = DescriptionCleaner::absa();

    LineReconstructor::new(rules())
        .blocks(lines)
        .into_iter()
        .filter_map(|block| {
            let description = cleaner.clean(&block.description());

            let tokens = money_tokens(&block.remainder, money());
            let amount = match resolve(&tokens, &block.date_line, &description, &POLICY) {
                AmountResolution::Amount(amount) => amount,
                AmountResolution::Skip(reason) => {
                    skipped(&block, &format!("{reason:?}"));
                    return None;
                }
            };

            if ABSA_CARRIED_BALANCE.iter().any(|p| description.contains(p)) {
                skipped(&block, "balance brought forward");
                return None;
            }
            if description.is_empty() {
                skipped(&block, "empty description");
                return None;
            }

            Some(Transaction::new(
                normalize_slash_date(&block.anchor),
                description,
                amount,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_transfer_credit_is_positive() {
        let txns = parse_absa_lines(&lines("01/07/2024 Electronic Transfer 500.00 10,000.00"));
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date, "01/07/2024");
        assert_eq!(txns[0].description, "Electronic Transfer");
        assert_eq!(txns[0].amount, "500.00");
    }

    #[test]
    fn test_wrapped_description_with_repairs() {
        let text = "\
03/07/2024 Digita Vanent 1 250.00 8,750.00
Sagg Ano Bean Vtch
Haro85344807104
04/07/2024 Pos Purchase 99.99 8,650.01";
        let txns = parse_absa_lines(&lines(text));
        assert_eq!(txns.len(), 2);
        assert_eq!(
            txns[0].description,
            "Digital Payment Mugg And Bean Potch Wesbank_fi85344807104"
        );
        assert_eq!(txns[0].amount, "-1,250.00");
        assert_eq!(txns[1].amount, "-99.99");
    }

    #[test]
    fn test_footer_lines_are_not_appended() {
        let text = "\
05/07/2024 Digita Vanent 200.00 8,450.01
Charge Statement Detail
Tax Inrice
Vage 2 of 4
Sar Goen Posaa 5 Aug
06/07/2024 Pos Purchase 10.00 8,440.01";
        let txns = parse_absa_lines(&lines(text));
        assert_eq!(txns[0].description, "Digital Payment Spur Golden Peak 5 Aug");
    }

    #[test]
    fn test_closing_token_stops_before_unrelated_text() {
        let text = "\
05/07/2024 Card Purchase 45.00 1,000.00
Engen Garage
Stray account words";
        let txns = parse_absa_lines(&lines(text));
        assert_eq!(txns[0].description, "Card Purchase Engen Garage");
    }

    #[test]
    fn test_balance_brought_forward_is_dropped() {
        let text = "\
01/07/2024 Ba Braght Frwaro 0.00 9,500.00
02/07/2024 Deposit 500.00 10,000.00";
        let txns = parse_absa_lines(&lines(text));
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "Deposit");
        assert_eq!(txns[0].amount, "500.00");
    }

    #[test]
    fn test_charge_only_row_is_dropped() {
        let txns = parse_absa_lines(&lines("02/07/2024 Monthly Fee 15.00 T 944.27"));
        assert!(txns.is_empty());
    }

    #[test]
    fn test_charged_debit_uses_middle_amount() {
        let txns = parse_absa_lines(&lines("02/07/2024 Cash Withdrawal 15.00 T 944.27 342,616.71"));
        assert_eq!(txns[0].amount, "-944.27");
    }

    #[test]
    fn test_balance_only_row_is_dropped() {
        assert!(parse_absa_lines(&lines("02/07/2024 Interest 342,616.71")).is_empty());
    }
}
