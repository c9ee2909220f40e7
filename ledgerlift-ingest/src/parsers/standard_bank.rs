//! Standard Bank statement parser.
//!
//! Rows wrap over several lines: the date, one or more description lines,
//! then the amount (payments carry a minus sign) beside the running balance:
//!   30 Oct 25
//!   IB PAYMENT TO JOHN
//!   -1,800.00 41,865.05
//!
//! Dates print a two-digit year; statement periods may straddle New Year.

use std::sync::OnceLock;

use ledgerlift_core::Transaction;

use super::skipped;
use crate::clean::DescriptionCleaner;
use crate::dates::{YearContext, normalize_day_month_yy};
use crate::reconstruct::{LayoutRules, Limits, LineReconstructor};
use crate::resolve::{AmountResolution, SignPolicy, money_tokens, resolve};
use crate::tables::{
    STANDARD_BANK_BOILERPLATE, STANDARD_BANK_COLUMN_HEADER, STANDARD_BANK_OPENING_BALANCE,
    STANDARD_BANK_SKIP_PREFIXES,
};

re!(
    anchor,
    r"^(?P<date>\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{2})(?:\s+|$)"
);
re!(
    amount_line,
    r"^-?\d{1,3}(?:,\d{3})*\.\d{2}\s+-?\d{1,3}(?:,\d{3})*\.\d{2}$"
);
re!(money, r"-?\d{1,3}(?:,\d{3})*\.\d{2}");

fn first_fragment(rest: &str) -> Option<String> {
    (!rest.is_empty() && rest != STANDARD_BANK_COLUMN_HEADER).then(|| rest.to_string())
}

pub fn rules() -> &'static LayoutRules {
    static RULES: OnceLock<LayoutRules> = OnceLock::new();
    RULES.get_or_init(|| LayoutRules {
        anchor: anchor(),
        amount_line: Some(amount_line()),
        boilerplate: STANDARD_BANK_BOILERPLATE,
        skip_prefixes: STANDARD_BANK_SKIP_PREFIXES,
        closing: None,
        min_line_len: 3,
        limits: Limits {
            max_continuations: 4,
            max_lookahead: 4,
            max_noise_run: None,
            max_blank_run: None,
        },
        first_fragment,
    })
}

/// Parse Standard Bank lines into transactions. Blocks that never reach an
/// amount line are dropped.
pub fn parse_standard_bank_lines(lines: &[String], years: &YearContext) -> Vec<Transaction> {
    let cleaner = DescriptionCleaner::plain();

    LineReconstructor::new(rules())
        .blocks(lines)
        .into_iter()
        .filter_map(|block| {
            let Some(amount_line) = block.amount_line.as_deref() else {
                skipped(&block, "no amount line");
                return None;
            };

            let description = cleaner.clean(&block.description());
            let upper = description.to_uppercase();
            if STANDARD_BANK_OPENING_BALANCE.iter().any(|p| upper.contains(p)) {
                skipped(&block, "opening balance");
                return None;
            }
            if description.is_empty() || description == STANDARD_BANK_COLUMN_HEADER {
                skipped(&block, "empty description");
                return None;
            }

            let tokens = money_tokens(amount_line, money());
            let amount = match resolve(&tokens, amount_line, &description, &SignPolicy::Explicit) {
                AmountResolution::Amount(amount) => amount,
                AmountResolution::Skip(reason) => {
                    skipped(&block, &format!("{reason:?}"));
                    return None;
                }
            };

            Some(Transaction::new(
                normalize_day_month_yy(&block.anchor, years),
                description,
                amount,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::StatementPeriod;
    use ledgerlift_core::StatementYear;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    fn oct_to_jan() -> YearContext {
        YearContext::new(
            StatementPeriod {
                year: Some(2026),
                start_month: Some(10),
                end_month: Some(1),
            },
            StatementYear::Auto,
        )
    }

    #[test]
    fn test_wrapped_payment() {
        let text = "30 Oct 25\nIB PAYMENT TO JOHN\n-1,800.00 41,865.05";
        let txns = parse_standard_bank_lines(&lines(text), &YearContext::default());
        assert_eq!(
            txns,
            vec![Transaction::new("30/10/2025", "IB PAYMENT TO JOHN", "-1,800.00")]
        );
    }

    #[test]
    fn test_deposit_and_year_rollover() {
        let text = "\
03 Jan 26 CREDIT TRANSFER
ACME PTY LTD SALARY
32,680.00 74,545.05
15 Nov 25 MONTHLY MANAGEMENT FEE
-95.00 74,450.05";
        let txns = parse_standard_bank_lines(&lines(text), &oct_to_jan());
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, "03/01/2026");
        assert_eq!(txns[0].description, "CREDIT TRANSFER ACME PTY LTD SALARY");
        assert_eq!(txns[0].amount, "32,680.00");
        assert_eq!(txns[1].date, "15/11/2025");
        assert_eq!(txns[1].amount, "-95.00");
    }

    #[test]
    fn test_opening_balance_is_dropped() {
        let text = "30 Oct 25 STATEMENT OPENING BALANCE\n0.00 43,665.05";
        assert!(parse_standard_bank_lines(&lines(text), &oct_to_jan()).is_empty());
    }

    #[test]
    fn test_block_without_amount_line_is_dropped() {
        let text = "30 Oct 25 IB PAYMENT\nTO JOHN\n31 Oct 25 FEE\n-5.00 41,860.05";
        let txns = parse_standard_bank_lines(&lines(text), &oct_to_jan());
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "FEE");
    }

    #[test]
    fn test_header_and_account_lines_are_skipped() {
        let text = "\
01 Nov 25 Date Description Payments Deposits Balance
ACC 012345678
IMMEDIATE PAYMENT
-250.00 41,615.05";
        let txns = parse_standard_bank_lines(&lines(text), &oct_to_jan());
        assert_eq!(txns[0].description, "IMMEDIATE PAYMENT");
        assert_eq!(txns[0].date, "01/11/2025");
    }

    #[test]
    fn test_amount_line_beyond_lookahead_is_missed() {
        let text = "30 Oct 25 PAYMENT\none line\ntwo line\nthree line\nfour line\n-1.00 2.00";
        assert!(parse_standard_bank_lines(&lines(text), &oct_to_jan()).is_empty());
    }
}
