//! FNB statement parser.
//!
//! Expected extracted-text rows, one per transaction:
//!   05 Jun POS PURCHASE WOOLWORTHS            250.00      1,500.00
//!   07 Jun SALARY ACME                    12,000.00Cr   13,500.00Cr
//!   30 Jun                                    65.00       1,435.00
//!
//! The last amount on a row is the balance and the one before it the
//! transaction. `Cr` marks credits; unmarked amounts are debits.

use std::sync::OnceLock;

use ledgerlift_core::Transaction;

use super::skipped;
use crate::clean::DescriptionCleaner;
use crate::dates::normalize_day_month;
use crate::reconstruct::{LayoutRules, Limits, LineReconstructor};
use crate::resolve::{AmountResolution, SignPolicy, resolve};
use crate::tables::{FNB_CARRIED_BALANCE, FNB_EMPTY_DESCRIPTION};

re!(
    anchor,
    r"^(?P<date>\d{2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec))\s+"
);
re!(money_token, r"^[\d,]*\d\.\d{2}(?:Cr|Dr)?$");

/// A row split into the words before the transaction amount and every
/// amount-shaped token.
struct Row {
    description: String,
    tokens: Vec<String>,
}

fn split_row(rest: &str) -> Row {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    let positions: Vec<usize> = parts
        .iter()
        .enumerate()
        .filter(|(_, p)| money_token().is_match(p))
        .map(|(i, _)| i)
        .collect();

    let description = match positions.len().checked_sub(2) {
        Some(k) => parts[..positions[k]].join(" "),
        None => String::new(),
    };
    Row {
        description,
        tokens: positions.iter().map(|&i| parts[i].to_string()).collect(),
    }
}

fn first_fragment(rest: &str) -> Option<String> {
    let description = split_row(rest).description;
    (!description.is_empty()).then_some(description)
}

pub fn rules() -> &'static LayoutRules {
    static RULES: OnceLock<LayoutRules> = OnceLock::new();
    RULES.get_or_init(|| LayoutRules {
        anchor: anchor(),
        amount_line: None,
        boilerplate: &[],
        skip_prefixes: &[],
        closing: None,
        min_line_len: 0,
        limits: Limits {
            max_continuations: 0,
            max_lookahead: 0,
            max_noise_run: None,
            max_blank_run: None,
        },
        first_fragment,
    })
}

/// Parse FNB lines into transactions, completing `DD Mon` dates with `year`.
/// Without a year the dates are left as printed.
pub fn parse_fnb_lines(lines: &[String], year: Option<i32>) -> Vec<Transaction> {
    let cleaner = DescriptionCleaner::plain();

    LineReconstructor::new(rules())
        .blocks(lines)
        .into_iter()
        .filter_map(|block| {
            let row = split_row(&block.remainder);
            let description = cleaner.clean(&block.description());

            let upper = description.to_uppercase();
            if FNB_CARRIED_BALANCE.iter().any(|p| upper.contains(p)) {
                skipped(&block, "balance brought forward");
                return None;
            }

            let amount = match resolve(
                &row.tokens,
                &block.date_line,
                &description,
                &SignPolicy::CreditSuffix,
            ) {
                AmountResolution::Amount(amount) => amount,
                AmountResolution::Skip(reason) => {
                    skipped(&block, &format!("{reason:?}"));
                    return None;
                }
            };

            let description = if description.is_empty() {
                FNB_EMPTY_DESCRIPTION.to_string()
            } else {
                description
            };

            Some(Transaction::new(
                normalize_day_month(&block.anchor, year),
                description,
                amount,
            ))
        })
        .collect()
}
