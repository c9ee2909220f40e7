//! Picks the transaction amount out of a row's monetary tokens and signs it.
//!
//! The last token on a row is always the running balance. Which of the
//! remaining tokens is the amount, and whether it is a debit, depends on the
//! layout's [`SignPolicy`].

use ledgerlift_core::amount::debit;
use regex::Regex;
use tracing::trace;

/// Markers and keywords for layouts whose columns do not carry a sign.
#[derive(Debug, Clone, Copy)]
pub struct ContextRules {
    /// In-line symbol flagging a bank-imposed charge that is still a debit.
    pub charge_marker: char,
    /// Description fragments that make a single amount a credit.
    pub credit_keywords: &'static [&'static str],
    /// Isolated charge-category columns: a row with one of these and a single
    /// amount carries a fee only and is not a transaction.
    pub charge_categories: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub enum SignPolicy {
    /// The amount token carries its own sign (payments print as `-1,800.00`).
    Explicit,
    /// `Cr` suffix marks a credit, anything else is a debit.
    CreditSuffix,
    /// Decide from markers on the row and keywords in the cleaned description.
    Contextual(ContextRules),
}

/// Why a row produced no transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing besides the balance.
    BalanceOnly,
    /// A charge-category row with no debit or credit.
    ChargeOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountResolution {
    Amount(String),
    Skip(SkipReason),
}

impl AmountResolution {
    pub fn amount(self) -> Option<String> {
        match self {
            AmountResolution::Amount(a) => Some(a),
            AmountResolution::Skip(_) => None,
        }
    }
}

/// Every match of `pattern` in `line`, with inner whitespace used as a
/// thousands separator rewritten to commas.
pub fn money_tokens(line: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .find_iter(line)
        .map(|m| {
            m.as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect()
}

fn has_credit_keyword(description: &str, rules: &ContextRules) -> bool {
    rules.credit_keywords.iter().any(|kw| description.contains(kw))
}

/// Resolve the signed amount for one row.
///
/// `tokens` are the row's monetary tokens in reading order, `line` is the raw
/// row used for marker checks and `description` the cleaned description.
pub fn resolve(
    tokens: &[String],
    line: &str,
    description: &str,
    policy: &SignPolicy,
) -> AmountResolution {
    let Some(amount) = tokens.len().checked_sub(2).map(|i| tokens[i].as_str()) else {
        return AmountResolution::Skip(SkipReason::BalanceOnly);
    };
    let single = tokens.len() == 2;

    let resolved = match policy {
        SignPolicy::Explicit => amount.to_string(),
        SignPolicy::CreditSuffix => match amount.strip_suffix("Cr") {
            Some(credit) => credit.to_string(),
            None => debit(amount.trim_end_matches("Dr")),
        },
        SignPolicy::Contextual(rules) if single => {
            if line.contains(rules.charge_marker) {
                debit(amount)
            } else if has_credit_keyword(description, rules) {
                amount.to_string()
            } else if rules.charge_categories.iter().any(|m| line.contains(m)) {
                return AmountResolution::Skip(SkipReason::ChargeOnly);
            } else {
                debit(amount)
            }
        }
        SignPolicy::Contextual(rules) => {
            if has_credit_keyword(description, rules) {
                amount.to_string()
            } else {
                debit(amount)
            }
        }
    };

    trace!(tokens = tokens.len(), amount = %resolved, "amount resolved");
    AmountResolution::Amount(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{ABSA_CHARGE_CATEGORIES, ABSA_CREDIT_KEYWORDS};

    fn contextual() -> SignPolicy {
        SignPolicy::Contextual(ContextRules {
            charge_marker: '*',
            credit_keywords: ABSA_CREDIT_KEYWORDS,
            charge_categories: ABSA_CHARGE_CATEGORIES,
        })
    }

    fn toks(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_money_tokens_normalises_space_separators() {
        let re = Regex::new(r"\d{1,3}(?:[\s,]\d{3})*\.\d{2}").unwrap();
        let got = money_tokens("Digital Payment 1 250.00 342 616.71", &re);
        assert_eq!(got, toks(&["1,250.00", "342,616.71"]));
    }

    #[test]
    fn test_balance_only_is_skipped() {
        for policy in [SignPolicy::Explicit, SignPolicy::CreditSuffix, contextual()] {
            assert_eq!(
                resolve(&toks(&["1,500.00"]), "x 1,500.00", "x", &policy),
                AmountResolution::Skip(SkipReason::BalanceOnly)
            );
            assert_eq!(
                resolve(&[], "", "", &policy),
                AmountResolution::Skip(SkipReason::BalanceOnly)
            );
        }
    }

    #[test]
    fn test_charge_marker_wins_over_credit_keyword() {
        let got = resolve(
            &toks(&["35.00", "9,965.00"]),
            "01/07/2024 Transf Fee * 35.00 9,965.00",
            "Transf Fee",
            &contextual(),
        );
        assert_eq!(got, AmountResolution::Amount("-35.00".into()));
    }

    #[test]
    fn test_credit_keyword_makes_single_amount_positive() {
        let got = resolve(
            &toks(&["500.00", "10,000.00"]),
            "01/07/2024 Electronic Transfer 500.00 10,000.00",
            "Electronic Transfer",
            &contextual(),
        );
        assert_eq!(got, AmountResolution::Amount("500.00".into()));
    }

    #[test]
    fn test_bare_charge_category_is_discarded() {
        let got = resolve(
            &toks(&["15.00", "944.27"]),
            "02/07/2024 Monthly Fee 15.00 T 944.27",
            "Monthly Fee",
            &contextual(),
        );
        assert_eq!(got, AmountResolution::Skip(SkipReason::ChargeOnly));
    }

    #[test]
    fn test_single_amount_defaults_to_debit() {
        let got = resolve(
            &toks(&["120.50", "879.50"]),
            "03/07/2024 Pos Purchase 120.50 879.50",
            "Pos Purchase",
            &contextual(),
        );
        assert_eq!(got, AmountResolution::Amount("-120.50".into()));
    }

    #[test]
    fn test_three_tokens_takes_amount_before_balance() {
        let line = "04/07/2024 Digital Payment 15.00 T 944.27 342,616.71";
        let tokens = toks(&["15.00", "944.27", "342,616.71"]);
        assert_eq!(
            resolve(&tokens, line, "Digital Payment", &contextual()),
            AmountResolution::Amount("-944.27".into())
        );
        assert_eq!(
            resolve(&tokens, line, "Deposit", &contextual()),
            AmountResolution::Amount("944.27".into())
        );
    }

    #[test]
    fn test_four_tokens_takes_second_to_last() {
        let tokens = toks(&["1.00", "2.00", "300.00", "5,000.00"]);
        assert_eq!(
            resolve(&tokens, "", "Purchase", &contextual()),
            AmountResolution::Amount("-300.00".into())
        );
    }

    #[test]
    fn test_credit_suffix_policy() {
        let policy = SignPolicy::CreditSuffix;
        assert_eq!(
            resolve(&toks(&["12,000.00Cr", "13,500.00Cr"]), "", "SALARY", &policy),
            AmountResolution::Amount("12,000.00".into())
        );
        assert_eq!(
            resolve(&toks(&["250.00", "1,500.00"]), "", "POS", &policy),
            AmountResolution::Amount("-250.00".into())
        );
        assert_eq!(
            resolve(&toks(&["99.00Dr", "1,401.00"]), "", "DEBIT ORDER", &policy),
            AmountResolution::Amount("-99.00".into())
        );
    }

    #[test]
    fn test_explicit_policy_keeps_printed_sign() {
        let policy = SignPolicy::Explicit;
        assert_eq!(
            resolve(&toks(&["-1,800.00", "41,865.05"]), "", "", &policy),
            AmountResolution::Amount("-1,800.00".into())
        );
        assert_eq!(
            resolve(&toks(&["32,680.00", "43,665.05"]), "", "", &policy),
            AmountResolution::Amount("32,680.00".into())
        );
    }
}
