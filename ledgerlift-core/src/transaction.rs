//! The canonical output record handed to sinks.

use serde::{Deserialize, Serialize};

/// One resolved statement row.
///
/// All three fields are text: `date` is `DD/MM/YYYY` when the date could be
/// normalised (the raw anchor text otherwise), and `amount` keeps the
/// thousands separators of the source, debit-negative / credit-positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_lowercase_keys() {
        let t = Transaction::new("30/10/2025", "IB PAYMENT TO JOHN", "-1,800.00");
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["date"], "30/10/2025");
        assert_eq!(json["amount"], "-1,800.00");
    }
}
