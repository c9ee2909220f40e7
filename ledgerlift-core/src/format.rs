//! Supported statement layouts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issuer-specific text layout, decided once per document from its first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementFormat {
    #[serde(rename = "FNB")]
    Fnb,
    #[serde(rename = "ABSA")]
    Absa,
    #[serde(rename = "STANDARD_BANK")]
    StandardBank,
}

impl StatementFormat {
    pub const ALL: [StatementFormat; 3] = [
        StatementFormat::Fnb,
        StatementFormat::Absa,
        StatementFormat::StandardBank,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementFormat::Fnb => "FNB",
            StatementFormat::Absa => "ABSA",
            StatementFormat::StandardBank => "STANDARD_BANK",
        }
    }

    /// Only ABSA statements arrive glyph-encoded.
    pub fn needs_glyph_decoding(&self) -> bool {
        matches!(self, StatementFormat::Absa)
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
