//! The two knobs a caller may turn on a conversion.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Caller-input failures. These are the only errors a conversion surfaces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid statement year '{requested}': expected \"auto\" or a four-digit year")]
    InvalidStatementYear { requested: String },
    #[error("unknown output format '{requested}' (available: {known})")]
    UnknownOutputFormat { requested: String, known: String },
}

/// Year used to complete dates that print without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementYear {
    /// Infer from the statement period on the first page.
    #[default]
    Auto,
    Fixed(i32),
}

impl StatementYear {
    pub fn fixed(&self) -> Option<i32> {
        match self {
            StatementYear::Auto => None,
            StatementYear::Fixed(y) => Some(*y),
        }
    }
}

impl FromStr for StatementYear {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(StatementYear::Auto);
        }
        if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(year) = s.parse::<i32>() {
                return Ok(StatementYear::Fixed(year));
            }
        }
        Err(ConfigError::InvalidStatementYear {
            requested: s.to_string(),
        })
    }
}

impl fmt::Display for StatementYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementYear::Auto => f.write_str("auto"),
            StatementYear::Fixed(y) => write!(f, "{y}"),
        }
    }
}

impl Serialize for StatementYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatementYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Flip every resolved amount's sign exactly once.
    #[serde(default)]
    pub invert_amounts: bool,
    #[serde(default)]
    pub statement_year: StatementYear,
}

impl ConvertOptions {
    pub fn new(invert_amounts: bool, statement_year: StatementYear) -> Self {
        Self {
            invert_amounts,
            statement_year,
        }
    }
}
