//! ledgerlift-core: statement types shared by the parsing engine, the sinks and the CLI

pub mod amount;
pub mod format;
pub mod options;
pub mod transaction;

pub use amount::{format_amount, invert_amount, parse_amount};
pub use format::StatementFormat;
pub use options::{ConfigError, ConvertOptions, StatementYear};
pub use transaction::Transaction;
