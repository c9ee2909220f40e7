//! ledgerlift-export: writes converted transactions to delimited text or JSON.

pub mod naming;
pub mod sink;

pub use naming::{combined_output_name, document_output_name};
pub use sink::{OutputFormat, write_transactions, write_transactions_to_path};
