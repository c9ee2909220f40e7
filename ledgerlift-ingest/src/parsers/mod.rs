//! Per-issuer layouts: anchor patterns, stop rules and amount conventions
//! plugged into the shared reconstruction engine.

pub mod absa;
pub mod fnb;
pub mod standard_bank;

pub use absa::parse_absa_lines;
pub use fnb::parse_fnb_lines;
pub use standard_bank::parse_standard_bank_lines;

use tracing::debug;

use crate::types::RawTransactionBlock;

fn skipped(block: &RawTransactionBlock, reason: &str) {
    debug!(line = block.line_index, date = %block.anchor, reason, "row dropped");
}
