//! Reverses the per-character substitution some issuers apply to their text layer.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::tables::ABSA_GLYPHS;

/// Character-for-character decoder. Characters missing from the table pass
/// through unchanged, so decoding is total.
#[derive(Debug, Clone)]
pub struct GlyphDecoder {
    map: HashMap<char, char>,
}

impl GlyphDecoder {
    pub fn new(table: &[(char, char)]) -> Self {
        Self {
            map: table.iter().copied().collect(),
        }
    }

    /// Shared decoder for ABSA statements.
    pub fn absa() -> &'static GlyphDecoder {
        static DECODER: OnceLock<GlyphDecoder> = OnceLock::new();
        DECODER.get_or_init(|| GlyphDecoder::new(ABSA_GLYPHS))
    }

    pub fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.map.get(&c).copied().unwrap_or(c))
            .collect()
    }
}
