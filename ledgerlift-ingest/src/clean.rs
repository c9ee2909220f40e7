//! Description repair: ordered literal substitutions for known decode artifacts.

use crate::tables::ABSA_REPAIRS;

#[derive(Debug, Clone, Copy)]
pub struct DescriptionCleaner {
    repairs: &'static [(&'static str, &'static str)],
    collapse_whitespace: bool,
}

impl DescriptionCleaner {
    pub const fn new(
        repairs: &'static [(&'static str, &'static str)],
        collapse_whitespace: bool,
    ) -> Self {
        Self {
            repairs,
            collapse_whitespace,
        }
    }

    pub const fn absa() -> Self {
        Self::new(ABSA_REPAIRS, false)
    }

    /// Whitespace-only cleanup for layouts whose text decodes cleanly.
    pub const fn plain() -> Self {
        Self::new(&[], true)
    }

    /// Apply every repair in table order, then trim. Unmapped text is left alone.
    pub fn clean(&self, raw: &str) -> String {
        let mut out = raw.to_string();
        for (from, to) in self.repairs {
            if out.contains(from) {
                out = out.replace(from, to);
            }
        }
        if self.collapse_whitespace {
            out = out.split_whitespace().collect::<Vec<_>>().join(" ");
        }
        out.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absa_repairs() {
        let cleaner = DescriptionCleaner::absa();
        assert_eq!(cleaner.clean("Digita Vanent Creoit"), "Digital Payment Credit");
        assert_eq!(cleaner.clean("Sagg Ano Bean Vtch"), "Mugg And Bean Potch");
        assert_eq!(cleaner.clean("Ba Braght Frwaro"), "Bal Brought Forward");
    }

    #[test]
    fn test_order_is_significant() {
        // "Holland85344807104" only exists after "Haro" became "Holland".
        let cleaner = DescriptionCleaner::absa();
        assert_eq!(cleaner.clean("Haro85344807104"), "Wesbank_fi85344807104");
    }

    #[test]
    fn test_clean_text_is_untouched() {
        let cleaner = DescriptionCleaner::absa();
        assert_eq!(cleaner.clean("Electronic Transfer"), "Electronic Transfer");
    }

    #[test]
    fn test_plain_collapses_whitespace() {
        let cleaner = DescriptionCleaner::plain();
        assert_eq!(cleaner.clean("  IB PAYMENT   TO  JOHN "), "IB PAYMENT TO JOHN");
    }
}
