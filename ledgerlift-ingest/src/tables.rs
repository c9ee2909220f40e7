//! Static lookup data: glyph substitutions, boilerplate phrases, description
//! repairs and detection markers.
//!
//! New statement corpora extend these tables; the parsing code stays put.

use ledgerlift_core::StatementFormat;

/// ABSA text layer substitution cipher, encoded glyph -> real character.
pub const ABSA_GLYPHS: &[(char, char)] = &[
    // digits
    ('ð', '0'), ('ñ', '1'), ('ò', '2'), ('ó', '3'), ('ô', '4'),
    ('õ', '5'), ('ö', '6'), ('÷', '7'), ('ø', '8'), ('ù', '9'),
    // punctuation
    ('a', '/'), ('k', '.'), ('K', '.'), ('@', ' '), ('`', '-'), ('z', ':'),
    ('\\', '*'), ('m', 'j'),
    // C1 control block
    ('\u{81}', 'a'), ('\u{82}', 'b'), ('\u{83}', 'c'), ('\u{84}', 'o'),
    ('\u{85}', 'e'), ('\u{86}', 'i'), ('\u{87}', 'g'), ('\u{88}', 'h'),
    ('\u{89}', 'i'), ('\u{8a}', 'j'), ('\u{8b}', 'k'), ('\u{8c}', 'w'),
    ('\u{8d}', 'd'), ('\u{8e}', 'f'), ('\u{8f}', 'p'), ('\u{90}', 'v'),
    ('\u{91}', 'm'), ('\u{92}', 'a'), ('\u{93}', 'r'), ('\u{94}', 's'),
    ('\u{95}', 'n'), ('\u{96}', 'u'), ('\u{97}', 'y'), ('\u{98}', 'l'),
    ('\u{99}', 'r'),
    // Latin-1 capitals
    ('Á', 'A'), ('Â', 'B'), ('Ã', 'C'), ('Ä', 'D'), ('Å', 'E'),
    ('Æ', 'F'), ('Ç', 'G'), ('È', 'H'), ('É', 'I'), ('Ê', 'J'),
    ('Ë', 'K'), ('Ì', 'L'), ('Í', 'M'), ('Î', 'N'), ('Ï', 'O'),
    ('Ñ', 'P'), ('Ò', 'Q'), ('Ó', 'R'), ('Ô', 'S'), ('Õ', 'T'),
    ('Ö', 'U'), ('×', 'V'), ('Ø', 'W'), ('Ù', 'X'), ('Ú', 'Y'), ('Û', 'Z'),
    // Latin-1 lowercase and symbols
    ('â', 'S'), ('ã', 'T'), ('å', 'W'), ('æ', 'H'), ('ç', 'N'), ('è', 'Y'),
    ('¢', 'e'), ('£', 't'), ('¤', 'a'), ('¥', 'r'), ('¦', 'w'), ('§', 'x'),
    ('¨', 'n'), ('©', 'o'), ('ª', 'i'), ('«', 'u'), ('¬', 's'), ('\u{ad}', 'd'),
    ('®', 'l'), ('¯', 'c'), ('°', 'f'), ('±', 'h'), ('²', 'm'), ('³', 'p'),
    ('´', 'g'), ('µ', 'b'), ('¶', 'v'), ('·', 'k'), ('¸', 'x'), ('¹', 'j'),
    ('º', 'q'), ('»', 'z'),
];

/// Decoded ABSA headers, footers and account metadata. Matched as substrings;
/// several entries are decode artifacts of the real phrase.
pub const ABSA_BOILERPLATE: &[&str] = &[
    "Charge Statement Detail",
    "Se Ttiine",
    "MEiiectire",
    "Cheae accant",
    "Cheae Accant",
    "YUäX VXICITG",
    "SIXAC",
    "QRIV STXEET",
    "WXYHEID",
    "41-0214-4229",
    "197",
    "3100",
    "Xetarn aooreee",
    "Accant Tne",
    "Stateent n",
    "WAT reg n",
    "Urerorait",
    "Deecritin Charge Debit Aant",
    "Ieeaeo",
    "VXICITG VRAT",
    "ITTEXEST XATE",
    "ITCRäDED",
    "CHAXGE:",
    "ADSITISTXATIUT",
    "CASH DEVUSIT",
    "SINED",
    "SEXWICE",
    "TXATSACTIUT",
    "Date Traneactin",
    "SVXUVE",
    "Bana Riiteo",
    "Aathrieeo Financia",
    "Xegietereo Creoit",
    "Xegietratin Taber",
    "CSV001CW",
    "traneactine Mcntinaeo",
    "Vage",
    "Tax Inrice",
    "eSt/jp",
    "Gener/l Enquiries",
    "08600",
    "Uar Vriracn",
    "Wieit abea",
    "Baance",
    "Accant Saarn",
    "Yar traneactine",
];

/// Ordered ABSA description repairs. Order matters: later rules see the
/// output of earlier ones.
pub const ABSA_REPAIRS: &[(&str, &str)] = &[
    ("Setteent", "Settlement"),
    ("Heaoiiice", "Headoffice"),
    ("Archire", "Archive"),
    ("Ttiiic", "Notific"),
    ("Ttiine", "Notifyme"),
    ("Vanent", "Payment"),
    ("Vane ", "Payee "),
    ("Tranei", "Transf"),
    ("Varchaee", "Purchase"),
    ("Creoit", "Credit"),
    ("Externa", "External"),
    ("Digita", "Digital"),
    ("Snthn", "Monthly"),
    ("Traneactin", "Transaction"),
    ("Aoin", "Admin"),
    ("Vri Ui Vt Eai", "Proof Of Pmt Email"),
    ("Ve", "Pos"),
    ("Haro", "Holland"),
    ("Heebanajii", "Holland"),
    ("Eto", "Edo"),
    ("Ba Braght Frwaro", "Bal Brought Forward"),
    ("Abea Bana", "Absa Bank"),
    ("Sare", "Sars"),
    ("Stars", "Sars"),
    ("Traneier", "Transfer"),
    ("Sarch", "March"),
    ("Aag", "Aug"),
    ("Uct", "Oct"),
    ("Pan", "Jan"),
    ("Caro T.", "Card No."),
    ("Caro ", "Card "),
    ("Stegene", "Stegens"),
    ("Stegen ", "Stegens "),
    ("Wrnhe", "Vryhe"),
    ("Vryheio", "Vryheid"),
    ("MEii", "Vyh"),
    ("Stateent Detai", "Statement Detail"),
    ("Tmaa", "Njala"),
    ("Hbane", "Hlobane"),
    ("Deetiart", "Desti"),
    ("Vara", "Park"),
    ("Santa", "Santam"),
    ("Qieeie", "Kommissie"),
    ("Saio", "Suid"),
    ("äitanoer", "Uitlander"),
    // merchants
    ("Sagg Ano Bean", "Mugg And Bean"),
    ("Sar Goen Posaa", "Spur Golden Peak"),
    ("Siririer Cnre", "Mooirivier Conve"),
    ("Sirrier Cnre", "Mooirivier Conve"),
    ("Vtch", "Potch"),
    ("Hhee", "Wheel"),
    ("Chain Wheel  P  Tyr", "Champion Wheel & Tyr"),
    ("Tnr", "Tyr"),
    ("Sirac Vr", "Mirac Prop"),
    // digital payment references
    ("Cat 5 Dec", "Comput 5 Dec"),
    ("Cat 5 March", "Comput 5 March"),
    ("Cat 4 Set", "Comput 4 Sept"),
    // bank names
    ("Holland85344807104", "Wesbank_fi85344807104"),
    ("Ribertn", "Liberty"),
];

/// Description fragments that mark an ABSA credit or incoming transfer.
pub const ABSA_CREDIT_KEYWORDS: &[&str] = &["Credit", "Deposit", "Transf"];

/// Bare charge-category columns on ABSA rows that carry a fee but no debit.
pub const ABSA_CHARGE_CATEGORIES: &[&str] = &[" A ", " T "];

/// ABSA opening-balance rows, decoded and still encoded.
pub const ABSA_CARRIED_BALANCE: &[&str] = &["Brought Forward", "Braght Frwaro"];

pub const STANDARD_BANK_COLUMN_HEADER: &str = "Date Description Payments Deposits Balance";

/// Standard Bank running headers.
pub const STANDARD_BANK_BOILERPLATE: &[&str] = &[STANDARD_BANK_COLUMN_HEADER];

/// Standard Bank account reference lines.
pub const STANDARD_BANK_SKIP_PREFIXES: &[&str] = &["ACC "];

/// Standard Bank opening-balance rows (compared upper-cased).
pub const STANDARD_BANK_OPENING_BALANCE: &[&str] = &["OPENING BALANCE", "STATEMENT OPENING"];

/// FNB carried-forward rows (compared upper-cased).
pub const FNB_CARRIED_BALANCE: &[&str] = &["BROUGHT FORWARD", "OPENING BALANCE"];

/// Label for FNB rows that print amounts but no description.
pub const FNB_EMPTY_DESCRIPTION: &str = "#Monthly Account Fee";

/// How a detection marker is compared against first-page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCase {
    /// Compare against the upper-cased text.
    Insensitive,
    /// Compare against the text as extracted.
    Exact,
}

/// Full issuer names, checked before any short code.
pub const STRONG_MARKERS: &[(&str, MarkerCase, StatementFormat)] = &[
    ("FNB FUSION", MarkerCase::Insensitive, StatementFormat::Fnb),
    ("FIRST NATIONAL BANK", MarkerCase::Insensitive, StatementFormat::Fnb),
    ("STANDARD BANK", MarkerCase::Insensitive, StatementFormat::StandardBank),
    ("ABSA BANK", MarkerCase::Exact, StatementFormat::Absa),
    ("Absa Bank", MarkerCase::Exact, StatementFormat::Absa),
];

/// Short codes, only consulted when no full name matched.
pub const WEAK_MARKERS: &[(&str, MarkerCase, StatementFormat)] = &[
    ("FNB", MarkerCase::Insensitive, StatementFormat::Fnb),
    ("ABSA", MarkerCase::Insensitive, StatementFormat::Absa),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_glyph_table_has_no_duplicate_sources() {
        let mut seen = HashSet::new();
        for (from, _) in ABSA_GLYPHS {
            assert!(seen.insert(*from), "duplicate glyph {from:?}");
        }
    }

    #[test]
    fn test_glyph_table_covers_all_digits() {
        let digits: HashSet<char> = ABSA_GLYPHS
            .iter()
            .map(|(_, to)| *to)
            .filter(|c| c.is_ascii_digit())
            .collect();
        assert_eq!(digits.len(), 10);
    }

    #[test]
    fn test_repairs_have_non_empty_patterns() {
        assert!(ABSA_REPAIRS.iter().all(|(from, _)| !from.is_empty()));
    }
}
