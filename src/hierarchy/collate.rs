//! Locale-aware ordering of place names.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::AddressRecord;

/// ASCII punctuation and symbols in root-collation order; all sort after
/// whitespace and before digits and letters.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Base of the weights given to digits, letters and other characters.
const TEXT_WEIGHT: u32 = 0x100;

fn primary_weight(c: char) -> u32 {
    if c.is_whitespace() {
        return 0;
    }
    match PUNCTUATION_ORDER.find(c) {
        Some(idx) => 1 + idx as u32,
        None => TEXT_WEIGHT + c as u32,
    }
}

/// Multi-level sort key approximating root-locale collation for Latin names.
///
/// Levels: base characters ignoring accents and case, then accents, then
/// case (lowercase first), then raw code points. At the base level whitespace
/// sorts first, then punctuation and symbols, then digits, then letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u32>,
    secondary: String,
    tertiary: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(name: &str) -> Self {
        let primary = name
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .map(primary_weight)
            .collect();
        let secondary = name.nfd().flat_map(char::to_lowercase).collect();
        let tertiary = name.chars().map(char::is_uppercase).collect();

        Self {
            primary,
            secondary,
            tertiary,
            raw: name.to_string(),
        }
    }
}

/// Compare two names the way a selection list should present them
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Sort records by name, ascending
pub fn sort_by_name(records: &mut [&AddressRecord]) {
    records.sort_by_cached_key(|r| CollationKey::new(&r.name));
}
