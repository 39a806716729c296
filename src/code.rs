//! PSGC code scheme.
//!
//! A code is a fixed-width string read left to right as region, province,
//! city/municipality and barangay segments. Ancestry is tested by comparing
//! left prefixes. Codes are never validated: a malformed code simply fails to
//! match anything.

/// Total width of a PSGC code
pub const CODE_WIDTH: usize = 10;

/// Prefix length identifying a region
pub const REGION_PREFIX: usize = 2;

/// Prefix length identifying a province
pub const PROVINCE_PREFIX: usize = 5;

/// Prefix length identifying a city or municipality
pub const CITY_MUN_PREFIX: usize = 7;

/// Fallback prefix for barangays coded under a sibling city/municipality segment
pub const BARANGAY_FALLBACK_PREFIX: usize = 6;

/// Correspondence code prefix used to locate an HUC's geographic province
pub const CORRESPONDENCE_PREFIX: usize = 5;

/// Fallback correspondence prefix when five characters do not align
pub const CORRESPONDENCE_FALLBACK_PREFIX: usize = 4;

/// The region without a province level (National Capital Region)
pub const NO_PROVINCE_REGION_CODE: &str = "1300000000";

/// Code of the synthetic "no province" option
pub const NO_PROVINCE_CODE: &str = "-NO PROVINCE-";

/// Label of the synthetic "no province" option
pub const NO_PROVINCE_NAME: &str = "-NO PROVINCE-";

/// First `n` characters of `code`, or the whole code when it is shorter.
pub fn level_segment(code: &str, n: usize) -> &str {
    match code.char_indices().nth(n) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}

/// True when both codes share the same first `n` characters.
pub fn same_segment(a: &str, b: &str, n: usize) -> bool {
    level_segment(a, n) == level_segment(b, n)
}

/// Ancestor code: the first `n` characters, zero-filled to full width.
pub fn zero_filled(code: &str, n: usize) -> String {
    let prefix = level_segment(code, n);
    let mut out = String::with_capacity(CODE_WIDTH);
    out.push_str(prefix);
    for _ in prefix.chars().count()..CODE_WIDTH {
        out.push('0');
    }
    out
}
