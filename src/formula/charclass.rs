//! Character classes used by the formula grammar.
//!
//! A digit is any Unicode decimal digit (general category `Nd`), not just
//! ASCII `0-9`; a letter is a cased or uncased letter (`L*`), which excludes
//! letter-like numerals such as `Ⅻ`.

/// First code point of every run of ten `Nd` digits, zero through nine.
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of `c` as a decimal digit, in any script.
pub(crate) fn decimal_value(c: char) -> Option<u32> {
    if let Some(v) = c.to_digit(10) {
        return Some(v);
    }
    if !c.is_numeric() {
        return None;
    }
    let cp = u32::from(c);
    // DECIMAL_ZEROS is sorted; find the last run starting at or before `cp`.
    let idx = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let offset = cp - DECIMAL_ZEROS[idx];
    (offset < 10).then_some(offset)
}

pub(crate) fn is_digit(c: char) -> bool {
    decimal_value(c).is_some()
}

/// `Nl` letter numbers are alphabetic in Unicode but are not letters here.
pub(crate) fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}
