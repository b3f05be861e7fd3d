//! Object member ordering.
//!
//! RFC 8785 3.2.3 sorts object members by comparing the big-endian UTF-16
//! encoding of their keys. Comparing the `u16` code units numerically is
//! equivalent and avoids materializing the byte form.

use std::cmp::Ordering;

/// Compare two keys by their UTF-16 code-unit sequences.
///
/// This matches ECMAScript string comparison and differs from `str`'s own
/// ordering for supplementary-plane characters: those compare through their
/// surrogate pairs (0xD800-0xDFFF), which sort *below* BMP code points of
/// 0xE000 and above.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
