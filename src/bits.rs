//! Text rendering of output bytes.

use core::fmt::Write;

use heapless::String;

/// Length of `"0b"` followed by eight binary digits.
pub const BINARY_STRING_LEN: usize = 10;

/// Formats `bits` as `"0b"` followed by all eight binary digits, MSB first.
///
/// Each call returns its own string.
///
/// ```
/// assert_eq!(segmap595::to_binary_string(254).as_str(), "0b11111110");
/// ```
#[must_use]
pub fn to_binary_string(bits: u8) -> String<BINARY_STRING_LEN> {
    let mut text = String::new();
    // Cannot fail: the output is always BINARY_STRING_LEN bytes.
    let _ = write!(text, "{bits:#010b}");
    text
}
