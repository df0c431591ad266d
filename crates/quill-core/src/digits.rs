// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Digit-String Utilities
//!
//! Pure functions over ASCII digit strings (`'0'..='9'`, no sign, no
//! separators). All helpers are allocation-conscious, operate byte-wise, and
//! scale linearly with the input length, which matters because values with
//! thousands of significant digits flow through them on every render.
//!
//! ## Highlights
//!
//! - `trim_leading_zeros` / `trim_trailing_zeros`: zero normalization as
//!   borrowing slices, no allocation.
//! - `fit_to_length`: the truncate-or-right-pad rule shared by the fixed and
//!   scientific renderers. Truncation discards digits; it never rounds.
//! - `group_from_right`: least-significant-first grouping used for the
//!   thousands-separated number style.
//!
//! All functions assume (and `is_ascii_digits` lets callers verify) that the
//! input contains ASCII digits only, so byte indexing is char-safe.

/// Checks whether every byte of `s` is an ASCII digit.
///
/// The empty string vacuously qualifies.
///
/// # Examples
///
/// ```rust
/// use quill_core::digits::is_ascii_digits;
///
/// assert!(is_ascii_digits("0012345600"));
/// assert!(is_ascii_digits(""));
/// assert!(!is_ascii_digits("12a4"));
/// assert!(!is_ascii_digits("-12"));
/// ```
#[inline]
pub fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Checks whether `s` consists of `'0'` bytes only.
///
/// The empty string counts as all zeros; the splitter and exponentiator rely
/// on that convention when canonicalizing zero values.
///
/// # Examples
///
/// ```rust
/// use quill_core::digits::is_all_zeros;
///
/// assert!(is_all_zeros("000"));
/// assert!(is_all_zeros(""));
/// assert!(!is_all_zeros("010"));
/// ```
#[inline]
pub fn is_all_zeros(s: &str) -> bool {
    s.bytes().all(|b| b == b'0')
}

/// Strips leading `'0'` bytes, borrowing the remainder.
///
/// Returns the empty string when `s` is all zeros; callers that need the
/// canonical `"0"` substitute it themselves.
///
/// # Examples
///
/// ```rust
/// use quill_core::digits::trim_leading_zeros;
///
/// assert_eq!(trim_leading_zeros("00700"), "700");
/// assert_eq!(trim_leading_zeros("000"), "");
/// assert_eq!(trim_leading_zeros("123"), "123");
/// ```
#[inline]
pub fn trim_leading_zeros(s: &str) -> &str {
    s.trim_start_matches('0')
}

/// Strips trailing `'0'` bytes, borrowing the remainder.
///
/// Returns the empty string when `s` is all zeros.
///
/// # Examples
///
/// ```rust
/// use quill_core::digits::trim_trailing_zeros;
///
/// assert_eq!(trim_trailing_zeros("12345600"), "123456");
/// assert_eq!(trim_trailing_zeros("000"), "");
/// ```
#[inline]
pub fn trim_trailing_zeros(s: &str) -> &str {
    s.trim_end_matches('0')
}

/// Fits `digits` to exactly `length` characters.
///
/// Longer inputs are truncated — trailing digits are discarded without
/// adjusting the preceding digit upward. Shorter inputs are right-padded with
/// `'0'`. This is the shared fraction/mantissa rule of the renderers; the
/// truncation semantics are a deliberate contract, not rounding done cheaply.
///
/// # Examples
///
/// ```rust
/// use quill_core::digits::fit_to_length;
///
/// assert_eq!(fit_to_length("123456789", 4), "1234"); // never "1235"
/// assert_eq!(fit_to_length("98", 5), "98000");
/// assert_eq!(fit_to_length("", 3), "000");
/// assert_eq!(fit_to_length("12345", 0), "");
/// ```
pub fn fit_to_length(digits: &str, length: usize) -> String {
    if digits.len() >= length {
        digits[..length].to_owned()
    } else {
        let mut out = String::with_capacity(length);
        out.push_str(digits);
        for _ in digits.len()..length {
            out.push('0');
        }
        out
    }
}

/// Partitions `digits` into groups of `group_size` counted from the
/// least-significant (right) end, joined with `separator`.
///
/// Inputs no longer than one group are returned unchanged. A `group_size` of
/// zero disables grouping entirely.
///
/// # Examples
///
/// ```rust
/// use quill_core::digits::group_from_right;
///
/// assert_eq!(group_from_right("123456789", ',', 3), "123,456,789");
/// assert_eq!(group_from_right("1234", ',', 3), "1,234");
/// assert_eq!(group_from_right("123", ',', 3), "123");
/// assert_eq!(group_from_right("0", ',', 3), "0");
/// ```
pub fn group_from_right(digits: &str, separator: char, group_size: usize) -> String {
    let len = digits.len();
    if group_size == 0 || len <= group_size {
        return digits.to_owned();
    }

    let separators = (len - 1) / group_size;
    let mut out = String::with_capacity(len + separators * separator.len_utf8());

    // The leading group carries the remainder; every following group is full.
    let mut head = len % group_size;
    if head == 0 {
        head = group_size;
    }
    out.push_str(&digits[..head]);

    let mut pos = head;
    while pos < len {
        out.push(separator);
        out.push_str(&digits[pos..pos + group_size]);
        pos += group_size;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ascii_digits_accepts_digits_and_empty() {
        assert!(is_ascii_digits("0123456789"));
        assert!(is_ascii_digits(""));
    }

    #[test]
    fn test_is_ascii_digits_rejects_sign_space_and_letters() {
        assert!(!is_ascii_digits("+1"));
        assert!(!is_ascii_digits("1 2"));
        assert!(!is_ascii_digits("1x"));
        assert!(!is_ascii_digits("١٢٣")); // non-ASCII digits are not digits here
    }

    #[test]
    fn test_trim_leading_zeros_keeps_interior_and_trailing_zeros() {
        assert_eq!(trim_leading_zeros("0010200"), "10200");
    }

    #[test]
    fn test_trim_trailing_zeros_keeps_interior_and_leading_zeros() {
        assert_eq!(trim_trailing_zeros("0010200"), "00102");
    }

    #[test]
    fn test_trims_reduce_all_zeros_to_empty() {
        assert_eq!(trim_leading_zeros("0000"), "");
        assert_eq!(trim_trailing_zeros("0000"), "");
    }

    #[test]
    fn test_fit_to_length_truncates_without_rounding() {
        // A '9' in the first discarded position must not bump the kept digits.
        assert_eq!(fit_to_length("129999", 2), "12");
    }

    #[test]
    fn test_fit_to_length_pads_to_exact_length() {
        assert_eq!(fit_to_length("7", 6), "700000");
        assert_eq!(fit_to_length("123", 3), "123");
    }

    #[test]
    fn test_group_from_right_boundary_lengths() {
        assert_eq!(group_from_right("12", ',', 3), "12");
        assert_eq!(group_from_right("123", ',', 3), "123");
        assert_eq!(group_from_right("1234", ',', 3), "1,234");
        assert_eq!(group_from_right("123456", ',', 3), "123,456");
        assert_eq!(group_from_right("1234567", ',', 3), "1,234,567");
    }

    #[test]
    fn test_group_from_right_respects_separator_and_size() {
        assert_eq!(group_from_right("123456789", '.', 3), "123.456.789");
        assert_eq!(group_from_right("12345678", ' ', 4), "1234 5678");
    }

    #[test]
    fn test_group_from_right_zero_group_size_is_identity() {
        assert_eq!(group_from_right("123456", ',', 0), "123456");
    }
}
