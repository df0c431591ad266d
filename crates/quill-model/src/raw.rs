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

//! # Raw Digit Output
//!
//! The input contract of the formatting pipeline: what a bignum engine's
//! to-string conversion hands over before any normalization has happened.

/// The raw textual rendering of an arbitrary-precision value.
///
/// `digits` is an unsigned ASCII digit sequence that may contain incidental
/// leading or trailing zeros; `decimal_exponent` counts how many of those
/// digits lie before the decimal point and may be negative (the value starts
/// with `0.0...`) or exceed the digit count (trailing integer zeros were
/// elided by the engine). The sign travels separately.
///
/// Instances are produced fresh per formatting call and never retained.
///
/// # Examples
///
/// ```rust
/// use quill_model::raw::RawDigits;
///
/// // 123.456 as an engine would report it.
/// let raw = RawDigits::new(false, "123456", 3);
/// assert_eq!(raw.digits, "123456");
/// assert_eq!(raw.decimal_exponent, 3);
///
/// // 0.00123: the point sits three positions left of the first digit.
/// let small = RawDigits::new(false, "123", -2);
/// assert_eq!(small.decimal_exponent, -2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawDigits {
    /// Whether the value is negative.
    pub negative: bool,
    /// The unsigned digit sequence, ASCII `'0'..='9'` only.
    pub digits: String,
    /// The count of digits that belong before the decimal point.
    pub decimal_exponent: i64,
}

impl RawDigits {
    /// Creates a `RawDigits` triple.
    #[inline]
    pub fn new(negative: bool, digits: impl Into<String>, decimal_exponent: i64) -> Self {
        Self {
            negative,
            digits: digits.into(),
            decimal_exponent,
        }
    }
}
