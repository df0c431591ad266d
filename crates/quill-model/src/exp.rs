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

//! # Exponentiator
//!
//! Renormalizes [`DecimalParts`](crate::parts::DecimalParts) into the
//! mantissa/exponent shape scientific notation wants. This is a pure
//! reindexing of the digit sequence: every source digit is preserved in
//! `lead_digit` followed by `mantissa_tail`, and no rounding occurs.

use crate::parts::DecimalParts;

/// The scientific-notation decomposition of a value.
///
/// Encodes `sign · lead_digit.mantissa_tail × 10^exponent` with the mantissa
/// normalized so that `lead_digit` is non-zero — except for the value zero,
/// where `lead_digit` is `'0'`, the tail is empty, and the exponent is 0.
///
/// `mantissa_tail` is not trimmed further; the scientific renderer decides
/// how many of its digits survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpParts {
    /// Whether the value is negative.
    pub negative: bool,
    /// The first (non-zero, unless the value is zero) mantissa digit.
    pub lead_digit: char,
    /// The remaining mantissa digits, untrimmed.
    pub mantissa_tail: String,
    /// Power of ten such that the value is `lead.tail × 10^exponent`.
    pub exponent: i64,
}

impl ExpParts {
    /// Derives the scientific decomposition from canonical decimal parts.
    ///
    /// Scans the concatenated integer and fraction digits for the first
    /// non-zero digit; that digit becomes the mantissa lead, everything after
    /// it the tail, and the exponent is the lead digit's distance from the
    /// decimal point. All-zero input collapses to `('0', "", 0)` with the
    /// sign preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quill_model::{exp::ExpParts, parts::DecimalParts};
    ///
    /// let parts = DecimalParts::new(true, "0", "00123");
    /// let exp = ExpParts::from_decimal(&parts);
    /// assert!(exp.negative);
    /// assert_eq!(exp.lead_digit, '1');
    /// assert_eq!(exp.mantissa_tail, "23");
    /// assert_eq!(exp.exponent, -3);
    /// ```
    pub fn from_decimal(parts: &DecimalParts) -> Self {
        let integer = parts.integer_part.as_bytes();
        let fraction = parts.fraction_part.as_bytes();

        let first_non_zero = integer
            .iter()
            .chain(fraction.iter())
            .position(|&b| b != b'0');

        match first_non_zero {
            None => Self {
                negative: parts.negative,
                lead_digit: '0',
                mantissa_tail: String::new(),
                exponent: 0,
            },
            Some(i) => {
                let lead_digit = if i < integer.len() {
                    integer[i] as char
                } else {
                    fraction[i - integer.len()] as char
                };

                let mut mantissa_tail =
                    String::with_capacity(integer.len() + fraction.len() - i - 1);
                if i + 1 < integer.len() {
                    mantissa_tail.push_str(&parts.integer_part[i + 1..]);
                    mantissa_tail.push_str(&parts.fraction_part);
                } else {
                    mantissa_tail.push_str(&parts.fraction_part[(i + 1).saturating_sub(integer.len())..]);
                }

                Self {
                    negative: parts.negative,
                    lead_digit,
                    mantissa_tail,
                    exponent: integer.len() as i64 - 1 - i as i64,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exp_of(negative: bool, integer: &str, fraction: &str) -> ExpParts {
        ExpParts::from_decimal(&DecimalParts::new(negative, integer, fraction))
    }

    #[test]
    fn test_lead_digit_in_fraction_gives_negative_exponent() {
        let exp = exp_of(true, "0", "00123");
        assert!(exp.negative);
        assert_eq!(exp.lead_digit, '1');
        assert_eq!(exp.mantissa_tail, "23");
        assert_eq!(exp.exponent, -3);
    }

    #[test]
    fn test_lead_digit_in_integer_gives_non_negative_exponent() {
        let exp = exp_of(false, "123", "456");
        assert_eq!(exp.lead_digit, '1');
        assert_eq!(exp.mantissa_tail, "23456");
        assert_eq!(exp.exponent, 2);
    }

    #[test]
    fn test_single_integer_digit_has_zero_exponent() {
        let exp = exp_of(false, "7", "");
        assert_eq!(exp.lead_digit, '7');
        assert_eq!(exp.mantissa_tail, "");
        assert_eq!(exp.exponent, 0);
    }

    #[test]
    fn test_lead_digit_last_in_integer_takes_whole_fraction_as_tail() {
        let exp = exp_of(false, "09", "25");
        assert_eq!(exp.lead_digit, '9');
        assert_eq!(exp.mantissa_tail, "25");
        assert_eq!(exp.exponent, 0);
    }

    #[test]
    fn test_zero_collapses_to_canonical_exp_parts() {
        let exp = exp_of(true, "0", "");
        assert!(exp.negative);
        assert_eq!(exp.lead_digit, '0');
        assert_eq!(exp.mantissa_tail, "");
        assert_eq!(exp.exponent, 0);
    }

    #[test]
    fn test_all_source_digits_are_preserved() {
        let exp = exp_of(false, "10203", "0405");
        let rebuilt = format!("{}{}", exp.lead_digit, exp.mantissa_tail);
        assert_eq!(rebuilt, "102030405");
        assert_eq!(exp.exponent, 4);
    }
}
