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

//! # Splitter
//!
//! Normalizes [`RawDigits`](crate::raw::RawDigits) into the canonical
//! integer/fraction form the renderers consume.
//!
//! ## Motivation
//!
//! Bignum engines report a digit sequence plus a decimal-point position, and
//! the sequence routinely carries incidental zero padding on either end. The
//! splitter resolves the point position into separate integer and fraction
//! digit strings and trims the redundant zeros, so every later stage can rely
//! on one canonical shape: the integer part never has a leading zero unless
//! it is exactly `"0"`, and the fraction part never has a trailing zero.
//!
//! ## Highlights
//!
//! - Handles point positions left of, inside, and right of the digit
//!   sequence, including positions far outside it.
//! - Idempotent: re-splitting its own output at the integer/fraction
//!   boundary reproduces the same parts.
//! - Validates digit purity eagerly and fails before building any output.

use crate::raw::RawDigits;
use quill_core::digits;

/// The error returned when a raw digit string contains a non-digit byte.
///
/// Raised by [`DecimalParts::from_raw`] before any output is constructed.
/// This is a local input-validation failure; callers should treat it as a
/// programming error in the layer that produced the digit string, not as a
/// transient condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonDigitError {
    /// The offending byte.
    pub byte: u8,
    /// Its byte position within the digit string.
    pub position: usize,
}

impl std::fmt::Display for NonDigitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Raw digit string contains non-digit byte 0x{:02x} at position {}",
            self.byte, self.position
        )
    }
}

impl std::error::Error for NonDigitError {}

/// The canonical decimal form of a value: sign, integer digits, fraction
/// digits.
///
/// Invariants established by [`DecimalParts::from_raw`]:
///
/// * `integer_part` has no leading zero unless it is exactly `"0"`.
/// * `fraction_part` has no trailing zero and may be empty.
///
/// The fields are public because the type is a plain data carrier between
/// pipeline stages; the renderers re-validate the little they depend on.
///
/// # Examples
///
/// ```rust
/// use quill_model::{parts::DecimalParts, raw::RawDigits};
///
/// let raw = RawDigits::new(false, "0012345600", 2);
/// let parts = DecimalParts::from_raw(&raw).unwrap();
/// assert_eq!(parts.integer_part, "0");
/// assert_eq!(parts.fraction_part, "123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalParts {
    /// Whether the value is negative.
    pub negative: bool,
    /// Digits before the decimal point, `"0"` at minimum.
    pub integer_part: String,
    /// Digits after the decimal point, possibly empty.
    pub fraction_part: String,
}

impl DecimalParts {
    /// Creates a `DecimalParts` from already-canonical components.
    ///
    /// No normalization is performed; use [`DecimalParts::from_raw`] when the
    /// digits come straight from an engine.
    #[inline]
    pub fn new(negative: bool, integer_part: impl Into<String>, fraction_part: impl Into<String>) -> Self {
        Self {
            negative,
            integer_part: integer_part.into(),
            fraction_part: fraction_part.into(),
        }
    }

    /// Splits a raw digit string at its decimal-point position and trims
    /// redundant zeros.
    ///
    /// With `L` digits and a decimal exponent `P`:
    ///
    /// * `P >= L`: all digits are integer digits, padded with `P - L` zeros.
    /// * `P <= 0`: all digits are fraction digits, preceded by `-P` zeros.
    /// * otherwise the sequence is split after the first `P` digits.
    ///
    /// An empty digit sequence is treated as zero. The sign passes through
    /// unchanged, also for zero values.
    ///
    /// # Errors
    ///
    /// Returns [`NonDigitError`] if any byte of `raw.digits` is outside
    /// `'0'..='9'`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quill_model::{parts::DecimalParts, raw::RawDigits};
    ///
    /// // The point lies past the digits: zero-pad the integer part.
    /// let parts = DecimalParts::from_raw(&RawDigits::new(false, "7", 4)).unwrap();
    /// assert_eq!(parts.integer_part, "7000");
    /// assert_eq!(parts.fraction_part, "");
    ///
    /// // The point lies before the digits: zero-pad the fraction part.
    /// let parts = DecimalParts::from_raw(&RawDigits::new(true, "123", -2)).unwrap();
    /// assert!(parts.negative);
    /// assert_eq!(parts.integer_part, "0");
    /// assert_eq!(parts.fraction_part, "00123");
    /// ```
    pub fn from_raw(raw: &RawDigits) -> Result<Self, NonDigitError> {
        if let Some((position, byte)) = raw
            .digits
            .bytes()
            .enumerate()
            .find(|&(_, b)| !b.is_ascii_digit())
        {
            return Err(NonDigitError { byte, position });
        }

        let digit_str = raw.digits.as_str();
        let len = digit_str.len() as i64;
        let point = raw.decimal_exponent;

        let (integer_raw, fraction_raw) = if point >= len {
            let mut integer = String::with_capacity((point.max(1)) as usize);
            integer.push_str(digit_str);
            for _ in 0..(point - len) {
                integer.push('0');
            }
            (integer, String::new())
        } else if point <= 0 {
            let pad = point.unsigned_abs() as usize;
            let mut fraction = String::with_capacity(pad + digit_str.len());
            for _ in 0..pad {
                fraction.push('0');
            }
            fraction.push_str(digit_str);
            ("0".to_owned(), fraction)
        } else {
            let at = point as usize;
            (digit_str[..at].to_owned(), digit_str[at..].to_owned())
        };

        let integer_trimmed = digits::trim_leading_zeros(&integer_raw);
        let integer_part = if integer_trimmed.is_empty() {
            "0".to_owned()
        } else {
            integer_trimmed.to_owned()
        };
        let fraction_part = digits::trim_trailing_zeros(&fraction_raw).to_owned();

        Ok(Self {
            negative: raw.negative,
            integer_part,
            fraction_part,
        })
    }

    /// Whether the parts describe the value zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        digits::is_all_zeros(&self.integer_part) && digits::is_all_zeros(&self.fraction_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn split(digits: &str, point: i64) -> DecimalParts {
        DecimalParts::from_raw(&RawDigits::new(false, digits, point)).unwrap()
    }

    #[test]
    fn test_split_trims_leading_and_trailing_zeros() {
        let parts = split("0012345600", 2);
        assert!(!parts.negative);
        assert_eq!(parts.integer_part, "0");
        assert_eq!(parts.fraction_part, "123456");
    }

    #[test]
    fn test_split_pads_integer_when_point_exceeds_digit_count() {
        let parts = split("7", 4);
        assert_eq!(parts.integer_part, "7000");
        assert_eq!(parts.fraction_part, "");
    }

    #[test]
    fn test_split_pads_fraction_when_point_is_non_positive() {
        let parts = split("123", -3);
        assert_eq!(parts.integer_part, "0");
        assert_eq!(parts.fraction_part, "000123");

        let at_zero = split("123", 0);
        assert_eq!(at_zero.integer_part, "0");
        assert_eq!(at_zero.fraction_part, "123");
    }

    #[test]
    fn test_split_interior_point() {
        let parts = split("123456", 3);
        assert_eq!(parts.integer_part, "123");
        assert_eq!(parts.fraction_part, "456");
    }

    #[test]
    fn test_split_empty_digits_is_zero() {
        for point in [-3, 0, 5] {
            let parts = split("", point);
            assert_eq!(parts.integer_part, "0");
            assert_eq!(parts.fraction_part, "");
            assert!(parts.is_zero());
        }
    }

    #[test]
    fn test_split_all_zero_digits_canonicalize() {
        let parts = split("00000", 2);
        assert_eq!(parts.integer_part, "0");
        assert_eq!(parts.fraction_part, "");
    }

    #[test]
    fn test_split_preserves_sign_even_for_zero() {
        let parts = DecimalParts::from_raw(&RawDigits::new(true, "000", 1)).unwrap();
        assert!(parts.negative);
        assert!(parts.is_zero());
    }

    #[test]
    fn test_split_rejects_non_digit_bytes() {
        let err = DecimalParts::from_raw(&RawDigits::new(false, "12x4", 2)).unwrap_err();
        assert_eq!(err.byte, b'x');
        assert_eq!(err.position, 2);
        assert!(err.to_string().contains("non-digit"));
    }

    #[test]
    fn test_split_is_idempotent_at_the_part_boundary() {
        let cases: &[(&str, i64)] = &[
            ("0012345600", 2),
            ("7", 4),
            ("123", -5),
            ("00000", 3),
            ("987654321", 9),
        ];
        for &(digits, point) in cases {
            let first = split(digits, point);
            let recombined = format!("{}{}", first.integer_part, first.fraction_part);
            let second = split(&recombined, first.integer_part.len() as i64);
            assert_eq!(first, second, "re-split diverged for {digits:?}@{point}");
        }
    }

    #[test]
    fn test_split_idempotence_over_random_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let len = rng.gen_range(0..64);
            let digits: String = (0..len)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();
            let point = rng.gen_range(-80..80);

            let first = split(&digits, point);
            let recombined = format!("{}{}", first.integer_part, first.fraction_part);
            let second = split(&recombined, first.integer_part.len() as i64);
            assert_eq!(first, second, "re-split diverged for {digits:?}@{point}");
        }
    }
}
