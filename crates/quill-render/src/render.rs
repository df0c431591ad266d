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

//! # Format Dispatcher
//!
//! The entry point wiring a [`DecimalSource`] value through the splitter,
//! the exponentiator, and the renderer its format specifier selects.
//!
//! ## Motivation
//!
//! Callers hold an opaque bignum value and a textual specifier such as
//! `"N0"` or `"e4"`. This module resolves the specifier into a concrete
//! rendering pipeline and applies the general style's magnitude policy:
//! values below 10^-5 or above 10^16 in magnitude switch to scientific
//! notation, everything in between renders fixed.
//!
//! ## The 10^16 boundary
//!
//! The policy is decided through [`DecimalSource::cmp_abs_pow10`], an exact
//! comparison performed by the bignum engine, not through the exponent
//! derived from the digit string. The two agree everywhere except exactly at
//! the boundary: 10^16 must render fixed while 10^16 + 1 must render
//! scientific, and both share the same derived exponent.

use crate::{
    error::FormatError,
    fixed::{format_fixed, format_grouped},
    scientific::format_scientific,
    spec::FormatSpec,
};
use quill_core::locale::LocaleNumberFormat;
use quill_model::{exp::ExpParts, parts::DecimalParts, source::DecimalSource};
use std::cmp::Ordering;

/// Minimum digit width of the exponent in scientific output.
pub const SCIENTIFIC_EXPONENT_WIDTH: usize = 3;

/// General style: magnitudes strictly below `10^GENERAL_LOWER_POW10` render
/// scientific.
pub const GENERAL_LOWER_POW10: i32 = -5;

/// General style: magnitudes strictly above `10^GENERAL_UPPER_POW10` render
/// scientific.
pub const GENERAL_UPPER_POW10: i32 = 16;

/// Renders `value` according to a textual format specifier.
///
/// A missing or empty specifier selects the general style. See
/// [`FormatSpec::parse`] for the specifier grammar.
///
/// # Errors
///
/// Returns [`FormatError`] when the specifier's style letter is unsupported
/// or the engine produced a digit string with non-digit bytes. Errors are
/// raised before any output is assembled; there is never a partial string.
///
/// # Examples
///
/// ```rust
/// use quill_core::locale::LocaleNumberFormat;
/// use quill_model::{raw::RawDigits, source::DecimalSource};
/// use quill_render::render::render;
/// use std::cmp::Ordering;
///
/// // A stand-in engine value for 12345.6789.
/// struct Value;
///
/// impl DecimalSource for Value {
///     fn to_raw_digits(&self) -> RawDigits {
///         RawDigits::new(false, "123456789", 5)
///     }
///     fn cmp_abs_pow10(&self, exponent: i32) -> Ordering {
///         // 10^4 < 12345.6789 < 10^5
///         if exponent <= 4 { Ordering::Greater } else { Ordering::Less }
///     }
/// }
///
/// let locale = LocaleNumberFormat::default();
/// assert_eq!(render(&Value, Some("F2"), &locale).unwrap(), "12345.67");
/// assert_eq!(render(&Value, Some("N2"), &locale).unwrap(), "12,345.67");
/// assert_eq!(render(&Value, Some("E2"), &locale).unwrap(), "1.23E+004");
/// assert_eq!(render(&Value, None, &locale).unwrap(), "12345.67");
/// ```
pub fn render<V>(
    value: &V,
    spec: Option<&str>,
    locale: &LocaleNumberFormat,
) -> Result<String, FormatError>
where
    V: DecimalSource + ?Sized,
{
    let spec = FormatSpec::parse(spec)?;
    render_with(value, spec, locale)
}

/// Renders `value` according to an already-parsed [`FormatSpec`].
pub fn render_with<V>(
    value: &V,
    spec: FormatSpec,
    locale: &LocaleNumberFormat,
) -> Result<String, FormatError>
where
    V: DecimalSource + ?Sized,
{
    let raw = value.to_raw_digits();
    let parts = DecimalParts::from_raw(&raw)?;

    match spec {
        FormatSpec::Fixed { precision } => {
            Ok(format_fixed(&parts, precision as usize, locale)?)
        }
        FormatSpec::Grouped { precision } => {
            Ok(format_grouped(&parts, precision as usize, locale)?)
        }
        FormatSpec::Scientific {
            precision,
            uppercase,
        } => {
            let exp = ExpParts::from_decimal(&parts);
            let letter = if uppercase { 'E' } else { 'e' };
            Ok(format_scientific(
                &exp,
                letter,
                SCIENTIFIC_EXPONENT_WIDTH,
                precision as usize,
                locale,
            ))
        }
        FormatSpec::General { precision } => {
            let out_of_fixed_range = value.cmp_abs_pow10(GENERAL_LOWER_POW10)
                == Ordering::Less
                || value.cmp_abs_pow10(GENERAL_UPPER_POW10) == Ordering::Greater;

            if out_of_fixed_range {
                let exp = ExpParts::from_decimal(&parts);
                let decimal_length =
                    precision.unwrap_or(FormatSpec::SCIENTIFIC_DEFAULT_PRECISION) as usize;
                Ok(format_scientific(
                    &exp,
                    'e',
                    SCIENTIFIC_EXPONENT_WIDTH,
                    decimal_length,
                    locale,
                ))
            } else {
                let decimal_length =
                    precision.unwrap_or(FormatSpec::FIXED_DEFAULT_PRECISION) as usize;
                Ok(format_fixed(&parts, decimal_length, locale)?)
            }
        }
    }
}

/// Convenience extension exposing [`render`] as a method on any
/// [`DecimalSource`].
pub trait ToFormatted: DecimalSource {
    /// Renders `self` according to a textual format specifier.
    ///
    /// # Errors
    ///
    /// See [`render`].
    fn to_formatted(
        &self,
        spec: Option<&str>,
        locale: &LocaleNumberFormat,
    ) -> Result<String, FormatError> {
        render(self, spec, locale)
    }
}

impl<T> ToFormatted for T where T: DecimalSource + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_model::raw::RawDigits;

    /// An engine stand-in: stores the raw triple and answers magnitude
    /// queries from the position of the first non-zero digit, with an exact
    /// flag for values that are themselves powers of ten.
    struct Value {
        raw: RawDigits,
    }

    impl Value {
        fn new(negative: bool, digits: &str, point: i64) -> Self {
            Self {
                raw: RawDigits::new(negative, digits, point),
            }
        }
    }

    impl DecimalSource for Value {
        fn to_raw_digits(&self) -> RawDigits {
            self.raw.clone()
        }

        fn cmp_abs_pow10(&self, exponent: i32) -> Ordering {
            let first_non_zero = self.raw.digits.bytes().position(|b| b != b'0');
            let i = match first_non_zero {
                None => return Ordering::Less, // |0| < 10^e for every e
                Some(i) => i,
            };
            let floor = self.raw.decimal_exponent - 1 - i as i64;
            match floor.cmp(&(exponent as i64)) {
                Ordering::Greater => Ordering::Greater,
                Ordering::Less => Ordering::Less,
                Ordering::Equal => {
                    let bytes = self.raw.digits.as_bytes();
                    let is_pow10 =
                        bytes[i] == b'1' && bytes[i + 1..].iter().all(|&b| b == b'0');
                    if is_pow10 {
                        Ordering::Equal
                    } else {
                        Ordering::Greater
                    }
                }
            }
        }
    }

    fn locale() -> LocaleNumberFormat {
        LocaleNumberFormat::default()
    }

    #[test]
    fn test_fixed_style_dispatch() {
        let v = Value::new(false, "123456789", 5); // 12345.6789
        assert_eq!(render(&v, Some("F2"), &locale()).unwrap(), "12345.67");
        assert_eq!(render(&v, Some("f0"), &locale()).unwrap(), "12345");
        assert_eq!(render(&v, Some("F"), &locale()).unwrap(), "12345.67");
    }

    #[test]
    fn test_grouped_style_dispatch() {
        let v = Value::new(true, "123456789", 9);
        assert_eq!(render(&v, Some("N"), &locale()).unwrap(), "-123,456,789.00");
        assert_eq!(render(&v, Some("n0"), &locale()).unwrap(), "-123,456,789");
    }

    #[test]
    fn test_scientific_style_preserves_letter_case() {
        let v = Value::new(false, "123456789", 5);
        assert_eq!(render(&v, Some("E2"), &locale()).unwrap(), "1.23E+004");
        assert_eq!(render(&v, Some("e2"), &locale()).unwrap(), "1.23e+004");
        // Truncation, not rounding: the seventh mantissa digit would round up.
        assert_eq!(render(&v, Some("E"), &locale()).unwrap(), "1.234567E+004");
    }

    #[test]
    fn test_scientific_default_precision_is_six() {
        let v = Value::new(false, "123456789", 5);
        assert_eq!(render(&v, Some("e"), &locale()).unwrap(), "1.234567e+004");
    }

    #[test]
    fn test_general_mid_range_renders_fixed() {
        let v = Value::new(false, "123456789", 5);
        assert_eq!(render(&v, None, &locale()).unwrap(), "12345.67");
        assert_eq!(render(&v, Some("G"), &locale()).unwrap(), "12345.67");
        assert_eq!(render(&v, Some("g4"), &locale()).unwrap(), "12345.6789");
    }

    #[test]
    fn test_general_small_magnitude_renders_scientific() {
        // 0.000009 < 1e-5
        let v = Value::new(false, "9", -5);
        assert_eq!(render(&v, Some("G"), &locale()).unwrap(), "9.000000e-006");
        assert_eq!(render(&v, Some("G2"), &locale()).unwrap(), "9.00e-006");
    }

    #[test]
    fn test_general_exactly_1e_minus_5_stays_fixed() {
        // The policy is strictly-less-than on the lower bound.
        let v = Value::new(false, "1", -4);
        assert_eq!(render(&v, Some("G"), &locale()).unwrap(), "0.00");
    }

    #[test]
    fn test_general_exactly_1e16_stays_fixed() {
        let v = Value::new(false, "1", 17); // 10^16
        assert_eq!(
            render(&v, Some("G0"), &locale()).unwrap(),
            "10000000000000000"
        );
    }

    #[test]
    fn test_general_just_above_1e16_renders_scientific() {
        let v = Value::new(false, "10000000000000001", 17);
        assert_eq!(
            render(&v, Some("G"), &locale()).unwrap(),
            "1.000000e+016"
        );
    }

    #[test]
    fn test_general_zero_follows_the_magnitude_policy_verbatim() {
        // |0| < 10^-5, so zero takes the scientific branch.
        let v = Value::new(false, "0", 1);
        assert_eq!(render(&v, Some("G"), &locale()).unwrap(), "0.000000e+000");
    }

    #[test]
    fn test_unsupported_style_is_rejected_with_the_supported_set() {
        let v = Value::new(false, "1", 1);
        let err = render(&v, Some("X3"), &locale()).unwrap_err();
        assert!(matches!(err, FormatError::Style(_)));
        assert!(err.to_string().contains("N, F, E and G"));
    }

    #[test]
    fn test_non_digit_engine_output_is_rejected() {
        let v = Value::new(false, "12.5", 2);
        let err = render(&v, Some("F2"), &locale()).unwrap_err();
        assert!(matches!(err, FormatError::Digits(_)));
    }

    #[test]
    fn test_to_formatted_extension_matches_render() {
        let v = Value::new(true, "5", 1);
        assert_eq!(v.to_formatted(Some("F1"), &locale()).unwrap(), "-5.0");
        assert_eq!(
            v.to_formatted(Some("F1"), &locale()),
            render(&v, Some("F1"), &locale())
        );
    }
}
