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

//! # Scientific Renderer
//!
//! Renders [`ExpParts`] in exponential notation. The mantissa digits follow
//! the same truncate-or-zero-pad rule as the fixed renderer's fraction
//! digits; the exponent sign is always explicit and the exponent digits are
//! zero-padded to a minimum width.

use quill_core::{digits, locale::LocaleNumberFormat};
use quill_model::exp::ExpParts;

/// Renders `parts` in scientific notation.
///
/// Output is `sign? + lead + (separator + mantissa) + letter + exponent-sign
/// + exponent`, where:
///
/// * the mantissa digits are `parts.mantissa_tail` fitted to exactly
///   `decimal_length` characters (truncated, never rounded, or zero-padded),
///   and omitted together with the separator when `decimal_length` is zero;
/// * the exponent sign is always `'+'` or `'-'`, never elided;
/// * the exponent magnitude is left-padded with `'0'` to at least
///   `exponent_width` digits and never truncated when wider.
///
/// # Examples
///
/// ```rust
/// use quill_core::locale::LocaleNumberFormat;
/// use quill_model::exp::ExpParts;
/// use quill_render::scientific::format_scientific;
///
/// let locale = LocaleNumberFormat::default();
/// let parts = ExpParts {
///     negative: false,
///     lead_digit: '1',
///     mantissa_tail: "23456".to_owned(),
///     exponent: 2,
/// };
/// assert_eq!(format_scientific(&parts, 'E', 3, 3, &locale), "1.234E+002");
/// assert_eq!(format_scientific(&parts, 'e', 3, 0, &locale), "1e+002");
/// ```
pub fn format_scientific(
    parts: &ExpParts,
    exponent_letter: char,
    exponent_width: usize,
    decimal_length: usize,
    locale: &LocaleNumberFormat,
) -> String {
    let mut out =
        String::with_capacity(decimal_length + exponent_width + 8);

    if parts.negative {
        out.push('-');
    }
    out.push(parts.lead_digit);

    if decimal_length > 0 {
        out.push(locale.decimal_separator());
        out.push_str(&digits::fit_to_length(&parts.mantissa_tail, decimal_length));
    }

    out.push(exponent_letter);
    out.push(if parts.exponent < 0 { '-' } else { '+' });

    let magnitude = parts.exponent.unsigned_abs().to_string();
    for _ in magnitude.len()..exponent_width {
        out.push('0');
    }
    out.push_str(&magnitude);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_model::parts::DecimalParts;

    fn locale() -> LocaleNumberFormat {
        LocaleNumberFormat::default()
    }

    fn exp(negative: bool, lead: char, tail: &str, exponent: i64) -> ExpParts {
        ExpParts {
            negative,
            lead_digit: lead,
            mantissa_tail: tail.to_owned(),
            exponent,
        }
    }

    #[test]
    fn test_truncates_mantissa_and_pads_exponent() {
        let parts = exp(false, '1', "23456", 2);
        assert_eq!(format_scientific(&parts, 'E', 3, 3, &locale()), "1.234E+002");
    }

    #[test]
    fn test_pads_short_mantissa_with_zeros() {
        let parts = exp(false, '5', "4", 0);
        assert_eq!(format_scientific(&parts, 'e', 3, 4, &locale()), "5.4000e+000");
    }

    #[test]
    fn test_exponent_sign_is_always_explicit() {
        let positive = exp(false, '2', "", 7);
        assert_eq!(format_scientific(&positive, 'e', 3, 0, &locale()), "2e+007");

        let negative_exp = exp(false, '2', "", -7);
        assert_eq!(format_scientific(&negative_exp, 'e', 3, 0, &locale()), "2e-007");

        let zero_exp = exp(false, '2', "", 0);
        assert_eq!(format_scientific(&zero_exp, 'e', 3, 0, &locale()), "2e+000");
    }

    #[test]
    fn test_wide_exponents_are_never_truncated() {
        let parts = exp(false, '9', "", 123456);
        assert_eq!(format_scientific(&parts, 'e', 3, 0, &locale()), "9e+123456");
    }

    #[test]
    fn test_zero_decimal_length_omits_separator_and_mantissa() {
        let parts = exp(true, '3', "141592", 1);
        assert_eq!(format_scientific(&parts, 'E', 3, 0, &locale()), "-3E+001");
    }

    #[test]
    fn test_negative_value_carries_leading_minus() {
        let parts = exp(true, '1', "5", -4);
        assert_eq!(format_scientific(&parts, 'e', 3, 2, &locale()), "-1.50e-004");
    }

    #[test]
    fn test_zero_value_renders_with_zero_exponent() {
        let zero = ExpParts::from_decimal(&DecimalParts::new(false, "0", ""));
        assert_eq!(format_scientific(&zero, 'e', 3, 6, &locale()), "0.000000e+000");
    }

    #[test]
    fn test_uses_locale_decimal_separator() {
        let de = LocaleNumberFormat::new(',', '.');
        let parts = exp(false, '1', "25", 0);
        assert_eq!(format_scientific(&parts, 'E', 3, 2, &de), "1,25E+000");
    }
}
