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

//! # Fixed and Grouped Renderers
//!
//! Render [`DecimalParts`] as plain fixed-point text, optionally with
//! thousands grouping on the integer digits.
//!
//! ## Truncation contract
//!
//! When the available fraction digits exceed `decimal_length`, the excess is
//! **truncated** — discarded without adjusting the preceding digit. This
//! deviates from conventional rounding-based formatting on purpose: it
//! reproduces the behavior of the system this engine models and is part of
//! the public contract. When fewer digits are available, the fraction is
//! right-padded with zeros to exactly `decimal_length`.

use crate::error::MalformedPartsError;
use quill_core::{digits, locale::LocaleNumberFormat};
use quill_model::parts::DecimalParts;

/// Rejects parts whose integer component cannot be rendered.
///
/// The integer part must contain at least one non-whitespace character; a
/// canonical splitter output always does (`"0"` at minimum), so a failure
/// here points at hand-built parts.
fn validate(parts: &DecimalParts) -> Result<(), MalformedPartsError> {
    if parts.integer_part.trim().is_empty() {
        return Err(MalformedPartsError {
            detail: "integer part is empty or whitespace-only",
        });
    }
    Ok(())
}

/// Appends the decimal separator and fitted fraction digits.
///
/// A `decimal_length` of zero emits nothing at all, silently discarding any
/// fractional information the parts carried.
fn push_fraction(
    out: &mut String,
    fraction: &str,
    decimal_length: usize,
    locale: &LocaleNumberFormat,
) {
    if decimal_length == 0 {
        return;
    }
    out.push(locale.decimal_separator());
    out.push_str(&digits::fit_to_length(fraction, decimal_length));
}

/// Renders `parts` in the fixed-point style.
///
/// Output is `sign? + integer + (separator + fraction)` where the fraction
/// digits are fitted to exactly `decimal_length` characters (truncated, never
/// rounded, or zero-padded) and omitted entirely — separator included — when
/// `decimal_length` is zero.
///
/// # Errors
///
/// Returns [`MalformedPartsError`] if the integer part is empty or
/// whitespace-only.
///
/// # Examples
///
/// ```rust
/// use quill_core::locale::LocaleNumberFormat;
/// use quill_model::parts::DecimalParts;
/// use quill_render::fixed::format_fixed;
///
/// let locale = LocaleNumberFormat::default();
///
/// let parts = DecimalParts::new(true, "123", "");
/// assert_eq!(format_fixed(&parts, 2, &locale).unwrap(), "-123.00");
///
/// let parts = DecimalParts::new(false, "12345", "6789");
/// assert_eq!(format_fixed(&parts, 2, &locale).unwrap(), "12345.67"); // truncated
/// assert_eq!(format_fixed(&parts, 0, &locale).unwrap(), "12345");
/// ```
pub fn format_fixed(
    parts: &DecimalParts,
    decimal_length: usize,
    locale: &LocaleNumberFormat,
) -> Result<String, MalformedPartsError> {
    validate(parts)?;

    let mut out =
        String::with_capacity(parts.integer_part.len() + decimal_length + 2);
    if parts.negative {
        out.push('-');
    }
    out.push_str(&parts.integer_part);
    push_fraction(&mut out, &parts.fraction_part, decimal_length, locale);

    Ok(out)
}

/// Renders `parts` in the grouped number style.
///
/// Identical to [`format_fixed`] except the integer digits are partitioned
/// into groups of [`LocaleNumberFormat::GROUP_SIZE`] from the
/// least-significant end and joined with the locale's group separator.
/// Grouping never applies to fraction digits.
///
/// # Errors
///
/// Returns [`MalformedPartsError`] if the integer part is empty or
/// whitespace-only.
///
/// # Examples
///
/// ```rust
/// use quill_core::locale::LocaleNumberFormat;
/// use quill_model::parts::DecimalParts;
/// use quill_render::fixed::format_grouped;
///
/// let locale = LocaleNumberFormat::default();
/// let parts = DecimalParts::new(false, "123456789", "9876543210");
/// assert_eq!(format_grouped(&parts, 4, &locale).unwrap(), "123,456,789.9876");
/// ```
pub fn format_grouped(
    parts: &DecimalParts,
    decimal_length: usize,
    locale: &LocaleNumberFormat,
) -> Result<String, MalformedPartsError> {
    validate(parts)?;

    let grouped = digits::group_from_right(
        &parts.integer_part,
        locale.group_separator(),
        LocaleNumberFormat::GROUP_SIZE,
    );

    let mut out = String::with_capacity(grouped.len() + decimal_length + 2);
    if parts.negative {
        out.push('-');
    }
    out.push_str(&grouped);
    push_fraction(&mut out, &parts.fraction_part, decimal_length, locale);

    Ok(out)
}
