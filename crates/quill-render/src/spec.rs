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

//! # Format Specifier
//!
//! Parses textual format specifiers (`"F2"`, `"n"`, `"E4"`, `"G"`) into a
//! tagged enum the dispatcher matches on, instead of branching on characters
//! ad hoc at every use site.

use crate::error::UnsupportedStyleError;

/// A parsed format specifier: style plus precision.
///
/// `precision` is the requested number of fraction (or mantissa) digits. For
/// the general style it stays optional because the per-branch default depends
/// on which style the magnitude policy selects at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatSpec {
    /// `F` — plain fixed-point.
    Fixed {
        /// Number of fraction digits to emit.
        precision: u32,
    },
    /// `N` — fixed-point with thousands grouping.
    Grouped {
        /// Number of fraction digits to emit.
        precision: u32,
    },
    /// `E`/`e` — scientific notation; the letter's case is preserved.
    Scientific {
        /// Number of mantissa digits after the separator.
        precision: u32,
        /// Whether the exponent letter is upper-case `E`.
        uppercase: bool,
    },
    /// `G` — magnitude-dependent choice between Fixed and Scientific.
    General {
        /// Requested precision, if the specifier carried one.
        precision: Option<u32>,
    },
}

impl FormatSpec {
    /// Default fraction digits for the fixed style.
    pub const FIXED_DEFAULT_PRECISION: u32 = 2;
    /// Default fraction digits for the grouped style.
    pub const GROUPED_DEFAULT_PRECISION: u32 = 2;
    /// Default mantissa digits for the scientific style.
    pub const SCIENTIFIC_DEFAULT_PRECISION: u32 = 6;

    /// Parses a format specifier.
    ///
    /// The first character is the case-insensitive style letter; any
    /// remaining characters are read as a non-negative integer precision. A
    /// remainder that fails to parse falls back to the style's default
    /// precision. A missing or empty specifier selects the general style with
    /// unspecified precision.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedStyleError`] for style letters outside
    /// `{N, F, E, G}`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quill_render::spec::FormatSpec;
    ///
    /// assert_eq!(FormatSpec::parse(Some("F4")).unwrap(), FormatSpec::Fixed { precision: 4 });
    /// assert_eq!(FormatSpec::parse(Some("f")).unwrap(), FormatSpec::Fixed { precision: 2 });
    /// assert_eq!(
    ///     FormatSpec::parse(Some("e3")).unwrap(),
    ///     FormatSpec::Scientific { precision: 3, uppercase: false }
    /// );
    /// assert_eq!(FormatSpec::parse(None).unwrap(), FormatSpec::General { precision: None });
    /// assert!(FormatSpec::parse(Some("Q2")).is_err());
    /// ```
    pub fn parse(spec: Option<&str>) -> Result<Self, UnsupportedStyleError> {
        let mut chars = spec.unwrap_or("").chars();
        let letter = match chars.next() {
            None => return Ok(Self::General { precision: None }),
            Some(c) => c,
        };

        let rest = chars.as_str();
        let precision = if rest.is_empty() {
            None
        } else {
            rest.parse::<u32>().ok()
        };

        match letter.to_ascii_lowercase() {
            'f' => Ok(Self::Fixed {
                precision: precision.unwrap_or(Self::FIXED_DEFAULT_PRECISION),
            }),
            'n' => Ok(Self::Grouped {
                precision: precision.unwrap_or(Self::GROUPED_DEFAULT_PRECISION),
            }),
            'e' => Ok(Self::Scientific {
                precision: precision.unwrap_or(Self::SCIENTIFIC_DEFAULT_PRECISION),
                uppercase: letter == 'E',
            }),
            'g' => Ok(Self::General { precision }),
            _ => Err(UnsupportedStyleError { letter }),
        }
    }
}

impl Default for FormatSpec {
    /// The style selected by a missing specifier.
    #[inline]
    fn default() -> Self {
        Self::General { precision: None }
    }
}
