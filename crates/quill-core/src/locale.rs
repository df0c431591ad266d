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

//! # Locale Number Format
//!
//! The separator set threaded through every rendering call. Formatting is
//! never bound to ambient process or thread state: callers pass a
//! `LocaleNumberFormat` explicitly, so two threads can render with different
//! conventions concurrently and results stay reproducible.

/// Locale-dependent separators for rendering decimal numbers.
///
/// Carries the decimal separator (between integer and fraction digits) and
/// the group separator (between thousands groups of the integer part). The
/// group size itself is fixed at [`LocaleNumberFormat::GROUP_SIZE`].
///
/// # Examples
///
/// ```rust
/// use quill_core::locale::LocaleNumberFormat;
///
/// let en = LocaleNumberFormat::default();
/// assert_eq!(en.decimal_separator(), '.');
/// assert_eq!(en.group_separator(), ',');
///
/// let de = LocaleNumberFormat::new(',', '.');
/// assert_eq!(de.decimal_separator(), ',');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleNumberFormat {
    decimal_separator: char,
    group_separator: char,
}

impl LocaleNumberFormat {
    /// The number of integer digits per thousands group.
    pub const GROUP_SIZE: usize = 3;

    /// Creates a `LocaleNumberFormat` with the given separators.
    #[inline]
    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }

    /// The separator emitted between integer and fraction digits.
    #[inline]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The separator emitted between thousands groups of the integer part.
    #[inline]
    pub const fn group_separator(&self) -> char {
        self.group_separator
    }
}

impl Default for LocaleNumberFormat {
    /// The `'.'`/`','` convention (decimal point, comma grouping).
    #[inline]
    fn default() -> Self {
        Self::new('.', ',')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_point_and_comma() {
        let fmt = LocaleNumberFormat::default();
        assert_eq!(fmt.decimal_separator(), '.');
        assert_eq!(fmt.group_separator(), ',');
    }

    #[test]
    fn test_new_stores_custom_separators() {
        let fmt = LocaleNumberFormat::new(',', '\u{00a0}');
        assert_eq!(fmt.decimal_separator(), ',');
        assert_eq!(fmt.group_separator(), '\u{00a0}');
    }
}
