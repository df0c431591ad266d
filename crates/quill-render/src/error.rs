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

//! # Rendering Errors
//!
//! All errors here are local input-validation failures: a malformed format
//! specifier or malformed parts handed to a renderer. None are retried, none
//! are recoverable mid-call, and none leave partially-constructed output —
//! validation happens before any string is built.

use quill_model::parts::NonDigitError;
use std::fmt::Display;

/// Details about decimal parts a renderer refused to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedPartsError {
    /// What was wrong with the parts.
    pub detail: &'static str,
}

impl Display for MalformedPartsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Malformed decimal parts: {}", self.detail)
    }
}

impl std::error::Error for MalformedPartsError {}

/// Details about a format specifier whose style letter is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedStyleError {
    /// The style letter that was rejected.
    pub letter: char,
}

impl Display for UnsupportedStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unsupported format style '{}'; supported styles are N, F, E and G",
            self.letter
        )
    }
}

impl std::error::Error for UnsupportedStyleError {}

/// The error type of the format dispatch entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The raw digit string contained a non-digit byte.
    Digits(NonDigitError),
    /// A renderer was handed malformed decimal parts.
    Parts(MalformedPartsError),
    /// The format specifier used an unsupported style letter.
    Style(UnsupportedStyleError),
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Digits(e) => write!(f, "Digit error: {}", e),
            Self::Parts(e) => write!(f, "Parts error: {}", e),
            Self::Style(e) => write!(f, "Style error: {}", e),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<NonDigitError> for FormatError {
    fn from(e: NonDigitError) -> Self {
        Self::Digits(e)
    }
}

impl From<MalformedPartsError> for FormatError {
    fn from(e: MalformedPartsError) -> Self {
        Self::Parts(e)
    }
}

impl From<UnsupportedStyleError> for FormatError {
    fn from(e: UnsupportedStyleError) -> Self {
        Self::Style(e)
    }
}
