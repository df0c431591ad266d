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

//! # Decimal Source Trait
//!
//! The narrow contract through which the formatting engine consumes an
//! external arbitrary-precision value.
//!
//! ## Motivation
//!
//! Arbitrary-precision arithmetic is deliberately outside this workspace;
//! values stay opaque and only two capabilities cross the boundary: a base-10
//! textual rendering and an exact magnitude comparison against a power of
//! ten. The comparison exists solely for the general style's Fixed-vs-
//! Scientific policy, whose threshold sits exactly at 10^16 — a derived
//! exponent cannot distinguish 10^16 from 10^16 + 1, so the decision is
//! delegated to the engine, which can compare exactly.

use crate::raw::RawDigits;
use std::cmp::Ordering;

/// An opaque numeric value that can be rendered by the formatting engine.
///
/// Implementations adapt a concrete bignum representation. Both methods are
/// pure; the engine calls them at most once per formatting request and never
/// retains the results across calls.
pub trait DecimalSource {
    /// Renders the value as an unsigned base-10 digit string, a decimal
    /// exponent, and a sign flag.
    ///
    /// The digit string may carry incidental leading or trailing zeros; the
    /// splitter normalizes them away.
    fn to_raw_digits(&self) -> RawDigits;

    /// Compares the absolute value against `10^exponent`.
    ///
    /// Must be exact: `Ordering::Equal` when the magnitudes coincide, never
    /// an approximation derived from formatted digits.
    fn cmp_abs_pow10(&self, exponent: i32) -> Ordering;
}
