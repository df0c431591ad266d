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

//! # Quill BigInt
//!
//! **The `num-bigint` adapter for the Quill formatting engine.**
//!
//! The renderer crates consume opaque values through the `DecimalSource`
//! trait; this crate supplies the concrete implementation on top of
//! `num-bigint`. A [`scaled::ScaledDecimal`] pairs an arbitrary-precision
//! integer with a power-of-ten exponent, which is exactly the shape the
//! formatting pipeline needs: integers, and integers shifted into fractional
//! magnitudes, without this workspace growing any arithmetic of its own.
//!
//! ## Usage
//!
//! ```rust
//! use num_bigint::BigInt;
//! use quill_bigint::scaled::ScaledDecimal;
//! use quill_core::locale::LocaleNumberFormat;
//! use quill_render::render::ToFormatted;
//!
//! let locale = LocaleNumberFormat::default();
//!
//! let value = ScaledDecimal::from(BigInt::from(123456789));
//! assert_eq!(value.to_formatted(Some("N2"), &locale).unwrap(), "123,456,789.00");
//!
//! // -12.345 as an unscaled integer shifted by 10^-3.
//! let shifted = ScaledDecimal::new(BigInt::from(-12345), -3);
//! assert_eq!(shifted.to_formatted(Some("F2"), &locale).unwrap(), "-12.34");
//! ```

pub mod scaled;
