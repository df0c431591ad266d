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

//! # Quill Core
//!
//! Foundational primitives for the Quill decimal formatting ecosystem. This
//! crate consolidates the small, reusable building blocks that higher-level
//! model and renderer crates are written against.
//!
//! ## Modules
//!
//! - `digits`: Pure functions over ASCII digit strings — zero trimming,
//!   truncate-or-pad fitting, and least-significant-first grouping. These
//!   operate on strings of unbounded length; nothing here ever goes through
//!   native floating-point formatting.
//! - `locale`: The `LocaleNumberFormat` value type carrying the decimal and
//!   group separators. Every rendering call takes it as an explicit
//!   parameter; there is no process-wide default.
//!
//! ## Purpose
//!
//! Arbitrary-precision values may carry thousands of significant digits, so
//! all text manipulation is expressed over digit strings directly. Keeping
//! these helpers in one place lets the renderers stay focused on style
//! semantics rather than string mechanics.
//!
//! Refer to each module for detailed APIs and examples.

pub mod digits;
pub mod locale;
