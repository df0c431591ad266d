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

//! # Quill Model
//!
//! **The immutable decimal data model of the Quill formatting engine.**
//!
//! This crate defines the value types that flow from a bignum engine's raw
//! textual output to the style renderers, plus the narrow trait through which
//! the engine itself is consumed.
//!
//! ## Architecture
//!
//! The pipeline is a chain of pure, single-direction transforms:
//!
//! * **`raw`**: `RawDigits` — the input contract: an unsigned digit string, a
//!   decimal exponent, and a sign flag, exactly as a bignum-to-string
//!   conversion produces them.
//! * **`parts`**: `DecimalParts` — the splitter's canonical form: sign,
//!   integer digits (no redundant leading zeros), fraction digits (no
//!   trailing zeros).
//! * **`exp`**: `ExpParts` — the exponentiator's renormalization for
//!   scientific display: a single lead mantissa digit, the mantissa tail, and
//!   a power-of-ten exponent.
//! * **`source`**: the `DecimalSource` trait abstracting the external
//!   arbitrary-precision engine. Arithmetic stays on the other side of this
//!   boundary; only textual rendering and magnitude comparison cross it.
//!
//! ## Design Philosophy
//!
//! 1.  **Immutability**: every type is derived once and never mutated; no
//!     entity outlives a single formatting call.
//! 2.  **Fail-Fast**: the splitter validates digit purity eagerly so the
//!     renderers can index bytes without re-checking.
//! 3.  **No rounding anywhere**: all transforms preserve every source digit;
//!     truncation decisions belong to the renderers.

pub mod exp;
pub mod parts;
pub mod raw;
pub mod source;
