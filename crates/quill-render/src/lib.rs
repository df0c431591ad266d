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

//! # Quill Render
//!
//! **Style renderers and format-specifier dispatch for decimal digit
//! strings.**
//!
//! This crate turns the canonical value types from `quill_model` into
//! human-facing numeric strings in four conventional styles: Fixed (`F`),
//! grouped Number (`N`), Exponential/Scientific (`E`), and General (`G`).
//!
//! ## Architecture
//!
//! * **`fixed`**: the Fixed and Grouped renderers over `DecimalParts`.
//! * **`scientific`**: the Scientific renderer over `ExpParts`.
//! * **`spec`**: `FormatSpec` — the parsed form of a format specifier such as
//!   `"F2"`, `"n"`, `"E4"`, or `"G"`.
//! * **`render`**: the dispatcher wiring a `DecimalSource` value through the
//!   splitter, the exponentiator, and the style renderer the specifier
//!   selects, including the magnitude-based Fixed/Scientific policy of the
//!   general style.
//! * **`error`**: the aggregated error type of the dispatch entry point.
//!
//! ## Truncation contract
//!
//! Every renderer **truncates** excess fraction or mantissa digits; none of
//! them rounds. `"F2"` of 12345.6789 yields `"12345.67"`, not `"12345.68"`.
//! This mirrors the behavior of the system this engine reproduces and is a
//! documented contract, not an oversight; see the individual renderers.

pub mod error;
pub mod fixed;
pub mod render;
pub mod scientific;
pub mod spec;
