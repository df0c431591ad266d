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

//! # Scaled Decimal Values
//!
//! A `BigInt` paired with a power-of-ten exponent, adapted to the
//! `DecimalSource` contract.
//!
//! ## Motivation
//!
//! The formatting engine needs two things from a value: its base-10 digits
//! with a decimal-point position, and an exact magnitude comparison against
//! powers of ten. Both fall out naturally from the `unscaled × 10^exponent`
//! representation without implementing any decimal arithmetic: the digits
//! are the unscaled magnitude's digits, the point position follows from the
//! digit count plus the exponent, and a magnitude comparison reduces to a
//! digit-count comparison with an exact `BigUint` comparison at ties.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use quill_core::locale::LocaleNumberFormat;
use quill_model::{raw::RawDigits, source::DecimalSource};
use quill_render::render::render;
use std::cmp::Ordering;
use std::fmt;

/// An arbitrary-precision decimal value `unscaled × 10^exponent`.
///
/// The representation is not normalized: `ScaledDecimal::new(BigInt::from(10), 0)`
/// and `ScaledDecimal::new(BigInt::from(1), 1)` denote the same number. The
/// formatting pipeline canonicalizes digits itself, so normalization here
/// would be redundant work.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use quill_bigint::scaled::ScaledDecimal;
///
/// let half_cent = ScaledDecimal::new(BigInt::from(5), -3); // 0.005
/// assert_eq!(half_cent.exponent(), -3);
/// assert_eq!(half_cent.to_string(), "0.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaledDecimal {
    unscaled: BigInt,
    exponent: i64,
}

impl ScaledDecimal {
    /// Creates the value `unscaled × 10^exponent`.
    #[inline]
    pub fn new(unscaled: BigInt, exponent: i64) -> Self {
        Self { unscaled, exponent }
    }

    /// The unscaled integer component.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The power-of-ten exponent applied to the unscaled component.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Whether the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// The number of decimal digits of the unscaled magnitude.
    fn digit_count(magnitude: &BigUint) -> usize {
        magnitude.to_str_radix(10).len()
    }
}

impl DecimalSource for ScaledDecimal {
    fn to_raw_digits(&self) -> RawDigits {
        let digits = self.unscaled.magnitude().to_str_radix(10);
        let decimal_exponent = digits.len() as i64 + self.exponent;
        RawDigits::new(self.unscaled.is_negative(), digits, decimal_exponent)
    }

    fn cmp_abs_pow10(&self, exponent: i32) -> Ordering {
        if self.unscaled.is_zero() {
            // |0| is below every power of ten.
            return Ordering::Less;
        }

        let magnitude = self.unscaled.magnitude();
        let digit_count = Self::digit_count(magnitude);

        // With d digits, 10^(d-1) <= |unscaled| < 10^d, so the value sits in
        // [10^floor, 10^(floor+1)) for floor = d - 1 + exponent.
        let floor = digit_count as i64 - 1 + self.exponent;
        match floor.cmp(&(exponent as i64)) {
            Ordering::Greater => Ordering::Greater,
            Ordering::Less => Ordering::Less,
            // The tie is decided exactly: equal only when the unscaled
            // magnitude is itself the power of ten.
            Ordering::Equal => {
                let threshold = BigUint::from(10u32).pow((digit_count - 1) as u32);
                magnitude.cmp(&threshold)
            }
        }
    }
}

impl From<BigInt> for ScaledDecimal {
    /// Adapts an integer as-is (exponent 0).
    #[inline]
    fn from(unscaled: BigInt) -> Self {
        Self::new(unscaled, 0)
    }
}

impl From<i64> for ScaledDecimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<u64> for ScaledDecimal {
    #[inline]
    fn from(value: u64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl fmt::Display for ScaledDecimal {
    /// Renders with the general style and the `'.'`/`','` locale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered =
            render(self, None, &LocaleNumberFormat::default()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
