//! Split decimal representation of hash values.
//!
//! Some consumers carry ring positions as decimal text split into a sign, a
//! high part, and the last eight digits, so that every part fits a double.
//! [`SplitDecimal`] reproduces that form and its comparator.

use std::cmp::Ordering;
use std::fmt;

use crate::value::HashValue;

/// Decimal text at least this long, minus sign included, is split.
const SPLIT_MIN_LEN: u32 = 10;
/// Width of the low part, in decimal digits.
const LOW_DIGITS: u32 = 8;
const LOW_MODULUS: u64 = 10u64.pow(LOW_DIGITS);

/// A signed value as `(is_positive, high, low)`.
///
/// `high` and `low` are magnitudes; the sign lives only in `is_positive`.
/// When the signed decimal text is 10 or more characters long, `low` is the
/// last 8 digits of the magnitude and `high` the rest. The minus sign
/// counts toward that length, so `-123456789` splits into `(1, 23456789)`
/// while `123456789` stays whole. Shorter values have `high == 0` and `low`
/// equal to the whole magnitude. Zero is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitDecimal {
    is_positive: bool,
    high: u64,
    low: u64,
}

impl SplitDecimal {
    /// Whether the value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.is_positive
    }

    /// Magnitude without its last 8 digits (0 for short magnitudes).
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Last 8 digits of the magnitude, or the whole of a short magnitude.
    pub fn low(&self) -> u64 {
        self.low
    }

    /// Reassemble the signed value.
    pub fn to_hash_value(&self) -> HashValue {
        let magnitude = self.high * LOW_MODULUS + self.low;
        // 2^63 wraps to i64::MIN and stays there under negation.
        let value = magnitude as i64;
        HashValue::from(if self.is_positive {
            value
        } else {
            value.wrapping_neg()
        })
    }
}

impl From<HashValue> for SplitDecimal {
    fn from(value: HashValue) -> Self {
        let signed = value.as_i64();
        let magnitude = signed.unsigned_abs();
        let digits = magnitude.checked_ilog10().map_or(1, |d| d + 1);
        let len = digits + u32::from(signed < 0);
        let (high, low) = if len >= SPLIT_MIN_LEN {
            (magnitude / LOW_MODULUS, magnitude % LOW_MODULUS)
        } else {
            (0, magnitude)
        };
        Self {
            is_positive: signed > 0,
            high,
            low,
        }
    }
}

impl Ord for SplitDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_positive, other.is_positive) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (positive, _) => {
                let by_magnitude = self
                    .high
                    .cmp(&other.high)
                    .then_with(|| self.low.cmp(&other.low));
                if positive {
                    by_magnitude
                } else {
                    by_magnitude.reverse()
                }
            }
        }
    }
}

impl PartialOrd for SplitDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SplitDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if !self.is_positive && (self.high, self.low) != (0, 0) {
            "-"
        } else {
            ""
        };
        if self.high > 0 {
            write!(f, "{sign}{}{:08}", self.high, self.low)
        } else {
            write!(f, "{sign}{}", self.low)
        }
    }
}
