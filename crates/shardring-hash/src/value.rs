//! Signed 64-bit hash values.

use std::fmt;
use std::str::FromStr;

use crate::error::HashError;
use crate::murmur::{HASH_SEED, murmur64a};
use crate::split::SplitDecimal;

/// A hash reinterpreted as a Java `long`.
///
/// The raw MurmurHash64A bits are read as a two's-complement signed integer:
/// a raw hash whose top nibble is `8`..=`f` is negative. Ordering is plain
/// signed numeric ordering, which is the order ring positions are sorted and
/// searched in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashValue(i64);

impl HashValue {
    /// Hash `input` (as UTF-8) with the fixed seed.
    pub fn of(input: &str) -> Self {
        Self::from_raw(murmur64a(input.as_bytes(), u64::from(HASH_SEED)))
    }

    /// Reinterpret a raw 64-bit hash as a signed value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw as i64)
    }

    /// Parse the raw hash in hexadecimal (1 to 16 digits, either case).
    ///
    /// Shorter inputs are zero-extended on the left, so `"2edc3f3edb5c097"`
    /// is the non-negative value `0x02edc3f3edb5c097`.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        if hex.is_empty() || hex.len() > 16 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HashError::InvalidHex(hex.to_string()));
        }
        u64::from_str_radix(hex, 16)
            .map(Self::from_raw)
            .map_err(|_| HashError::InvalidHex(hex.to_string()))
    }

    /// The signed value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// The raw 64-bit pattern.
    pub fn to_raw(&self) -> u64 {
        self.0 as u64
    }

    /// The raw hash as 16 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("{:016x}", self.to_raw())
    }

    /// Whether the value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// The `(sign, high, low)` decimal split of this value.
    pub fn split(&self) -> SplitDecimal {
        SplitDecimal::from(*self)
    }
}

impl From<i64> for HashValue {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<HashValue> for i64 {
    fn from(value: HashValue) -> Self {
        value.0
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({})", self.0)
    }
}

impl FromStr for HashValue {
    type Err = HashError;

    /// Parse the signed decimal text produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| HashError::InvalidDecimal(s.to_string()))
    }
}
