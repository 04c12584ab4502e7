//! Hashing for shardring.
//!
//! Identifiers and virtual-node keys are hashed with MurmurHash64A under a
//! fixed seed, and the 64 raw bits are read as a two's-complement signed
//! integer. That is the value a Java `long` holds for the same hash, which
//! keeps shard placement identical across runtimes.
//!
//! - [`murmur64a`] — the raw 64-bit hash primitive.
//! - [`HashValue`] — the signed value, ordered numerically.
//! - [`SplitDecimal`] — the `(sign, high, low)` decimal form with its own
//!   comparator, kept for output compatibility.

mod error;
mod murmur;
mod split;
mod value;

pub use error::HashError;
pub use murmur::{HASH_SEED, murmur64a};
pub use split::SplitDecimal;
pub use value::HashValue;
