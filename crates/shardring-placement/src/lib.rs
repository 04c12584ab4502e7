//! Consistent hashing ring for deterministic shard routing.
//!
//! This crate maps arbitrary identifiers (session ids, cache keys) to one of
//! a fixed set of weighted shards. Each shard gets `160 * weight` virtual
//! nodes on a ring of signed 64-bit positions, placed at
//! `murmur64a("{name}*{weight}{n}")`, or `murmur64a("SHARD-{i}-NODE-{n}")`
//! for unnamed shards. An identifier belongs to the shard owning the first
//! virtual node at or after its own hash, wrapping around past the end.
//!
//! - [`Ring`] — the immutable ring, built once from a shard list.
//! - [`ShardRouter`] — a write-once holder that publishes a ring to
//!   concurrent readers, suitable for a `static`.

mod error;
mod ring;
mod router;

pub use error::RingError;
pub use ring::{MAX_VNODES, Reassignment, Ring, VNODES_PER_WEIGHT, VirtualNode, vnode_key};
pub use router::ShardRouter;
