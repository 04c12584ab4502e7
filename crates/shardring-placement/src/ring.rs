//! Consistent hashing ring implementation.

use std::collections::HashMap;

use shardring_hash::HashValue;
use shardring_types::ShardSpec;
use tracing::{debug, info};

use crate::error::RingError;

/// Virtual nodes placed per unit of shard weight.
pub const VNODES_PER_WEIGHT: u32 = 160;

/// Upper bound on the virtual nodes of one ring, summed over all shards.
///
/// A single shard may not exceed it either, which caps weights at
/// `MAX_VNODES / VNODES_PER_WEIGHT`.
pub const MAX_VNODES: usize = 1 << 24;

/// One of a shard's positions on the ring.
///
/// Nodes are ordered by hash, then shard index, then sequence number, so
/// that exact hash collisions still sort deterministically. A lookup that
/// lands on a collided position resolves to the lowest shard index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtualNode {
    /// Ring position.
    pub hash: HashValue,
    /// Index of the owning shard in the ring's shard list.
    pub shard_index: usize,
    /// Which of the shard's virtual nodes this is (`0..160 * weight`).
    pub sequence: u32,
}

/// An identifier whose owning shard differs between two rings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    /// The identifier that moves.
    pub identifier: String,
    /// Owning shard index in the old ring.
    pub from: usize,
    /// Owning shard index in the new ring.
    pub to: usize,
}

/// Consistent hashing ring over a fixed list of weighted shards.
///
/// Built once by [`Ring::build`] and immutable afterwards, so it can be
/// shared freely between threads. Lookups return the caller's own shard
/// records by reference.
#[derive(Debug, Clone)]
pub struct Ring<S> {
    /// Shards in configuration order; virtual nodes refer to them by index.
    shards: Vec<S>,
    /// Virtual nodes sorted ascending. Never empty.
    vnodes: Vec<VirtualNode>,
}

impl<S: ShardSpec> Ring<S> {
    /// Build a ring from a shard list.
    ///
    /// Every shard needs a positive weight and named shards need distinct
    /// names. On error nothing is built.
    pub fn build(shards: Vec<S>) -> Result<Self, RingError> {
        let total = validate(&shards)?;

        let mut vnodes = Vec::with_capacity(total);
        for (index, shard) in shards.iter().enumerate() {
            let weight = shard.weight();
            let name = shard.name();
            for sequence in 0..VNODES_PER_WEIGHT * weight {
                let key = vnode_key(name, index, weight, sequence);
                vnodes.push(VirtualNode {
                    hash: HashValue::of(&key),
                    shard_index: index,
                    sequence,
                });
            }
            debug!(
                index,
                name = name.unwrap_or_default(),
                weight,
                "placed shard on ring"
            );
        }
        vnodes.sort_unstable();

        info!(shards = shards.len(), vnodes = vnodes.len(), "built shard ring");
        Ok(Self { shards, vnodes })
    }

    /// The first virtual node at or after `key`, wrapping to the lowest node.
    ///
    /// A node whose hash equals `key` is its own successor; otherwise this is
    /// the leftmost node with a strictly greater hash.
    pub fn successor(&self, key: HashValue) -> &VirtualNode {
        let idx = self.vnodes.partition_point(|node| node.hash < key);
        self.vnodes.get(idx).unwrap_or_else(|| &self.vnodes[0])
    }

    /// Index of the shard that owns `identifier`.
    pub fn shard_index_for(&self, identifier: &str) -> usize {
        self.successor(HashValue::of(identifier)).shard_index
    }

    /// The shard record that owns `identifier`.
    pub fn shard_for(&self, identifier: &str) -> &S {
        &self.shards[self.shard_index_for(identifier)]
    }

    /// Count how many of `identifiers` land on each shard, by shard index.
    pub fn distribution<I: AsRef<str>>(&self, identifiers: &[I]) -> Vec<usize> {
        let mut counts = vec![0usize; self.shards.len()];
        for identifier in identifiers {
            counts[self.shard_index_for(identifier.as_ref())] += 1;
        }
        counts
    }

    /// List the identifiers whose owner changes from `old` to `new`.
    ///
    /// Named shards are matched by name and unnamed shards by position, so
    /// reordering named shards in the configuration does not count as a move.
    pub fn diff<I: AsRef<str>>(
        old: &Ring<S>,
        new: &Ring<S>,
        identifiers: &[I],
    ) -> Vec<Reassignment> {
        let mut reassignments = Vec::new();

        for identifier in identifiers {
            let identifier = identifier.as_ref();
            let from = old.shard_index_for(identifier);
            let to = new.shard_index_for(identifier);

            if !same_shard(&old.shards[from], from, &new.shards[to], to) {
                reassignments.push(Reassignment {
                    identifier: identifier.to_string(),
                    from,
                    to,
                });
            }
        }

        reassignments
    }
}

impl<S> Ring<S> {
    /// All shards, in configuration order.
    pub fn shards(&self) -> &[S] {
        &self.shards
    }

    /// The shard at `index`, if any.
    pub fn shard(&self, index: usize) -> Option<&S> {
        self.shards.get(index)
    }

    /// All virtual nodes, ascending.
    pub fn vnodes(&self) -> &[VirtualNode] {
        &self.vnodes
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Number of virtual nodes (`160 * sum(weights)`).
    pub fn vnode_count(&self) -> usize {
        self.vnodes.len()
    }
}

/// Key hashed to place virtual node `sequence` of the shard at `index`.
///
/// Named shards use `{name}*{weight}{sequence}` (no separator between weight
/// and sequence); unnamed shards use `SHARD-{index}-NODE-{sequence}`.
pub fn vnode_key(name: Option<&str>, index: usize, weight: u32, sequence: u32) -> String {
    match name {
        Some(name) => format!("{name}*{weight}{sequence}"),
        None => format!("SHARD-{index}-NODE-{sequence}"),
    }
}

/// Check a shard list and return its total virtual node count.
fn validate<S: ShardSpec>(shards: &[S]) -> Result<usize, RingError> {
    if shards.is_empty() {
        return Err(RingError::EmptyConfig);
    }

    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for (index, shard) in shards.iter().enumerate() {
        let weight = shard.weight();
        let count = match weight {
            0 => None,
            w => VNODES_PER_WEIGHT
                .checked_mul(w)
                .map(|count| count as usize)
                .filter(|&count| count <= MAX_VNODES),
        }
        .ok_or(RingError::InvalidWeight { index, weight })?;

        if let Some(name) = shard.name() {
            if let Some(&first) = names.get(name) {
                return Err(RingError::DuplicateName {
                    name: name.to_string(),
                    first,
                    second: index,
                });
            }
            names.insert(name, index);
        }

        total += count;
        if total > MAX_VNODES {
            return Err(RingError::TooManyVirtualNodes {
                total,
                max: MAX_VNODES,
            });
        }
    }

    Ok(total)
}

fn same_shard<S: ShardSpec>(old: &S, old_index: usize, new: &S, new_index: usize) -> bool {
    match (old.name(), new.name()) {
        (Some(a), Some(b)) => a == b,
        (None, None) => old_index == new_index,
        _ => false,
    }
}
