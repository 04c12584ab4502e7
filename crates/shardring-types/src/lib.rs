//! Shared types for shardring.
//!
//! This crate defines the shard configuration record ([`ShardConfig`]) and
//! the [`ShardSpec`] trait through which the placement ring reads any
//! application-defined shard record. The ring never copies or interprets
//! application fields: it hands the caller's own record back on lookup.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shard seam
// ---------------------------------------------------------------------------

/// What the ring needs to know about a shard to place it.
///
/// Implement this for your own shard record to route straight to it.
pub trait ShardSpec {
    /// Name used to derive the shard's virtual-node keys.
    ///
    /// `None` (or an empty name) places the shard positionally, by its index
    /// in the configuration.
    fn name(&self) -> Option<&str>;

    /// Relative capacity; the shard receives `160 * weight` virtual nodes.
    ///
    /// Weights are whole numbers. Scale every weight up to express a
    /// fractional ratio (`2` and `3` instead of `1` and `1.5`).
    fn weight(&self) -> u32;
}

impl<T: ShardSpec + ?Sized> ShardSpec for &T {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn weight(&self) -> u32 {
        (**self).weight()
    }
}

// ---------------------------------------------------------------------------
// Concrete shard record
// ---------------------------------------------------------------------------

/// A shard as it appears in configuration.
///
/// ```toml
/// [[shards]]
/// name = "shard1"
/// weight = 1
/// servers = "h1"
/// ```
///
/// Keys other than `name` and `weight` are kept verbatim in `attributes`,
/// whatever their TOML type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShardConfig {
    /// Optional shard name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Relative capacity factor. Must be a positive integer: fractional
    /// weights such as `1.5` are rejected when the config is parsed.
    pub weight: u32,
    /// Opaque application fields (server addresses, ports, pool sizes).
    #[serde(flatten)]
    pub attributes: BTreeMap<String, toml::Value>,
}

impl ShardConfig {
    /// A named shard with no extra attributes.
    pub fn named(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: Some(name.into()),
            weight,
            attributes: BTreeMap::new(),
        }
    }

    /// An unnamed shard, placed by its position in the configuration.
    pub fn unnamed(weight: u32) -> Self {
        Self {
            name: None,
            weight,
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an application attribute.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<toml::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Human-readable label: the name, or `shard-{index}` when unnamed.
    pub fn label(&self, index: usize) -> ShardLabel<'_> {
        ShardLabel {
            name: ShardSpec::name(self),
            index,
        }
    }
}

impl ShardSpec for ShardConfig {
    fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    fn weight(&self) -> u32 {
        self.weight
    }
}

/// Display adapter returned by [`ShardConfig::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardLabel<'a> {
    name: Option<&'a str>,
    index: usize,
}

impl fmt::Display for ShardLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "shard-{}", self.index),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
