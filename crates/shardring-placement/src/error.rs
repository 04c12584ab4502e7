//! Error types for ring construction and lookup.

/// Errors that can occur while building or querying a ring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    /// The shard list is empty.
    #[error("shard configuration is empty")]
    EmptyConfig,

    /// A shard's weight is zero, or places more than
    /// [`MAX_VNODES`](crate::MAX_VNODES) virtual nodes on its own.
    #[error("shard {index} has invalid weight {weight}")]
    InvalidWeight {
        /// Position of the shard in the configuration.
        index: usize,
        /// The rejected weight.
        weight: u32,
    },

    /// The shards together place more than `max` virtual nodes.
    #[error("shard configuration needs {total} virtual nodes, more than the {max} allowed")]
    TooManyVirtualNodes {
        /// Virtual nodes requested so far when the cap was crossed.
        total: usize,
        /// The cap.
        max: usize,
    },

    /// Two shards share a name, so their virtual nodes would coincide.
    #[error("shard name {name:?} is used by shards {first} and {second}")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Position of the first shard with this name.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },

    /// A lookup was attempted before any ring was published.
    #[error("shard ring has not been initialized")]
    NotInitialized,
}
