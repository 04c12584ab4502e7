//! Write-once shard router.
//!
//! [`ShardRouter`] holds at most one [`Ring`] for its whole lifetime. The
//! ring is built off to the side and published in a single step, so readers
//! either see no ring or a complete one.

use std::sync::OnceLock;

use shardring_types::ShardSpec;
use tracing::{info, warn};

use crate::error::RingError;
use crate::ring::Ring;

/// Routes identifiers to shards through a ring that is set exactly once.
///
/// `new` is `const`, so a router can back a process-wide static:
///
/// ```
/// use shardring_placement::ShardRouter;
/// use shardring_types::ShardConfig;
///
/// static ROUTER: ShardRouter<ShardConfig> = ShardRouter::new();
///
/// let shards = vec![ShardConfig::named("a", 1), ShardConfig::named("b", 1)];
/// assert!(ROUTER.init(shards).unwrap());
/// let shard = ROUTER.get_shard("session-1").unwrap();
/// assert!(shard.name.is_some());
/// ```
#[derive(Debug)]
pub struct ShardRouter<S> {
    ring: OnceLock<Ring<S>>,
}

impl<S> ShardRouter<S> {
    /// Create a router with no ring.
    pub const fn new() -> Self {
        Self {
            ring: OnceLock::new(),
        }
    }

    /// The published ring, if `init` has succeeded.
    pub fn ring(&self) -> Option<&Ring<S>> {
        self.ring.get()
    }

    /// Whether a ring has been published.
    pub fn is_initialized(&self) -> bool {
        self.ring.get().is_some()
    }
}

impl<S: ShardSpec> ShardRouter<S> {
    /// Build and publish the ring for `shards`.
    ///
    /// Returns `Ok(true)` when this call published the ring and `Ok(false)`
    /// when a ring already existed; the existing ring is never replaced and
    /// the new configuration is not even validated. A configuration error
    /// leaves the router uninitialized.
    pub fn init(&self, shards: Vec<S>) -> Result<bool, RingError> {
        if self.is_initialized() {
            warn!("shard ring already initialized, ignoring new configuration");
            return Ok(false);
        }

        let ring = Ring::build(shards)?;
        let (shard_count, vnode_count) = (ring.shard_count(), ring.vnode_count());

        match self.ring.set(ring) {
            Ok(()) => {
                info!(shards = shard_count, vnodes = vnode_count, "published shard ring");
                Ok(true)
            }
            Err(_) => {
                // Lost a race with a concurrent init; theirs stands.
                warn!("shard ring already initialized, ignoring new configuration");
                Ok(false)
            }
        }
    }

    /// The shard record that owns `identifier`.
    pub fn get_shard(&self, identifier: &str) -> Result<&S, RingError> {
        self.ring
            .get()
            .map(|ring| ring.shard_for(identifier))
            .ok_or(RingError::NotInitialized)
    }
}

impl<S> Default for ShardRouter<S> {
    fn default() -> Self {
        Self::new()
    }
}
