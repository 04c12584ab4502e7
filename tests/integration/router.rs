//! Integration test: the process-wide router.
//!
//! One static router per test binary, initialized once and read from many
//! threads.

use std::sync::Arc;

use shardring_integration_tests::{numbered_shards, sample_identifiers, weighted_shards};
use shardring_placement::{Ring, RingError, ShardRouter};
use shardring_types::ShardConfig;

static ROUTER: ShardRouter<ShardConfig> = ShardRouter::new();

/// Initializing twice keeps the first ring; lookups keep following it.
#[test]
fn test_static_router_first_init_wins() {
    let local = ShardRouter::<ShardConfig>::new();
    assert_eq!(local.get_shard("x").unwrap_err(), RingError::NotInitialized);

    assert!(local.init(numbered_shards(4)).unwrap());
    let reference = Ring::build(numbered_shards(4)).unwrap();
    let ids = sample_identifiers(1_000, 20);

    assert!(!local.init(weighted_shards(&[("other", 5)])).unwrap());
    for id in &ids {
        assert_eq!(local.get_shard(id).unwrap(), reference.shard_for(id));
    }
}

/// Readers on many threads agree with a locally built ring.
#[test]
fn test_concurrent_readers_see_same_routes() {
    // Whichever test in this binary gets here first publishes; all use 16 shards.
    ROUTER.init(numbered_shards(16)).unwrap();
    let reference = Arc::new(Ring::build(numbered_shards(16)).unwrap());
    let ids = Arc::new(sample_identifiers(20_000, 21));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let reference = Arc::clone(&reference);
            let ids = Arc::clone(&ids);
            std::thread::spawn(move || {
                for id in ids.iter().skip(t).step_by(8) {
                    let shard = ROUTER.get_shard(id).unwrap();
                    assert_eq!(shard, reference.shard_for(id), "route of {id}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

/// Routes hand back the caller's record, attributes and all.
#[test]
fn test_router_returns_configured_record() {
    ROUTER.init(numbered_shards(16)).unwrap();
    let shard = ROUTER.get_shard("user-42").unwrap();
    let name = shard.name.as_deref().unwrap();
    let servers = shard.attributes["servers"].as_str();
    assert_eq!(servers, Some(name.replace("shard", "h").as_str()));
}
