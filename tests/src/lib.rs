//! Shared test harness for shardring integration tests.
//!
//! Provides shard list builders and seeded identifier samples so that the
//! statistical tests are reproducible run to run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shardring_placement::Ring;
use shardring_types::{ShardConfig, ShardSpec};

/// Default sample size for statistical tests.
pub const SAMPLE: usize = 100_000;

/// `count` weight-1 shards named `shard1..=shard{count}`, each with a
/// `servers` attribute, like a typical Redis shard list.
pub fn numbered_shards(count: usize) -> Vec<ShardConfig> {
    (1..=count)
        .map(|i| {
            ShardConfig::named(format!("shard{i}"), 1).with_attribute("servers", format!("h{i}"))
        })
        .collect()
}

/// Named shards with explicit weights.
pub fn weighted_shards(spec: &[(&str, u32)]) -> Vec<ShardConfig> {
    spec.iter()
        .map(|(name, weight)| ShardConfig::named(*name, *weight))
        .collect()
}

/// `count` random session-style identifiers drawn from a fixed seed.
pub fn sample_identifiers(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| format!("sess:{:016x}{:08x}", rng.random::<u64>(), rng.random::<u32>()))
        .collect()
}

/// Owner name of each identifier, in order.
pub fn owners(ring: &Ring<ShardConfig>, identifiers: &[String]) -> Vec<String> {
    identifiers
        .iter()
        .map(|id| {
            let index = ring.shard_index_for(id);
            ring.shards()[index].label(index).to_string()
        })
        .collect()
}

/// Fraction of the sample each shard received, by shard index.
pub fn shares(ring: &Ring<ShardConfig>, identifiers: &[String]) -> Vec<f64> {
    ring.distribution(identifiers)
        .into_iter()
        .map(|count| count as f64 / identifiers.len() as f64)
        .collect()
}

/// Each shard's weight as a fraction of the total weight.
pub fn expected_shares(shards: &[ShardConfig]) -> Vec<f64> {
    let total: u32 = shards.iter().map(|s| s.weight()).sum();
    shards
        .iter()
        .map(|s| f64::from(s.weight()) / f64::from(total))
        .collect()
}
