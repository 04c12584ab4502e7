//! Integration test: load spreads in proportion to weight.

use shardring_integration_tests::{
    SAMPLE, expected_shares, numbered_shards, sample_identifiers, shares, weighted_shards,
};
use shardring_placement::Ring;

/// Weights 1:2:3:4 over a large sample: each shard's share is within a few
/// points of its weight fraction.
#[test]
fn test_weighted_shares_converge() {
    let shards = weighted_shards(&[("alpha", 1), ("beta", 2), ("gamma", 3), ("delta", 4)]);
    let expected = expected_shares(&shards);
    let ring = Ring::build(shards).unwrap();

    let got = shares(&ring, &sample_identifiers(SAMPLE, 1));

    for (i, (g, e)) in got.iter().zip(&expected).enumerate() {
        assert!(
            (g - e).abs() <= 0.03,
            "shard {i}: share {g:.4}, expected {e:.4}"
        );
    }
    // heavier shards get more
    assert!(got.windows(2).all(|w| w[0] < w[1]), "shares not ordered: {got:?}");
}

/// 32 equal shards: nobody is starved or overloaded.
#[test]
fn test_equal_weights_spread_evenly() {
    let ring = Ring::build(numbered_shards(32)).unwrap();
    let got = shares(&ring, &sample_identifiers(SAMPLE, 2));
    let expected = 1.0 / 32.0;

    for (i, g) in got.iter().enumerate() {
        let deviation = (g - expected).abs() / expected;
        assert!(
            deviation <= 0.35,
            "shard{} got {g:.4} of the sample ({:.0}% off)",
            i + 1,
            deviation * 100.0
        );
    }
}

/// Doubling one shard's weight roughly doubles its share.
#[test]
fn test_weight_scales_share() {
    let light = weighted_shards(&[("a", 1), ("b", 1), ("c", 1)]);
    let heavy = weighted_shards(&[("a", 1), ("b", 1), ("c", 2)]);
    let ids = sample_identifiers(SAMPLE, 3);

    let light_share = shares(&Ring::build(light).unwrap(), &ids)[2];
    let heavy_share = shares(&Ring::build(heavy).unwrap(), &ids)[2];

    let ratio = heavy_share / light_share;
    assert!(
        (1.2..=1.8).contains(&ratio),
        "share went from {light_share:.3} to {heavy_share:.3} (x{ratio:.2})"
    );
}
