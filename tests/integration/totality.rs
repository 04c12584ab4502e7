//! Integration test: every identifier resolves to a shard.

use shardring_hash::HashValue;
use shardring_integration_tests::{numbered_shards, sample_identifiers, weighted_shards};
use shardring_placement::Ring;
use shardring_types::ShardConfig;

fn configs() -> Vec<Vec<ShardConfig>> {
    vec![
        numbered_shards(1),
        numbered_shards(32),
        weighted_shards(&[("a", 1), ("b", 7)]),
        vec![ShardConfig::unnamed(2), ShardConfig::unnamed(1)],
    ]
}

/// Odd identifiers (empty, huge, non-ASCII, control bytes) all route.
#[test]
fn test_every_identifier_routes() {
    let huge = "k".repeat(1 << 20);
    let odd = [
        "",
        " ",
        "\t\r\n",
        "\0",
        "用户:42",
        "🦀🦀🦀",
        huge.as_str(),
    ];

    for shards in configs() {
        let count = shards.len();
        let ring = Ring::build(shards).unwrap();
        for id in odd {
            assert!(ring.shard_index_for(id) < count);
        }
        for id in sample_identifiers(5_000, 30) {
            assert!(ring.shard_index_for(&id) < count);
        }
    }
}

/// Keys past the last node wrap to the first; keys before it land on it.
#[test]
fn test_extreme_keys_wrap_to_minimum_node() {
    for shards in configs() {
        let ring = Ring::build(shards).unwrap();
        let first = ring.vnodes()[0];
        let last = ring.vnodes()[ring.vnode_count() - 1];

        assert_eq!(*ring.successor(HashValue::from(i64::MIN)), first);
        assert_eq!(*ring.successor(first.hash), first);
        assert_eq!(*ring.successor(last.hash), last);
        if last.hash.as_i64() < i64::MAX {
            let past = HashValue::from(last.hash.as_i64() + 1);
            assert_eq!(*ring.successor(past), first);
        }
    }
}

/// Every route is the owner of the nearest node at or after the key.
#[test]
fn test_routes_match_linear_scan() {
    let ring = Ring::build(numbered_shards(5)).unwrap();
    for id in sample_identifiers(2_000, 31) {
        let key = HashValue::of(&id);
        let expected = ring
            .vnodes()
            .iter()
            .find(|node| node.hash >= key)
            .unwrap_or(&ring.vnodes()[0]);
        assert_eq!(ring.shard_index_for(&id), expected.shard_index, "route of {id}");
    }
}

/// Identifiers hashing outside [first node, last node] go to the first node's shard.
#[test]
fn test_identifiers_outside_node_range_wrap() {
    let ring = Ring::build(numbered_shards(32)).unwrap();
    let first = ring.vnodes()[0];
    let last = ring.vnodes()[ring.vnode_count() - 1];

    assert!(HashValue::of("wrap-438") > last.hash);
    assert!(HashValue::of("low-559") < first.hash);
    assert_eq!(ring.shard_index_for("wrap-438"), first.shard_index);
    assert_eq!(ring.shard_index_for("low-559"), first.shard_index);
    assert_eq!(first.shard_index, 24);
}
