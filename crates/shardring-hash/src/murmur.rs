//! MurmurHash64A.

/// Seed shared with the Java side (Jedis `Hashing.MURMUR_HASH`).
pub const HASH_SEED: u32 = 0x1234_ABCD;

/// MurmurHash64A over `data` with the given seed.
///
/// Matches Jedis `MurmurHash.hash64A` and the C reference implementation:
/// 8-byte blocks are read little-endian, and the trailing 1-7 bytes are
/// folded in as a little-endian word before the final mix.
///
/// ```
/// # use shardring_hash::{HASH_SEED, murmur64a};
/// let raw = murmur64a(b"hello", u64::from(HASH_SEED));
/// assert_eq!(raw, 0x9c6a_0b91_ce5d_8807);
/// ```
pub fn murmur64a(data: &[u8], seed: u64) -> u64 {
    const M: u64 = 0xc6a4_a793_5bd1_e995;
    const R: u32 = 47;

    let mut h: u64 = seed ^ (data.len() as u64).wrapping_mul(M);

    let mut blocks = data.chunks_exact(8);
    for block in &mut blocks {
        let mut k = u64::from_le_bytes([
            block[0], block[1], block[2], block[3], block[4], block[5], block[6], block[7],
        ]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h ^= k;
        h = h.wrapping_mul(M);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut word = [0u8; 8];
        word[..tail.len()].copy_from_slice(tail);
        h ^= u64::from_le_bytes(word);
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;

    h
}
