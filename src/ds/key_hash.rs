//! Deterministic key-to-bucket hashing for the chained key index.
//!
//! The hash is deliberately weak: the key is serialized to bytes and the
//! first [`HASH_PREFIX_LEN`] bytes are read as a little-endian integer, then
//! reduced modulo the bucket count. Combined with a small bucket count this
//! makes collisions common, which is what keeps the index's chain handling
//! honest under test.
//!
//! Everything here is a pure function so the hash can be tested (and
//! swapped) independently of the index that uses it.

use serde::Serialize;

/// Number of encoded-key bytes that feed the hash.
pub const HASH_PREFIX_LEN: usize = 8;

/// Serializes a key to its deterministic byte encoding.
///
/// Equal keys always produce identical bytes, so they always land in the
/// same bucket.
///
/// # Panics
///
/// Panics if the key type cannot be serialized. That is a programmer error
/// (an unsupported key type), not a runtime condition: any plain in-memory
/// key type implementing `Serialize` encodes without failure.
pub fn encode_key<K: Serialize + ?Sized>(key: &K) -> Vec<u8> {
    bincode::serialize(key).expect("cache key must have a deterministic byte encoding")
}

/// Reads the first [`HASH_PREFIX_LEN`] bytes of an encoded key as a
/// little-endian unsigned integer, zero-padding shorter encodings.
pub fn prefix_hash(bytes: &[u8]) -> u64 {
    let mut prefix = [0u8; HASH_PREFIX_LEN];
    let take = bytes.len().min(HASH_PREFIX_LEN);
    prefix[..take].copy_from_slice(&bytes[..take]);
    u64::from_le_bytes(prefix)
}

/// Maps a key to its bucket: `prefix_hash(encode_key(key)) % bucket_count`.
pub fn bucket_for<K: Serialize + ?Sized>(key: &K, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    (prefix_hash(&encode_key(key)) % bucket_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(encode_key(&42u64), encode_key(&42u64));
        assert_eq!(encode_key("key"), encode_key("key"));
        assert_ne!(encode_key(&1u64), encode_key(&2u64));
    }

    #[test]
    fn prefix_hash_reads_little_endian() {
        assert_eq!(prefix_hash(&[1, 0, 0, 0, 0, 0, 0, 0]), 1);
        assert_eq!(prefix_hash(&[0, 1, 0, 0, 0, 0, 0, 0]), 256);
        // Bytes past the prefix are ignored.
        assert_eq!(
            prefix_hash(&[7, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF]),
            prefix_hash(&[7, 0, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn prefix_hash_zero_pads_short_encodings() {
        assert_eq!(prefix_hash(&[5]), 5);
        assert_eq!(prefix_hash(&[]), 0);
    }

    #[test]
    fn equal_keys_hash_to_equal_buckets() {
        for bucket_count in [1, 2, 3, 7, 64] {
            assert_eq!(
                bucket_for(&123u64, bucket_count),
                bucket_for(&123u64, bucket_count)
            );
        }
    }

    #[test]
    fn bucket_is_always_in_range() {
        for key in 0u64..100 {
            assert!(bucket_for(&key, 3) < 3);
        }
    }

    #[test]
    fn integer_keys_collide_modulo_bucket_count() {
        // Fixed-width integers encode as their own little-endian bytes, so
        // the bucket is simply the value modulo the bucket count.
        assert_eq!(bucket_for(&0u64, 3), 0);
        assert_eq!(bucket_for(&3u64, 3), 0);
        assert_eq!(bucket_for(&6u64, 3), 0);
        assert_eq!(bucket_for(&1u64, 3), 1);
        assert_eq!(bucket_for(&5u64, 3), 2);
    }

    #[test]
    fn string_keys_collide_by_length() {
        // String encodings lead with a u64 length, so the hashed prefix is
        // the length itself and same-length strings share a bucket.
        assert_eq!(bucket_for("abc", 3), bucket_for("xyz", 3));
        assert_eq!(bucket_for("abc", 3), 0);
        assert_eq!(bucket_for("a", 3), 1);
    }
}
