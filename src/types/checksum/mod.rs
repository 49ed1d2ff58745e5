#![forbid(unsafe_code)]
//! Integrity check for serialized packs.

/// CRC32 of a serialized pack body, salted with the block size it was built
/// with so a pack re-labelled with another block size fails the check.
pub fn pack_crc32(block_size: u32, body: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&block_size.to_be_bytes());
    hasher.update(body);
    hasher.finalize()
}
