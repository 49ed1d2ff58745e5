//! Byte layout of a serialized [`Pack`].
//!
//! ```text
//! magic "UPK1"
//! varint block_size
//! varint block_count
//! block_count x { base: u64 BE, varint num_uids, varint delta_len, deltas }
//! crc32 (u32 BE) over block_size and every byte after the magic
//! ```

use tracing::debug;

use super::block::Block;
use super::pack::Pack;
use crate::primitives::bytes::{buf::Cursor, ord, var};
use crate::types::checksum::pack_crc32;
use crate::types::{Result, UidError};

/// Leading bytes of every serialized pack.
pub const PACK_MAGIC: [u8; 4] = *b"UPK1";

const CRC_LEN: usize = core::mem::size_of::<u32>();

impl Pack {
    /// Serializes the pack.
    pub fn to_bytes(&self) -> Vec<u8> {
        let body_estimate: usize = self
            .blocks()
            .iter()
            .map(|block| 8 + 2 * var::MAX_VARINT_LEN + block.delta_bytes().len())
            .sum();
        let header = PACK_MAGIC.len() + 2 * var::MAX_VARINT_LEN;
        let mut out = Vec::with_capacity(header + body_estimate + CRC_LEN);
        out.extend_from_slice(&PACK_MAGIC);
        var::encode_u64(u64::from(self.block_size()), &mut out);
        var::encode_u64(self.num_blocks() as u64, &mut out);
        for block in self.blocks() {
            ord::push_u64_be(&mut out, block.base());
            var::encode_u64(block.len() as u64, &mut out);
            var::encode_u64(block.delta_bytes().len() as u64, &mut out);
            out.extend_from_slice(block.delta_bytes());
        }
        let crc = pack_crc32(self.block_size(), &out[PACK_MAGIC.len()..]);
        out.extend_from_slice(&crc.to_be_bytes());
        out
    }

    /// Parses and fully validates a serialized pack.
    ///
    /// Any integrity problem is reported as [`UidError::Corruption`]; a pack
    /// returned from here is safe to hand to a decoder.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let result = parse(bytes);
        if let Err(err) = &result {
            debug!(len = bytes.len(), error = %err, "codec.pack.corrupt");
        }
        result
    }
}

fn parse(bytes: &[u8]) -> Result<Pack> {
    if bytes.len() < PACK_MAGIC.len() + CRC_LEN {
        return Err(UidError::Corruption("pack shorter than header"));
    }
    if bytes[..PACK_MAGIC.len()] != PACK_MAGIC {
        return Err(UidError::Corruption("pack magic mismatch"));
    }
    let (body, crc_bytes) = bytes.split_at(bytes.len() - CRC_LEN);
    let mut crc = [0u8; CRC_LEN];
    crc.copy_from_slice(crc_bytes);
    let stored_crc = u32::from_be_bytes(crc);

    let mut cur = Cursor::new(body);
    cur.take(PACK_MAGIC.len(), "pack magic")?;
    let block_size = u32::try_from(cur.varint("pack block size")?)
        .map_err(|_| UidError::Corruption("pack block size exceeds u32"))?;
    if block_size == 0 {
        return Err(UidError::Corruption("pack block size is zero"));
    }
    if pack_crc32(block_size, &body[PACK_MAGIC.len()..]) != stored_crc {
        return Err(UidError::Corruption("pack checksum mismatch"));
    }

    let num_blocks = cur.varint("pack block count")?;
    // Every block needs at least its base plus two length bytes.
    if num_blocks > (cur.remaining() / (ord::U64_LEN + 2)) as u64 {
        return Err(UidError::Corruption("pack block count exceeds payload"));
    }
    let mut blocks = Vec::with_capacity(num_blocks as usize);
    let mut scratch = Vec::with_capacity(block_size.min(4096) as usize);
    let mut prev_last: Option<u64> = None;
    for _ in 0..num_blocks {
        let base = cur.u64_be("pack block base truncated")?;
        let num_uids = u32::try_from(cur.varint("pack block count truncated")?)
            .map_err(|_| UidError::Corruption("pack block member count exceeds u32"))?;
        if num_uids == 0 || num_uids > block_size {
            return Err(UidError::Corruption("pack block member count out of range"));
        }
        let delta_len = usize::try_from(cur.varint("pack block delta length truncated")?)
            .map_err(|_| UidError::Corruption("pack block delta length overflows"))?;
        // Every member after the base costs at least one delta byte.
        if (num_uids - 1) as usize > delta_len {
            return Err(UidError::Corruption("pack block member count exceeds deltas"));
        }
        let deltas = cur.take(delta_len, "pack block deltas truncated")?.to_vec();
        let block = Block::from_parts(base, num_uids, deltas);

        block.try_decode_into(&mut scratch)?;
        if scratch.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(UidError::Corruption("pack block members not strictly ascending"));
        }
        if let Some(last) = prev_last {
            if last >= base {
                return Err(UidError::Corruption("pack block bases not strictly increasing"));
            }
        }
        prev_last = scratch.last().copied();
        blocks.push(block);
    }
    if cur.remaining() != 0 {
        return Err(UidError::Corruption("pack has trailing bytes"));
    }
    Ok(Pack::from_blocks(block_size, blocks))
}
