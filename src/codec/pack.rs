use super::block::Block;
use super::decoder::Decoder;
use super::encoder::Encoder;
use crate::primitives::pool;
use crate::types::Uid;

/// Immutable block-compressed UID sequence.
///
/// Blocks are ordered and non-overlapping: the last member of block `k` is
/// strictly below the base of block `k + 1`. A pack is read through any number
/// of [`Decoder`]s sharing `&Pack`; [`free_pack`] takes it by value, so no
/// decoder can outlive the release.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pack {
    block_size: u32,
    blocks: Vec<Block>,
    len: usize,
}

impl Pack {
    pub(crate) fn from_blocks(block_size: u32, blocks: Vec<Block>) -> Self {
        let len = blocks.iter().map(Block::len).sum();
        Self {
            block_size,
            blocks,
            len,
        }
    }

    /// Encodes a strictly ascending slice with the given block size.
    pub fn encode(uids: &[Uid], block_size: u32) -> Self {
        let mut enc = Encoder::new(block_size);
        enc.extend(uids.iter().copied());
        enc.done()
    }

    /// Block capacity the pack was built with.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Ordered blocks of the pack.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of UIDs across all blocks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the pack holds no UIDs.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Smallest UID, read from the first block's base without decoding.
    pub fn first(&self) -> Option<Uid> {
        self.blocks.first().map(Block::base)
    }

    /// Largest UID; decodes only the final block.
    pub fn last(&self) -> Option<Uid> {
        let block = self.blocks.last()?;
        let mut uids = Vec::with_capacity(block.len());
        block.decode_into(&mut uids);
        uids.last().copied()
    }

    /// Fully decodes the pack.
    pub fn to_vec(&self) -> Vec<Uid> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(Decoder::new(self));
        out
    }
}

/// Releases a pack, returning its delta buffers to the shared pool.
pub fn free_pack(pack: Pack) {
    pool::shared().release_all(pack.blocks.into_iter().map(Block::into_deltas));
}
