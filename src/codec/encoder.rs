use tracing::debug;

use super::block::Block;
use super::pack::Pack;
use crate::primitives::pool;
use crate::types::Uid;

/// Block capacity used when an encoder is configured with a block size of zero.
pub const DEFAULT_BLOCK_SIZE: u32 = 256;

/// Builds a [`Pack`] from UIDs fed in strictly ascending order.
///
/// `done` consumes the encoder, so a spent encoder cannot be reused.
#[derive(Debug)]
pub struct Encoder {
    block_size: u32,
    pending: Vec<Uid>,
    blocks: Vec<Block>,
    last: Option<Uid>,
    len: usize,
}

impl Encoder {
    /// Creates an encoder closing a block every `block_size` members.
    ///
    /// A `block_size` of zero selects [`DEFAULT_BLOCK_SIZE`].
    pub fn new(block_size: u32) -> Self {
        let block_size = if block_size == 0 {
            DEFAULT_BLOCK_SIZE
        } else {
            block_size
        };
        Self {
            block_size,
            pending: Vec::with_capacity(block_size.min(DEFAULT_BLOCK_SIZE) as usize),
            blocks: Vec::new(),
            last: None,
            len: 0,
        }
    }

    /// Effective block capacity.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of UIDs added so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `uid`, which must be greater than every UID added before.
    pub fn add(&mut self, uid: Uid) {
        debug_assert!(
            self.last.map_or(true, |last| uid > last),
            "encoder input must be strictly ascending"
        );
        self.last = Some(uid);
        self.pending.push(uid);
        self.len += 1;
        if self.pending.len() >= self.block_size as usize {
            self.close_block();
        }
    }

    /// Flushes any partial block and returns the finished pack.
    pub fn done(mut self) -> Pack {
        if !self.pending.is_empty() {
            self.close_block();
        }
        debug!(
            uids = self.len,
            blocks = self.blocks.len(),
            block_size = self.block_size,
            "codec.encoder.done"
        );
        Pack::from_blocks(self.block_size, self.blocks)
    }

    fn close_block(&mut self) {
        // Deltas for ascending UIDs rarely need more than a couple of bytes each.
        let deltas = pool::shared().acquire(self.pending.len() * 2);
        self.blocks.push(Block::close(&self.pending, deltas));
        self.pending.clear();
    }
}

impl Extend<Uid> for Encoder {
    fn extend<I: IntoIterator<Item = Uid>>(&mut self, iter: I) {
        for uid in iter {
            self.add(uid);
        }
    }
}
