use super::pack::Pack;
use crate::types::Uid;

/// Where [`Decoder::seek`] starts looking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SeekMode {
    /// Search the whole pack from its first block.
    FromStart,
    /// Search forward from the cursor; never moves backwards.
    FromCurrent,
}

/// Cursor over a [`Pack`].
///
/// The cursor is a block index plus an offset into that block's members. A
/// block's deltas are decoded only when the cursor lands inside it, and only
/// one decoded block is held at a time. Once the block index runs past the last
/// block the decoder is exhausted and every read returns nothing.
#[derive(Debug)]
pub struct Decoder<'a> {
    pack: &'a Pack,
    block_idx: usize,
    pos: usize,
    uids: Vec<Uid>,
    loaded: Option<usize>,
    decoded: u64,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder positioned before the first UID of `pack`.
    pub fn new(pack: &'a Pack) -> Self {
        Self {
            pack,
            block_idx: 0,
            pos: 0,
            uids: Vec::new(),
            loaded: None,
            decoded: 0,
        }
    }

    /// The pack being read.
    pub fn pack(&self) -> &'a Pack {
        self.pack
    }

    /// Moves the cursor back before the first UID.
    pub fn rewind(&mut self) {
        self.block_idx = 0;
        self.pos = 0;
    }

    /// Positions the cursor so the next read returns the smallest UID strictly
    /// greater than `uid`, or nothing if no such UID exists.
    ///
    /// UID 0 is the sentinel before every member: `seek(0, FromStart)` is a
    /// rewind and `seek(0, FromCurrent)` leaves the cursor where it is.
    pub fn seek(&mut self, uid: Uid, mode: SeekMode) {
        if mode == SeekMode::FromStart {
            self.rewind();
        }
        if uid == 0 {
            return;
        }
        match uid.checked_add(1) {
            Some(target) => {
                self.binary_seek(target);
            }
            None => self.exhaust(),
        }
    }

    /// Returns true once no UIDs remain.
    pub fn is_exhausted(&self) -> bool {
        self.block_idx >= self.pack.num_blocks()
    }

    /// Blocks from the cursor's block to the end, inclusive.
    pub fn remaining_blocks(&self) -> usize {
        self.pack.num_blocks().saturating_sub(self.block_idx)
    }

    /// Upper estimate of the UIDs left, assuming every remaining block is full.
    pub fn approx_len(&self) -> usize {
        self.remaining_blocks() * self.pack.block_size() as usize
    }

    /// How many times a block has been decoded by this cursor.
    pub fn blocks_decoded(&self) -> u64 {
        self.decoded
    }

    /// The not-yet-consumed members of the current block.
    pub fn block_uids(&mut self) -> &[Uid] {
        if self.is_exhausted() {
            return &[];
        }
        self.load();
        &self.uids[self.pos..]
    }

    /// Skips the rest of the current block and returns all members of the next.
    pub fn next_block(&mut self) -> &[Uid] {
        if !self.is_exhausted() {
            self.block_idx += 1;
            self.pos = 0;
        }
        self.block_uids()
    }

    /// Marks `n` members of the current block as consumed, rolling into the
    /// next block once the current one is used up.
    pub fn consume(&mut self, n: usize) {
        let Some(block) = self.pack.blocks().get(self.block_idx) else {
            return;
        };
        self.pos += n;
        if self.pos >= block.len() {
            self.block_idx += 1;
            self.pos = 0;
        }
    }

    /// Advances one block at a time until reaching the block that can hold
    /// `target`, then returns its members `>= target`.
    ///
    /// Skipped blocks are judged by their successor's base alone and are never
    /// decoded. An empty slice means the pack holds nothing `>= target` past
    /// the cursor.
    pub fn linear_seek(&mut self, target: Uid) -> &[Uid] {
        let blocks = self.pack.blocks();
        while let Some(next) = blocks.get(self.block_idx + 1) {
            if next.base() > target {
                break;
            }
            self.block_idx += 1;
            self.pos = 0;
        }
        self.settle(target)
    }

    /// Binary-searches block bases from the cursor's block onward for the block
    /// that can hold `target`, then returns its members `>= target`.
    pub fn binary_seek(&mut self, target: Uid) -> &[Uid] {
        let Some(rest) = self.pack.blocks().get(self.block_idx..) else {
            return &[];
        };
        let covering = rest.partition_point(|block| block.base() <= target);
        if covering > 1 {
            self.block_idx += covering - 1;
            self.pos = 0;
        }
        self.settle(target)
    }

    /// Moves the in-block offset to the first member `>= target`, spilling into
    /// the following block when the current one has nothing that large.
    fn settle(&mut self, target: Uid) -> &[Uid] {
        if self.is_exhausted() {
            return &[];
        }
        self.load();
        self.pos += self.uids[self.pos..].partition_point(|&uid| uid < target);
        if self.pos == self.uids.len() {
            self.block_idx += 1;
            self.pos = 0;
            return self.block_uids();
        }
        &self.uids[self.pos..]
    }

    fn load(&mut self) {
        if self.loaded == Some(self.block_idx) {
            return;
        }
        self.pack.blocks()[self.block_idx].decode_into(&mut self.uids);
        self.loaded = Some(self.block_idx);
        self.decoded += 1;
    }

    fn exhaust(&mut self) {
        self.block_idx = self.pack.num_blocks();
        self.pos = 0;
    }
}

impl Iterator for Decoder<'_> {
    type Item = Uid;

    fn next(&mut self) -> Option<Uid> {
        let uid = *self.block_uids().first()?;
        self.consume(1);
        Some(uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pack() -> Pack {
        // 10, 20, ..., 300 in blocks of four.
        let uids: Vec<Uid> = (1..=30).map(|v| v * 10).collect();
        Pack::encode(&uids, 4)
    }

    #[test]
    fn iterates_every_uid_in_order() {
        let pack = sample_pack();
        let decoded: Vec<Uid> = Decoder::new(&pack).collect();
        assert_eq!(decoded, (1..=30).map(|v| v * 10).collect::<Vec<Uid>>());
    }

    #[test]
    fn seek_returns_strict_successor() {
        let pack = sample_pack();
        let mut dec = Decoder::new(&pack);
        dec.seek(100, SeekMode::FromStart);
        assert_eq!(dec.next(), Some(110));
        dec.seek(105, SeekMode::FromStart);
        assert_eq!(dec.next(), Some(110));
        dec.seek(0, SeekMode::FromStart);
        assert_eq!(dec.next(), Some(10));
        dec.seek(5, SeekMode::FromStart);
        assert_eq!(dec.next(), Some(10));
    }

    #[test]
    fn seek_zero_keeps_uid_zero() {
        let pack = Pack::encode(&[0, 1, 2, 3], 2);
        let mut dec = Decoder::new(&pack);
        assert_eq!(dec.next(), Some(0));
        assert_eq!(dec.next(), Some(1));
        dec.seek(0, SeekMode::FromStart);
        assert_eq!(dec.by_ref().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        dec.seek(1, SeekMode::FromStart);
        assert_eq!(dec.next(), Some(2));
        dec.seek(0, SeekMode::FromCurrent);
        assert_eq!(dec.next(), Some(3));
    }

    #[test]
    fn seek_past_end_exhausts() {
        let pack = sample_pack();
        let mut dec = Decoder::new(&pack);
        dec.seek(300, SeekMode::FromStart);
        assert!(dec.is_exhausted());
        assert_eq!(dec.next(), None);
        assert!(dec.block_uids().is_empty());
        dec.seek(u64::MAX, SeekMode::FromStart);
        assert!(dec.is_exhausted());
        dec.seek(295, SeekMode::FromStart);
        assert_eq!(dec.next(), Some(300));
        assert_eq!(dec.next(), None);
    }

    #[test]
    fn seek_from_current_never_moves_back() {
        let pack = sample_pack();
        let mut dec = Decoder::new(&pack);
        dec.seek(150, SeekMode::FromStart);
        assert_eq!(dec.next(), Some(160));
        dec.seek(20, SeekMode::FromCurrent);
        assert_eq!(dec.next(), Some(170));
        dec.seek(250, SeekMode::FromCurrent);
        assert_eq!(dec.next(), Some(260));
        dec.seek(20, SeekMode::FromStart);
        assert_eq!(dec.next(), Some(30));
    }

    #[test]
    fn seek_on_block_boundary() {
        let pack = sample_pack();
        let mut dec = Decoder::new(&pack);
        // 40 closes the first block; its successor opens the second.
        dec.seek(40, SeekMode::FromStart);
        assert_eq!(dec.block_uids(), &[50, 60, 70, 80]);
    }

    #[test]
    fn linear_seek_skips_without_decoding() {
        let pack = sample_pack();
        let mut dec = Decoder::new(&pack);
        assert_eq!(dec.linear_seek(255), &[260, 270, 280]);
        assert_eq!(dec.blocks_decoded(), 1);
        assert_eq!(dec.linear_seek(400), &[] as &[Uid]);
        assert!(dec.is_exhausted());
    }

    #[test]
    fn binary_seek_matches_linear_seek() {
        let pack = sample_pack();
        for target in [0, 10, 11, 40, 41, 155, 299, 300, 301] {
            let mut lin = Decoder::new(&pack);
            let mut bin = Decoder::new(&pack);
            assert_eq!(lin.linear_seek(target), bin.binary_seek(target), "target {target}");
        }
    }

    #[test]
    fn consume_rolls_into_next_block() {
        let pack = sample_pack();
        let mut dec = Decoder::new(&pack);
        assert_eq!(dec.block_uids(), &[10, 20, 30, 40]);
        dec.consume(3);
        assert_eq!(dec.block_uids(), &[40]);
        dec.consume(1);
        assert_eq!(dec.block_uids(), &[50, 60, 70, 80]);
        assert_eq!(dec.next_block(), &[90, 100, 110, 120]);
        assert_eq!(dec.remaining_blocks(), 6);
        assert_eq!(dec.approx_len(), 24);
    }

    #[test]
    fn empty_pack_is_exhausted_immediately() {
        let pack = Pack::encode(&[], 4);
        let mut dec = Decoder::new(&pack);
        assert!(dec.is_exhausted());
        assert_eq!(dec.next(), None);
        dec.seek(0, SeekMode::FromStart);
        assert!(dec.is_exhausted());
        assert_eq!(dec.next(), None);
        assert!(dec.linear_seek(1).is_empty());
        assert!(dec.binary_seek(1).is_empty());
    }
}
