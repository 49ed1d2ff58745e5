use crate::primitives::bytes::var;
use crate::types::{Result, Uid, UidError};

/// A bounded run of ascending UIDs: the base value plus varint deltas for the
/// remaining members, each relative to its immediate predecessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    base: Uid,
    num_uids: u32,
    deltas: Vec<u8>,
}

impl Block {
    /// Closes a block over `members`, encoding into the provided `deltas` buffer.
    pub(crate) fn close(members: &[Uid], mut deltas: Vec<u8>) -> Self {
        debug_assert!(!members.is_empty(), "blocks are never empty");
        deltas.clear();
        let mut prev = members[0];
        for &uid in &members[1..] {
            debug_assert!(uid > prev, "block members must be strictly ascending");
            var::encode_u64(uid.wrapping_sub(prev), &mut deltas);
            prev = uid;
        }
        Self {
            base: members[0],
            num_uids: u32::try_from(members.len()).expect("block member count exceeds u32"),
            deltas,
        }
    }

    /// Rebuilds a block from its wire parts. The result is not validated.
    pub(crate) fn from_parts(base: Uid, num_uids: u32, deltas: Vec<u8>) -> Self {
        Self {
            base,
            num_uids,
            deltas,
        }
    }

    /// Smallest member of the block.
    pub fn base(&self) -> Uid {
        self.base
    }

    /// Number of members, including the base.
    pub fn len(&self) -> usize {
        self.num_uids as usize
    }

    /// Blocks produced by the encoder always hold at least the base.
    pub fn is_empty(&self) -> bool {
        self.num_uids == 0
    }

    /// Encoded residual deltas.
    pub fn delta_bytes(&self) -> &[u8] {
        &self.deltas
    }

    pub(crate) fn into_deltas(self) -> Vec<u8> {
        self.deltas
    }

    /// Decodes every member into `out`, replacing its contents.
    ///
    /// Panics if the block bytes are malformed; blocks reachable through a
    /// [`super::Pack`] were either encoded locally or validated on load.
    pub fn decode_into(&self, out: &mut Vec<Uid>) {
        if let Err(err) = self.try_decode_into(out) {
            panic!("pack block at base {} is malformed: {err}", self.base);
        }
    }

    /// Decodes every member into `out`, reporting malformed bytes as corruption.
    pub(crate) fn try_decode_into(&self, out: &mut Vec<Uid>) -> Result<()> {
        out.clear();
        if self.num_uids == 0 {
            return Err(UidError::Corruption("pack block has no members"));
        }
        out.reserve(self.len().min(self.deltas.len() + 1));
        out.push(self.base);
        let mut prev = self.base;
        let mut off = 0;
        for _ in 1..self.num_uids {
            let delta = var::try_decode_u64(&self.deltas, &mut off)
                .ok_or(UidError::Corruption("pack block deltas truncated"))?;
            prev = prev
                .checked_add(delta)
                .ok_or(UidError::Corruption("pack block delta overflows u64"))?;
            out.push(prev);
        }
        if off != self.deltas.len() {
            return Err(UidError::Corruption("pack block has trailing delta bytes"));
        }
        Ok(())
    }
}
