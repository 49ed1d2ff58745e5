/// Default block-count-to-candidate ratio at which binary search over block
/// bases beats walking blocks one by one.
pub const DEFAULT_BIN_RATIO: usize = 8;

/// Traversal used to intersect a pack against a materialized sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Walk blocks sequentially, comparing successor bases.
    LinJump,
    /// Binary-search block bases for every candidate.
    Bin,
}

/// Chooses a [`Strategy`] from the remaining block count of the pack and the
/// length of the other side. Choices affect speed only, never the result.
pub trait StrategyPolicy: Send + Sync {
    /// Picks the traversal for one intersection.
    fn select(&self, num_blocks: usize, other_len: usize) -> Strategy;
}

/// Picks [`Strategy::Bin`] once the pack has at least `bin_ratio` blocks per
/// candidate in the other sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RatioPolicy {
    /// Blocks per candidate at which binary search takes over.
    pub bin_ratio: usize,
}

impl Default for RatioPolicy {
    fn default() -> Self {
        Self {
            bin_ratio: DEFAULT_BIN_RATIO,
        }
    }
}

impl StrategyPolicy for RatioPolicy {
    fn select(&self, num_blocks: usize, other_len: usize) -> Strategy {
        select_strategy(num_blocks, other_len, self.bin_ratio)
    }
}

/// Pure selection rule behind [`RatioPolicy`].
pub fn select_strategy(num_blocks: usize, other_len: usize, bin_ratio: usize) -> Strategy {
    if num_blocks == 0 || other_len == 0 {
        return Strategy::LinJump;
    }
    if num_blocks / other_len >= bin_ratio.max(1) {
        Strategy::Bin
    } else {
        Strategy::LinJump
    }
}
