//! Intersection of a block-compressed pack with a materialized sequence.
//!
//! Two traversals are available: [`intersect_compressed_linjump`] walks blocks
//! sequentially and suits dense candidate lists, [`intersect_compressed_bin`]
//! binary-searches block bases and suits sparse ones. Both produce the same
//! output for duplicate-free packs; [`intersect_compressed`] picks between
//! them through a [`StrategyPolicy`].

mod bin;
mod linjump;
mod strategy;

pub use bin::intersect_compressed_bin;
pub use linjump::intersect_compressed_linjump;
pub use strategy::{select_strategy, RatioPolicy, Strategy, StrategyPolicy, DEFAULT_BIN_RATIO};

use tracing::trace;

use crate::codec::{Decoder, Pack, SeekMode};
use crate::options::IntersectOptions;
use crate::types::Uid;

/// Intersects the UIDs of `pack` greater than `after` with `other`, replacing
/// the contents of `dst`, using default options.
///
/// `after == 0` is the sentinel and keeps the whole pack, UID 0 included.
pub fn intersect_compressed(pack: &Pack, after: Uid, other: &[Uid], dst: &mut Vec<Uid>) {
    intersect_compressed_with_options(pack, after, other, dst, &IntersectOptions::default());
}

/// [`intersect_compressed`] with an explicit policy and metrics sink.
pub fn intersect_compressed_with_options(
    pack: &Pack,
    after: Uid,
    other: &[Uid],
    dst: &mut Vec<Uid>,
    opts: &IntersectOptions,
) {
    dst.clear();
    let mut dec = Decoder::new(pack);
    dec.seek(after, SeekMode::FromStart);
    let strategy = opts.policy.select(dec.remaining_blocks(), other.len());
    trace!(
        blocks = dec.remaining_blocks(),
        other_len = other.len(),
        ?strategy,
        "compressed.dispatch"
    );
    match strategy {
        Strategy::LinJump => intersect_compressed_linjump(&mut dec, other, dst),
        Strategy::Bin => intersect_compressed_bin(&mut dec, other, dst),
    }
    if let Some(metrics) = &opts.metrics {
        metrics.strategy_selected(strategy);
        metrics.blocks_decoded(dec.blocks_decoded());
    }
}
