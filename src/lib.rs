//! Set algebra over sorted UID posting lists and their block-compressed form.
//!
//! Posting lists (edge sets, reverse edges, index buckets) are ascending
//! sequences of 64-bit UIDs. They are combined either fully materialized, with
//! the functions in [`algebra`], or with one side still compressed in a
//! [`codec::Pack`], with the functions in [`compressed`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod algebra;
pub mod codec;
pub mod compressed;
pub mod metrics;
pub mod options;
pub mod primitives;
pub mod types;

pub use algebra::{
    apply_filter, difference, index_of, intersect, intersect_in_place, intersect_with, merge,
};
pub use codec::{
    free_pack, Block, Decoder, Encoder, Pack, SeekMode, DEFAULT_BLOCK_SIZE, PACK_MAGIC,
};
pub use compressed::{
    intersect_compressed, intersect_compressed_bin, intersect_compressed_linjump,
    intersect_compressed_with_options, RatioPolicy, Strategy, StrategyPolicy,
};
pub use metrics::{CounterMetrics, IntersectMetrics, NoopMetrics};
pub use options::IntersectOptions;
pub use types::{Result, Uid, UidError};
