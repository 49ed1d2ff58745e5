//! Block-compressed posting packs.
//!
//! An [`Encoder`] groups ascending UIDs into fixed-capacity [`Block`]s, each
//! storing its base value and varint deltas, and seals them into an immutable
//! [`Pack`]. A [`Decoder`] walks a pack lazily: locating a value only compares
//! block bases, and only the block the cursor lands in is decoded.

mod block;
mod decoder;
mod encoder;
mod format;
mod pack;

pub use block::Block;
pub use decoder::{Decoder, SeekMode};
pub use encoder::{Encoder, DEFAULT_BLOCK_SIZE};
pub use format::PACK_MAGIC;
pub use pack::{free_pack, Pack};
