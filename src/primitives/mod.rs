//! Low-level primitives shared by the codec and the set algebra.

/// Byte-level utilities and encoding/decoding.
///
/// Varints, fixed-width integers and a bounds-checked cursor.
pub mod bytes;

/// Reusable buffer pooling.
///
/// Backs encoder allocations and the buffers handed back by `free_pack`.
pub mod pool;
