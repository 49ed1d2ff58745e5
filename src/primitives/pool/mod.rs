//! Reuse of block delta buffers between encoders and freed packs.

use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing::trace;

/// Upper bound on buffers retained by the shared pool.
pub const MAX_POOLED_BUFFERS: usize = 1024;

/// Bounded stack of cleared delta buffers.
///
/// Buffers come back through [`DeltaPool::release_all`] when a pack is freed
/// and leave through [`DeltaPool::acquire`] when an encoder closes a block.
/// Buffers that never allocated are dropped instead of parked.
pub struct DeltaPool {
    parked: Mutex<Vec<Vec<u8>>>,
    limit: usize,
}

impl DeltaPool {
    /// Creates an empty pool that parks at most `limit` buffers.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            parked: Mutex::new(Vec::new()),
            limit,
        }
    }

    /// Takes a cleared buffer with room for at least `capacity` bytes.
    pub fn acquire(&self, capacity: usize) -> Vec<u8> {
        let mut buf = self.parked.lock().pop().unwrap_or_default();
        buf.reserve(capacity);
        buf
    }

    /// Parks a batch of buffers under a single lock acquisition.
    pub fn release_all<I>(&self, buffers: I)
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut parked = self.parked.lock();
        let before = parked.len();
        for mut buf in buffers {
            if parked.len() >= self.limit {
                break;
            }
            if buf.capacity() == 0 {
                continue;
            }
            buf.clear();
            parked.push(buf);
        }
        trace!(
            returned = parked.len() - before,
            pooled = parked.len(),
            "codec.pool.release"
        );
    }

    /// Number of buffers currently parked.
    pub fn pooled(&self) -> usize {
        self.parked.lock().len()
    }
}

/// Returns the process-wide delta buffer pool.
pub fn shared() -> &'static DeltaPool {
    static POOL: OnceLock<DeltaPool> = OnceLock::new();
    POOL.get_or_init(|| DeltaPool::with_limit(MAX_POOLED_BUFFERS))
}
