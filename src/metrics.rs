use std::sync::atomic::{AtomicU64, Ordering};

use crate::compressed::Strategy;

/// Trait for tracking how compressed intersections are executed.
///
/// Implementations receive one callback per dispatched intersection and can
/// be shared across worker threads.
pub trait IntersectMetrics: Send + Sync {
    /// Records which traversal the dispatcher picked.
    fn strategy_selected(&self, strategy: Strategy);

    /// Records how many blocks one intersection had to decode.
    fn blocks_decoded(&self, count: u64);
}

/// A no-op implementation of [`IntersectMetrics`].
#[derive(Default)]
pub struct NoopMetrics;

impl IntersectMetrics for NoopMetrics {
    fn strategy_selected(&self, _strategy: Strategy) {}
    fn blocks_decoded(&self, _count: u64) {}
}

/// A thread-safe counter-based implementation of [`IntersectMetrics`].
#[derive(Default)]
pub struct CounterMetrics {
    /// Intersections executed with [`Strategy::LinJump`].
    pub linjump_runs: AtomicU64,

    /// Intersections executed with [`Strategy::Bin`].
    pub bin_runs: AtomicU64,

    /// Total blocks decoded across all intersections.
    pub blocks_decoded: AtomicU64,
}

impl IntersectMetrics for CounterMetrics {
    fn strategy_selected(&self, strategy: Strategy) {
        let counter = match strategy {
            Strategy::LinJump => &self.linjump_runs,
            Strategy::Bin => &self.bin_runs,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn blocks_decoded(&self, count: u64) {
        self.blocks_decoded.fetch_add(count, Ordering::Relaxed);
    }
}
