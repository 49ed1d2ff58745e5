use std::sync::Arc;

use crate::compressed::{RatioPolicy, StrategyPolicy};
use crate::metrics::IntersectMetrics;

/// Configuration for compressed intersections.
#[derive(Clone)]
pub struct IntersectOptions {
    /// Rule deciding between block walking and binary search.
    pub policy: Arc<dyn StrategyPolicy>,
    /// Optional metrics collection implementation.
    pub metrics: Option<Arc<dyn IntersectMetrics>>,
}

impl Default for IntersectOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl IntersectOptions {
    /// Creates options using [`RatioPolicy::default`] and no metrics.
    pub fn new() -> Self {
        Self {
            policy: Arc::new(RatioPolicy::default()),
            metrics: None,
        }
    }

    /// Uses a [`RatioPolicy`] with the given blocks-per-candidate threshold.
    pub fn bin_ratio(mut self, bin_ratio: usize) -> Self {
        self.policy = Arc::new(RatioPolicy { bin_ratio });
        self
    }

    /// Replaces the strategy policy.
    pub fn policy(mut self, policy: Arc<dyn StrategyPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the metrics collection implementation.
    pub fn metrics(mut self, metrics: Arc<dyn IntersectMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }
}
