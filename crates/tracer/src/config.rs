//! Per-call configuration.
//!
//! Every default the tracers rely on is an explicit field here rather than a
//! fallback buried in field access.

use crate::PivotMethod;

/// Settings consumed by the adjacency builder and therefore by every graph
/// tracer.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Weight given to edges that carry none.
    pub default_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { default_weight: 1.0 }
    }
}

/// Settings for the QuickSort tracer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Pivot selection strategy.
    pub pivot: PivotMethod,
    /// Seed for the `random` strategy. `None` draws from OS entropy, which
    /// makes `random` traces unrepeatable.
    pub seed: Option<u64>,
}

impl SortConfig {
    pub fn new(pivot: PivotMethod) -> Self {
        Self { pivot, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
