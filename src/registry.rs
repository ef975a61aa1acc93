// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Strategy registry: metric name to aggregation strategy.
//!
//! The registry is built once at startup from an explicit list of
//! strategy instances and is read-only afterwards. There is no runtime
//! scanning and no hidden global; construct it and hand it to whatever
//! owns the query path (typically [`crate::service::TelemetryService`]).

use std::collections::HashMap;
use std::sync::Arc;

use crate::strategy::{AggregationStrategy, StatisticalStrategy};

/// Shareable strategy handle; one instance may back several metric names.
pub type SharedStrategy = Arc<dyn AggregationStrategy + Send + Sync>;

/// Lookup table from lower-cased metric name to strategy.
///
/// Construction is single-threaded and the table is never mutated
/// afterwards, so concurrent [`StrategyRegistry::resolve`] calls need
/// no synchronization.
///
/// If two strategies declare the same metric name, the later
/// registration wins. The override is intentional policy (a deployment
/// can shadow a stock strategy by registering its own after it), not an
/// error.
pub struct StrategyRegistry {
    strategies: HashMap<String, SharedStrategy>,
}

impl StrategyRegistry {
    /// Build a registry from the given strategy instances.
    ///
    /// For every strategy, every name in its `supported_metrics()` is
    /// inserted lower-cased. Never fails; an empty list yields an
    /// empty registry.
    pub fn new(strategies: Vec<SharedStrategy>) -> Self {
        let mut map = HashMap::new();
        for strategy in strategies {
            for metric in strategy.supported_metrics() {
                map.insert(metric.to_lowercase(), Arc::clone(&strategy));
            }
        }
        Self { strategies: map }
    }

    /// Registry over the stock strategy set.
    pub fn with_default_strategies() -> Self {
        let strategies: Vec<SharedStrategy> = vec![Arc::new(StatisticalStrategy::new())];
        Self::new(strategies)
    }

    /// Look up the strategy for `metric`, case-insensitively.
    ///
    /// Absence means the metric is unsupported; turning that into a
    /// user-facing error is the caller's concern, the registry never
    /// raises one.
    pub fn resolve(&self, metric: &str) -> Option<&SharedStrategy> {
        self.strategies.get(&metric.to_lowercase())
    }

    /// Number of registered metric names.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check whether no metric is registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Sorted list of registered metric names.
    pub fn supported_metrics(&self) -> Vec<String> {
        let mut metrics: Vec<String> = self.strategies.keys().cloned().collect();
        metrics.sort();
        metrics
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("metrics", &self.supported_metrics())
            .finish()
    }
}
