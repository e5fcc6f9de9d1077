//! Memoization cache for indicator series.
//!
//! An explicit cache object owned by the calling context (typically one per
//! backtest or grid-search run), safe to share across worker threads. The key
//! pairs the indicator identity with a fingerprint of the actual input data,
//! so evaluating a second dataset with the same (kind, period) can never
//! return a stale series.

use crate::domain::candle::Candle;
use crate::domain::indicator::{IndicatorKind, IndicatorSeries};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    kind: IndicatorKind,
    fingerprint: u64,
}

#[derive(Debug, Default)]
pub struct IndicatorCache {
    map: RwLock<HashMap<CacheKey, Arc<IndicatorSeries>>>,
}

impl IndicatorCache {
    pub fn new() -> Self {
        IndicatorCache {
            map: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached series for `(kind, fingerprint)`, computing and
    /// inserting it with `compute` on a miss.
    pub fn get_or_compute(
        &self,
        kind: IndicatorKind,
        fingerprint: u64,
        compute: impl FnOnce() -> IndicatorSeries,
    ) -> Arc<IndicatorSeries> {
        let key = CacheKey { kind, fingerprint };

        if let Some(series) = self.map.read().expect("indicator cache poisoned").get(&key) {
            return Arc::clone(series);
        }

        let series = Arc::new(compute());
        let mut map = self.map.write().expect("indicator cache poisoned");
        // A racing writer may have inserted first; keep whichever is present.
        Arc::clone(map.entry(key).or_insert(series))
    }

    pub fn len(&self) -> usize {
        self.map.read().expect("indicator cache poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.map.write().expect("indicator cache poisoned").clear();
    }

    /// Content identity of a candle dataset for close-price indicators.
    pub fn fingerprint_closes(candles: &[Candle]) -> u64 {
        let mut hasher = DefaultHasher::new();
        candles.len().hash(&mut hasher);
        for candle in candles {
            candle.close.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Content identity of a raw value sequence.
    pub fn fingerprint_values(values: &[f64]) -> u64 {
        let mut hasher = DefaultHasher::new();
        values.len().hash(&mut hasher);
        for value in values {
            value.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}
