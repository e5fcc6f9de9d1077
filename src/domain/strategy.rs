//! Strategy contract and registry.
//!
//! A strategy turns a candle sequence into a parallel signal sequence; the
//! replay engine does the rest. The registry is built explicitly by the
//! composition root from a list of strategy instances, so the set of
//! available strategies is visible in one place rather than assembled by
//! ambient initialization.

use crate::domain::candle::{Candle, Signal};
use std::collections::HashMap;

pub trait Strategy: Send + Sync {
    /// Stable lookup name, unique within one registry.
    fn name(&self) -> &str;

    /// Emit one signal per candle. Implementations must return a sequence of
    /// exactly `candles.len()` elements and emit `Hold` wherever an indicator
    /// they rely on has no valid value.
    fn signals(&self, candles: &[Candle]) -> Vec<Signal>;
}

#[derive(Default)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Build a registry from an explicit strategy list. A later entry with a
    /// duplicate name replaces the earlier one.
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        let strategies = strategies
            .into_iter()
            .map(|s| (s.name().to_owned(), s))
            .collect();
        StrategyRegistry { strategies }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Strategy> {
        self.strategies.get(name).map(|s| s.as_ref())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
