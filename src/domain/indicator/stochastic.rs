//! Stochastic oscillator (%K and %D).
//!
//! %K = 100 * (C - LL) / (HH - LL) over the trailing k_period window, with
//! the neutral fallback 50 when the window's high equals its low.
//! %D = SMA(%K, d_period).
//! Warmup: a point is valid once both lines are, i.e. from index
//! (k_period - 1) + (d_period - 1).

use crate::domain::candle::Candle;
use crate::domain::indicator::{
    sma_values, IndicatorKind, IndicatorPoint, IndicatorSeries, IndicatorValue,
};

/// # Panics
///
/// Panics if either period is zero.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: usize,
    d_period: usize,
) -> IndicatorSeries {
    assert!(
        k_period > 0 && d_period > 0,
        "stochastic periods must be positive"
    );

    let kind = IndicatorKind::Stochastic { k_period, d_period };
    if candles.len() < k_period {
        return IndicatorSeries::empty(kind);
    }

    let mut k_values = vec![0.0; candles.len()];
    for i in k_period - 1..candles.len() {
        let window = &candles[i + 1 - k_period..=i];
        let lowest_low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let highest_high = window
            .iter()
            .map(|c| c.high)
            .fold(f64::NEG_INFINITY, f64::max);

        k_values[i] = if highest_high - lowest_low == 0.0 {
            50.0
        } else {
            100.0 * (candles[i].close - lowest_low) / (highest_high - lowest_low)
        };
    }

    let d_values = sma_values(&k_values, d_period);
    let warmup = k_period - 1 + d_period - 1;

    let values = (0..candles.len())
        .map(|i| IndicatorPoint {
            valid: i >= warmup,
            value: IndicatorValue::Stochastic {
                k: k_values[i],
                d: d_values.get(i).copied().unwrap_or(0.0),
            },
        })
        .collect();

    IndicatorSeries { kind, values }
}
