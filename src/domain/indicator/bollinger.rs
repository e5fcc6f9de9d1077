//! Bollinger Bands indicator.
//!
//! Middle = SMA(n) of close; deviation = population stddev of the n closes
//! around the middle; upper/lower = middle +/- k * deviation.
//! Warmup: first (n-1) points are invalid.

use crate::domain::candle::Candle;
use crate::domain::indicator::{
    IndicatorKind, IndicatorPoint, IndicatorSeries, IndicatorValue,
};

/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_bollinger(candles: &[Candle], period: usize, k: f64) -> IndicatorSeries {
    assert!(period > 0, "Bollinger period must be positive");

    let kind = IndicatorKind::Bollinger {
        period,
        k_x100: (k * 100.0).round() as u32,
    };
    if candles.len() < period {
        return IndicatorSeries::empty(kind);
    }

    let mut values = Vec::with_capacity(candles.len());

    for i in 0..candles.len() {
        if i < period - 1 {
            values.push(IndicatorPoint::invalid());
            continue;
        }

        let window = &candles[i + 1 - period..=i];
        let middle = window.iter().map(|c| c.close).sum::<f64>() / period as f64;
        let variance = window
            .iter()
            .map(|c| {
                let diff = c.close - middle;
                diff * diff
            })
            .sum::<f64>()
            / period as f64;
        let dev = variance.sqrt() * k;

        values.push(IndicatorPoint {
            valid: true,
            value: IndicatorValue::Bollinger {
                upper: middle + dev,
                middle,
                lower: middle - dev,
            },
        });
    }

    IndicatorSeries { kind, values }
}
