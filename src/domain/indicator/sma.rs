//! Simple Moving Average indicator.
//!
//! SMA(n)[i] = mean of the n closing prices ending at i.
//! Warmup: first (n-1) points are invalid.

use crate::domain::candle::Candle;
use crate::domain::indicator::cache::IndicatorCache;
use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use std::sync::Arc;

/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_sma(candles: &[Candle], period: usize) -> IndicatorSeries {
    assert!(period > 0, "SMA period must be positive");

    let kind = IndicatorKind::Sma(period);
    if candles.len() < period {
        return IndicatorSeries::empty(kind);
    }

    let mut values = Vec::with_capacity(candles.len());
    let mut sum: f64 = candles[..period - 1].iter().map(|c| c.close).sum();

    for (i, candle) in candles.iter().enumerate() {
        if i < period - 1 {
            values.push(IndicatorPoint::invalid());
        } else {
            sum += candle.close;
            values.push(IndicatorPoint::simple(sum / period as f64));
            sum -= candles[i + 1 - period].close;
        }
    }

    IndicatorSeries { kind, values }
}

/// Memoizing variant: looks the series up in `cache` under
/// (SMA(period), fingerprint of the closes) before computing.
pub fn calculate_sma_cached(
    cache: &IndicatorCache,
    candles: &[Candle],
    period: usize,
) -> Arc<IndicatorSeries> {
    let fingerprint = IndicatorCache::fingerprint_closes(candles);
    cache.get_or_compute(IndicatorKind::Sma(period), fingerprint, || {
        calculate_sma(candles, period)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::test_support::make_candles;

    #[test]
    fn sma_warmup_and_length() {
        let candles = make_candles(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let series = calculate_sma(&candles, 3);

        assert_eq!(series.values.len(), 5);
        assert!(!series.values[0].valid);
        assert!(!series.values[1].valid);
        assert!(series.values[2].valid);
    }

    #[test]
    fn sma_window_means() {
        let candles = make_candles(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let series = calculate_sma(&candles, 3);

        assert!((series.simple(2).unwrap() - 20.0).abs() < 1e-12);
        assert!((series.simple(3).unwrap() - 30.0).abs() < 1e-12);
        assert!((series.simple(4).unwrap() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn sma_period_1_tracks_close() {
        let candles = make_candles(&[10.0, 20.0, 30.0]);
        let series = calculate_sma(&candles, 1);

        for (i, &close) in [10.0, 20.0, 30.0].iter().enumerate() {
            assert!((series.simple(i).unwrap() - close).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn sma_insufficient_history() {
        let candles = make_candles(&[10.0, 20.0]);
        let series = calculate_sma(&candles, 3);
        assert!(series.is_empty());
    }

    #[test]
    #[should_panic(expected = "period must be positive")]
    fn sma_zero_period_panics() {
        let candles = make_candles(&[10.0, 20.0]);
        calculate_sma(&candles, 0);
    }

    #[test]
    fn sma_sentinel_zero_in_warmup() {
        let candles = make_candles(&[10.0, 20.0, 30.0]);
        let series = calculate_sma(&candles, 3);

        use crate::domain::indicator::IndicatorValue;
        for point in &series.values[..2] {
            assert_eq!(point.value, IndicatorValue::Simple(0.0));
        }
    }
}
