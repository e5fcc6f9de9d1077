//! Relative Strength Index with Wilder smoothing.
//!
//! Seed: simple averages of the gains and losses over the first n close
//! differences. Thereafter avg = (avg*(n-1) + x)/n for each side.
//! RSI = 100 - 100/(1 + avgGain/avgLoss), exactly 100 when avgLoss is 0.
//! Needs n+1 candles; the first valid point is index n.

use crate::domain::candle::Candle;
use crate::domain::indicator::cache::IndicatorCache;
use crate::domain::indicator::{mean, IndicatorKind, IndicatorPoint, IndicatorSeries};
use std::sync::Arc;

/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_rsi(candles: &[Candle], period: usize) -> IndicatorSeries {
    assert!(period > 0, "RSI period must be positive");

    let kind = IndicatorKind::Rsi(period);
    if candles.len() < period + 1 {
        return IndicatorSeries::empty(kind);
    }

    let mut values = vec![IndicatorPoint::invalid(); period];
    values.reserve(candles.len() - period);

    let mut gains = Vec::with_capacity(period);
    let mut losses = Vec::with_capacity(period);
    for i in 1..=period {
        let change = candles[i].close - candles[i - 1].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let mut avg_gain = mean(&gains);
    let mut avg_loss = mean(&losses);
    values.push(IndicatorPoint::simple(rsi_from_averages(avg_gain, avg_loss)));

    for i in period + 1..candles.len() {
        let change = candles[i].close - candles[i - 1].close;
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);

        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
        values.push(IndicatorPoint::simple(rsi_from_averages(avg_gain, avg_loss)));
    }

    IndicatorSeries { kind, values }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Memoizing variant: looks the series up in `cache` under
/// (RSI(period), fingerprint of the closes) before computing.
pub fn calculate_rsi_cached(
    cache: &IndicatorCache,
    candles: &[Candle],
    period: usize,
) -> Arc<IndicatorSeries> {
    let fingerprint = IndicatorCache::fingerprint_closes(candles);
    cache.get_or_compute(IndicatorKind::Rsi(period), fingerprint, || {
        calculate_rsi(candles, period)
    })
}
