//! Rolling-window statistics: trailing extrema, Pearson correlation, close
//! variance, and standard deviation of simple returns.

use crate::domain::candle::Candle;
use crate::domain::indicator::cache::IndicatorCache;
use crate::domain::indicator::{mean, IndicatorKind, IndicatorPoint, IndicatorSeries};
use std::sync::Arc;

/// Trailing minimum of the low over the window ending at each index.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_rolling_min(candles: &[Candle], period: usize) -> IndicatorSeries {
    assert!(period > 0, "rolling window period must be positive");
    rolling_extremum(
        candles,
        period,
        IndicatorKind::RollingMin(period),
        |c| c.low,
        f64::min,
        f64::INFINITY,
    )
}

/// Trailing maximum of the high over the window ending at each index.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_rolling_max(candles: &[Candle], period: usize) -> IndicatorSeries {
    assert!(period > 0, "rolling window period must be positive");
    rolling_extremum(
        candles,
        period,
        IndicatorKind::RollingMax(period),
        |c| c.high,
        f64::max,
        f64::NEG_INFINITY,
    )
}

fn rolling_extremum(
    candles: &[Candle],
    period: usize,
    kind: IndicatorKind,
    field: fn(&Candle) -> f64,
    pick: fn(f64, f64) -> f64,
    identity: f64,
) -> IndicatorSeries {
    if candles.len() < period {
        return IndicatorSeries::empty(kind);
    }

    let mut values = Vec::with_capacity(candles.len());
    for i in 0..candles.len() {
        if i < period - 1 {
            values.push(IndicatorPoint::invalid());
        } else {
            let extremum = candles[i + 1 - period..=i]
                .iter()
                .map(field)
                .fold(identity, pick);
            values.push(IndicatorPoint::simple(extremum));
        }
    }

    IndicatorSeries { kind, values }
}

/// Trailing-window Pearson correlation of two aligned value series.
///
/// Returns an empty series when the inputs differ in length or are shorter
/// than `period`. A window where either side has zero variance yields 0.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_rolling_correlation(x: &[f64], y: &[f64], period: usize) -> IndicatorSeries {
    assert!(period > 0, "correlation period must be positive");

    let kind = IndicatorKind::RollingCorrelation(period);
    if x.len() != y.len() || x.len() < period {
        return IndicatorSeries::empty(kind);
    }

    let mut values = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        if i < period - 1 {
            values.push(IndicatorPoint::invalid());
        } else {
            let window = i + 1 - period..=i;
            values.push(IndicatorPoint::simple(pearson(
                &x[window.clone()],
                &y[window],
            )));
        }
    }

    IndicatorSeries { kind, values }
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }

    let n = x.len() as f64;
    let (mut sum_x, mut sum_y) = (0.0, 0.0);
    let (mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0);

    for (&a, &b) in x.iter().zip(y) {
        sum_x += a;
        sum_y += b;
        sum_xy += a * b;
        sum_x2 += a * a;
        sum_y2 += b * b;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denom_x = n * sum_x2 - sum_x * sum_x;
    let denom_y = n * sum_y2 - sum_y * sum_y;

    if denom_x <= 0.0 || denom_y <= 0.0 {
        return 0.0;
    }
    numerator / (denom_x.sqrt() * denom_y.sqrt())
}

/// Rolling population variance of the close over the trailing window ending
/// at each index. Used as a raw volatility measure by oscillator filters.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_rolling_variance(candles: &[Candle], period: usize) -> IndicatorSeries {
    assert!(period > 0, "rolling variance period must be positive");

    let kind = IndicatorKind::RollingVariance(period);
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
        let avg = window.iter().map(|c| c.close).sum::<f64>() / period as f64;
        let variance = window
            .iter()
            .map(|c| {
                let diff = c.close - avg;
                diff * diff
            })
            .sum::<f64>()
            / period as f64;
        values.push(IndicatorPoint::simple(variance));
    }

    IndicatorSeries { kind, values }
}

/// Memoizing variant of [`calculate_rolling_variance`].
pub fn calculate_rolling_variance_cached(
    cache: &IndicatorCache,
    candles: &[Candle],
    period: usize,
) -> Arc<IndicatorSeries> {
    let fingerprint = IndicatorCache::fingerprint_closes(candles);
    cache.get_or_compute(IndicatorKind::RollingVariance(period), fingerprint, || {
        calculate_rolling_variance(candles, period)
    })
}

/// Rolling volatility: population standard deviation of the simple returns
/// inside the `period`-price window ending at index i-1.
///
/// Needs `period + 1` prices; the first valid point is index `period`. A
/// window shorter than 3 prices has too few returns and stays at 0.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_returns_stddev(prices: &[f64], period: usize) -> IndicatorSeries {
    assert!(period > 0, "returns-stddev period must be positive");

    let kind = IndicatorKind::ReturnsStdDev(period);
    if prices.len() < period + 1 {
        return IndicatorSeries::empty(kind);
    }

    let mut values = vec![IndicatorPoint::invalid(); prices.len()];
    if period < 3 {
        return IndicatorSeries { kind, values };
    }

    for i in period..prices.len() {
        let window = &prices[i - period..i];
        let returns: Vec<f64> = window
            .windows(2)
            .map(|pair| (pair[1] - pair[0]) / pair[0])
            .collect();

        let avg = mean(&returns);
        let variance = returns.iter().map(|r| (r - avg) * (r - avg)).sum::<f64>()
            / returns.len() as f64;
        values[i] = IndicatorPoint::simple(variance.sqrt());
    }

    IndicatorSeries { kind, values }
}

/// Memoizing variant of [`calculate_returns_stddev`].
pub fn calculate_returns_stddev_cached(
    cache: &IndicatorCache,
    prices: &[f64],
    period: usize,
) -> Arc<IndicatorSeries> {
    let fingerprint = IndicatorCache::fingerprint_values(prices);
    cache.get_or_compute(IndicatorKind::ReturnsStdDev(period), fingerprint, || {
        calculate_returns_stddev(prices, period)
    })
}
