//! Exponential Moving Average indicator.
//!
//! k = 2/(n+1), seed with the first SMA at index n-1, then
//! EMA[i] = C[i]*k + EMA[i-1]*(1-k).
//! Warmup: first (n-1) points are invalid.

use crate::domain::candle::Candle;
use crate::domain::indicator::{ema_values, IndicatorKind, IndicatorPoint, IndicatorSeries};

/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_ema(candles: &[Candle], period: usize) -> IndicatorSeries {
    assert!(period > 0, "EMA period must be positive");

    let kind = IndicatorKind::Ema(period);
    if candles.len() < period {
        return IndicatorSeries::empty(kind);
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let ema = ema_values(&closes, period);

    let values = ema
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if i < period - 1 {
                IndicatorPoint::invalid()
            } else {
                IndicatorPoint::simple(v)
            }
        })
        .collect();

    IndicatorSeries { kind, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::sma::calculate_sma;
    use crate::domain::indicator::test_support::make_candles;

    #[test]
    fn ema_warmup() {
        let candles = make_candles(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let series = calculate_ema(&candles, 3);

        assert!(!series.values[0].valid);
        assert!(!series.values[1].valid);
        assert!(series.values[2].valid);
        assert!(series.values[3].valid);
        assert!(series.values[4].valid);
    }

    #[test]
    fn ema_seed_equals_sma_at_seed_index() {
        let candles = make_candles(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let ema = calculate_ema(&candles, 3);
        let sma = calculate_sma(&candles, 3);

        assert!((ema.simple(2).unwrap() - sma.simple(2).unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn ema_recursive_calculation() {
        let candles = make_candles(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let series = calculate_ema(&candles, 3);

        let k: f64 = 2.0 / 4.0;
        let seed = (10.0 + 20.0 + 30.0) / 3.0;
        let ema_3 = 40.0 * k + seed * (1.0 - k);
        let ema_4 = 50.0 * k + ema_3 * (1.0 - k);

        assert!((series.simple(3).unwrap() - ema_3).abs() < f64::EPSILON);
        assert!((series.simple(4).unwrap() - ema_4).abs() < f64::EPSILON);
    }

    #[test]
    fn ema_equal_prices_stays_flat() {
        let candles = make_candles(&[100.0, 100.0, 100.0, 100.0]);
        let series = calculate_ema(&candles, 3);

        for i in 2..4 {
            assert!((series.simple(i).unwrap() - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn ema_insufficient_history() {
        let candles = make_candles(&[10.0, 20.0]);
        let series = calculate_ema(&candles, 3);
        assert!(series.is_empty());
    }

    #[test]
    #[should_panic(expected = "period must be positive")]
    fn ema_zero_period_panics() {
        let candles = make_candles(&[10.0]);
        calculate_ema(&candles, 0);
    }
}
