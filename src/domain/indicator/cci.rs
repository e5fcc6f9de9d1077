//! Commodity Channel Index.
//!
//! CCI = (TP - SMA(TP, n)) / (0.015 * mean absolute deviation), where TP is
//! the typical price (H+L+C)/3 over the trailing window ending at i.
//! A zero mean deviation yields CCI = 0.
//! Warmup: first (n-1) points are invalid.

use crate::domain::candle::Candle;
use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};

/// # Panics
///
/// Panics if `period` is zero.
pub fn calculate_cci(candles: &[Candle], period: usize) -> IndicatorSeries {
    assert!(period > 0, "CCI period must be positive");

    let kind = IndicatorKind::Cci(period);
    if candles.len() < period {
        return IndicatorSeries::empty(kind);
    }

    let typical: Vec<f64> = candles.iter().map(|c| c.typical_price()).collect();
    let mut values = Vec::with_capacity(candles.len());

    for i in 0..candles.len() {
        if i < period - 1 {
            values.push(IndicatorPoint::invalid());
            continue;
        }

        let window = &typical[i + 1 - period..=i];
        let ma = window.iter().sum::<f64>() / period as f64;
        let mean_deviation =
            window.iter().map(|tp| (tp - ma).abs()).sum::<f64>() / period as f64;

        let cci = if mean_deviation == 0.0 {
            0.0
        } else {
            (typical[i] - ma) / (0.015 * mean_deviation)
        };
        values.push(IndicatorPoint::simple(cci));
    }

    IndicatorSeries { kind, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::test_support::{make_candles, make_hlc_candles};

    #[test]
    fn cci_warmup() {
        let candles = make_hlc_candles(&[
            (110.0, 90.0, 100.0),
            (115.0, 95.0, 105.0),
            (120.0, 100.0, 110.0),
            (118.0, 98.0, 108.0),
        ]);
        let series = calculate_cci(&candles, 3);

        assert_eq!(series.values.len(), 4);
        assert!(!series.values[0].valid);
        assert!(!series.values[1].valid);
        assert!(series.values[2].valid);
        assert!(series.values[3].valid);
    }

    #[test]
    fn cci_manual_window() {
        let candles = make_hlc_candles(&[
            (12.0, 8.0, 10.0),  // tp = 10
            (22.0, 18.0, 20.0), // tp = 20
            (32.0, 28.0, 30.0), // tp = 30
        ]);
        let series = calculate_cci(&candles, 3);

        // ma = 20, mean deviation = (10 + 0 + 10)/3
        let md = 20.0 / 3.0;
        let expected = (30.0 - 20.0) / (0.015 * md);
        assert!((series.simple(2).unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn cci_zero_deviation_falls_back_to_zero() {
        let candles = make_candles(&[100.0, 100.0, 100.0, 100.0]);
        let series = calculate_cci(&candles, 3);

        assert!(series.values[2].valid);
        assert!((series.simple(2).unwrap() - 0.0).abs() < f64::EPSILON);
        assert!((series.simple(3).unwrap() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cci_insufficient_history() {
        let candles = make_candles(&[100.0, 101.0]);
        let series = calculate_cci(&candles, 3);
        assert!(series.is_empty());
    }

    #[test]
    #[should_panic(expected = "period must be positive")]
    fn cci_zero_period_panics() {
        let candles = make_candles(&[100.0]);
        calculate_cci(&candles, 0);
    }
}
