//! MACD (Moving Average Convergence Divergence) indicator.
//!
//! MACD line = EMA(fast) - EMA(slow)
//! Signal line = SMA-seeded EMA(signal) of the MACD line, seeded from the
//! line's first valid index (the pure EMA-of-MACD convention)
//! Histogram = MACD line - signal line
//!
//! Warmup: (slow - 1) + (signal - 1) points.

use crate::domain::candle::Candle;
use crate::domain::indicator::{
    ema_values, IndicatorKind, IndicatorPoint, IndicatorSeries, IndicatorValue,
};

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

/// # Panics
///
/// Panics if any period is zero.
pub fn calculate_macd(
    candles: &[Candle],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> IndicatorSeries {
    assert!(
        fast > 0 && slow > 0 && signal_period > 0,
        "MACD periods must be positive"
    );

    let kind = IndicatorKind::Macd {
        fast,
        slow,
        signal: signal_period,
    };
    if candles.len() < slow.max(fast) {
        return IndicatorSeries::empty(kind);
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let ema_fast = ema_values(&closes, fast);
    let ema_slow = ema_values(&closes, slow);

    let line_warmup = slow.max(fast) - 1;
    let mut macd_line = vec![0.0; candles.len()];
    for i in line_warmup..candles.len() {
        macd_line[i] = ema_fast[i] - ema_slow[i];
    }

    // Signal line: EMA over the MACD line, seeded with the SMA of its first
    // `signal_period` valid values so warm-up zeros never enter the seed.
    let mut signal_line = vec![0.0; candles.len()];
    let signal_warmup = line_warmup + signal_period - 1;
    if signal_warmup < candles.len() {
        let k = 2.0 / (signal_period as f64 + 1.0);
        let seed: f64 = macd_line[line_warmup..=signal_warmup].iter().sum::<f64>()
            / signal_period as f64;
        signal_line[signal_warmup] = seed;

        let mut signal_ema = seed;
        for i in signal_warmup + 1..candles.len() {
            signal_ema = macd_line[i] * k + signal_ema * (1.0 - k);
            signal_line[i] = signal_ema;
        }
    }

    let values = (0..candles.len())
        .map(|i| {
            let valid = i >= signal_warmup;
            IndicatorPoint {
                valid,
                value: IndicatorValue::Macd {
                    line: macd_line[i],
                    signal: signal_line[i],
                    histogram: macd_line[i] - signal_line[i],
                },
            }
        })
        .collect();

    IndicatorSeries { kind, values }
}

pub fn calculate_macd_default(candles: &[Candle]) -> IndicatorSeries {
    calculate_macd(candles, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}
