//! Moving-average channel.
//!
//! Spreads the fast/slow SMA gap around the slow average:
//! upper = slowSMA + (fastSMA - slowSMA) * multiplier,
//! lower = slowSMA - (fastSMA - slowSMA) * multiplier.
//! Warmup: points before both averages are full are invalid.

use crate::domain::candle::Candle;
use crate::domain::indicator::{
    sma_values, IndicatorKind, IndicatorPoint, IndicatorSeries, IndicatorValue,
};

/// # Panics
///
/// Panics if either period is zero.
pub fn calculate_ma_channel(
    candles: &[Candle],
    fast: usize,
    slow: usize,
    multiplier: f64,
) -> IndicatorSeries {
    assert!(fast > 0 && slow > 0, "MA channel periods must be positive");

    let kind = IndicatorKind::MaChannel {
        fast,
        slow,
        mult_x100: (multiplier * 100.0).round() as u32,
    };
    if candles.len() < slow.max(fast) {
        return IndicatorSeries::empty(kind);
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast_ma = sma_values(&closes, fast);
    let slow_ma = sma_values(&closes, slow);

    let warmup = slow.max(fast) - 1;
    let values = (0..candles.len())
        .map(|i| {
            if i < warmup {
                return IndicatorPoint {
                    valid: false,
                    value: IndicatorValue::Channel {
                        upper: 0.0,
                        lower: 0.0,
                    },
                };
            }

            let diff = fast_ma[i] - slow_ma[i];
            IndicatorPoint {
                valid: true,
                value: IndicatorValue::Channel {
                    upper: slow_ma[i] + diff * multiplier,
                    lower: slow_ma[i] - diff * multiplier,
                },
            }
        })
        .collect();

    IndicatorSeries { kind, values }
}
