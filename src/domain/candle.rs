//! Candle and signal value types.

use chrono::{DateTime, Utc};

/// Build a price from the wire format's integer `units` and fractional
/// `nano` parts. Performed once at parse time; thereafter prices are plain
/// `f64` values.
pub fn price_from_parts(units: i64, nano: i32) -> f64 {
    units as f64 + nano as f64 / 1_000_000_000.0
}

/// One OHLCV price bar for a fixed time interval.
///
/// Prices, volume and timestamp are precomputed at load time. No invariant
/// between open/high/low/close is enforced; malformed input propagates as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub time: DateTime<Utc>,
    pub is_complete: bool,
    pub source: String,
}

impl Candle {
    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// Per-candle trading intent emitted by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Signal {
    #[default]
    Hold,
    Buy,
    Sell,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Hold => write!(f, "HOLD"),
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_candle() -> Candle {
        Candle {
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 50_000.0,
            time: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            is_complete: true,
            source: "CANDLE_SOURCE_EXCHANGE".into(),
        }
    }

    #[test]
    fn price_from_units_and_nano() {
        let p = price_from_parts(123, 450_000_000);
        assert!((p - 123.45).abs() < 1e-12);
    }

    #[test]
    fn price_from_negative_nano() {
        // Negative quotes carry the sign on both parts.
        let p = price_from_parts(-2, -500_000_000);
        assert!((p - (-2.5)).abs() < 1e-12);
    }

    #[test]
    fn typical_price() {
        let candle = sample_candle();
        let expected = (110.0 + 90.0 + 105.0) / 3.0;
        assert!((candle.typical_price() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn signal_display() {
        assert_eq!(Signal::Hold.to_string(), "HOLD");
        assert_eq!(Signal::Buy.to_string(), "BUY");
        assert_eq!(Signal::Sell.to_string(), "SELL");
    }

    #[test]
    fn signal_default_is_hold() {
        assert_eq!(Signal::default(), Signal::Hold);
    }
}
