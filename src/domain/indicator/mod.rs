//! Technical indicator library.
//!
//! One module per indicator. Every `calculate_*` function maps a candle (or
//! value) sequence to an [`IndicatorSeries`] of the same length, where leading
//! warm-up points carry `valid: false` and the value 0.0. Insufficient history
//! yields a series with empty `values` rather than an error; a zero period is
//! a caller bug and panics.
//!
//! Types:
//! - `IndicatorPoint`: one aligned output point with an explicit validity flag
//! - `IndicatorValue`: the different indicator output shapes
//! - `IndicatorKind`: indicator identity + parameters (also the cache key half)
//! - `IndicatorSeries`: the aligned output sequence

pub mod sma;
pub mod ema;
pub mod rsi;
pub mod macd;
pub mod bollinger;
pub mod cci;
pub mod stochastic;
pub mod obv;
pub mod rolling;
pub mod ma_channel;
pub mod cache;

pub use bollinger::calculate_bollinger;
pub use cache::IndicatorCache;
pub use cci::calculate_cci;
pub use ema::calculate_ema;
pub use ma_channel::calculate_ma_channel;
pub use macd::{calculate_macd, calculate_macd_default};
pub use obv::calculate_obv;
pub use rolling::{
    calculate_returns_stddev, calculate_returns_stddev_cached, calculate_rolling_correlation,
    calculate_rolling_max, calculate_rolling_min, calculate_rolling_variance,
    calculate_rolling_variance_cached,
};
pub use rsi::{calculate_rsi, calculate_rsi_cached};
pub use sma::{calculate_sma, calculate_sma_cached};
pub use stochastic::calculate_stochastic;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    pub valid: bool,
    pub value: IndicatorValue,
}

impl IndicatorPoint {
    /// Warm-up point: not yet computed, sentinel value 0.0.
    pub fn invalid() -> Self {
        IndicatorPoint {
            valid: false,
            value: IndicatorValue::Simple(0.0),
        }
    }

    pub fn simple(value: f64) -> Self {
        IndicatorPoint {
            valid: true,
            value: IndicatorValue::Simple(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue {
    Simple(f64),
    Macd {
        line: f64,
        signal: f64,
        histogram: f64,
    },
    Stochastic {
        k: f64,
        d: f64,
    },
    Channel {
        upper: f64,
        lower: f64,
    },
    Bollinger {
        upper: f64,
        middle: f64,
        lower: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Sma(usize),
    Ema(usize),
    Rsi(usize),
    Cci(usize),
    Obv,
    RollingMin(usize),
    RollingMax(usize),
    RollingCorrelation(usize),
    RollingVariance(usize),
    ReturnsStdDev(usize),
    Macd {
        fast: usize,
        slow: usize,
        signal: usize,
    },
    Stochastic {
        k_period: usize,
        d_period: usize,
    },
    Bollinger {
        period: usize,
        /// Band multiplier scaled by 100 so the kind stays hashable.
        k_x100: u32,
    },
    MaChannel {
        fast: usize,
        slow: usize,
        /// Channel multiplier scaled by 100 so the kind stays hashable.
        mult_x100: u32,
    },
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::Sma(period) => write!(f, "SMA({})", period),
            IndicatorKind::Ema(period) => write!(f, "EMA({})", period),
            IndicatorKind::Rsi(period) => write!(f, "RSI({})", period),
            IndicatorKind::Cci(period) => write!(f, "CCI({})", period),
            IndicatorKind::Obv => write!(f, "OBV"),
            IndicatorKind::RollingMin(period) => write!(f, "RMIN({})", period),
            IndicatorKind::RollingMax(period) => write!(f, "RMAX({})", period),
            IndicatorKind::RollingCorrelation(period) => write!(f, "RCORR({})", period),
            IndicatorKind::RollingVariance(period) => write!(f, "RVAR({})", period),
            IndicatorKind::ReturnsStdDev(period) => write!(f, "RSTD({})", period),
            IndicatorKind::Macd { fast, slow, signal } => {
                write!(f, "MACD({},{},{})", fast, slow, signal)
            }
            IndicatorKind::Stochastic { k_period, d_period } => {
                write!(f, "STOCHASTIC({},{})", k_period, d_period)
            }
            IndicatorKind::Bollinger { period, k_x100 } => {
                write!(f, "BOLLINGER({},{})", period, *k_x100 as f64 / 100.0)
            }
            IndicatorKind::MaChannel {
                fast,
                slow,
                mult_x100,
            } => {
                write!(
                    f,
                    "MACHANNEL({},{},{})",
                    fast,
                    slow,
                    *mult_x100 as f64 / 100.0
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub kind: IndicatorKind,
    pub values: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// The "insufficient history" result: a series with no points.
    pub fn empty(kind: IndicatorKind) -> Self {
        IndicatorSeries {
            kind,
            values: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Valid `Simple` value at `index`, if computed.
    pub fn simple(&self, index: usize) -> Option<f64> {
        match self.values.get(index) {
            Some(IndicatorPoint {
                valid: true,
                value: IndicatorValue::Simple(v),
            }) => Some(*v),
            _ => None,
        }
    }
}

/// SMA over a raw value sequence: zeros for the first `period - 1` slots,
/// empty output when the input is shorter than `period`.
pub(crate) fn sma_values(values: &[f64], period: usize) -> Vec<f64> {
    if values.len() < period {
        return Vec::new();
    }

    let mut sma = vec![0.0; values.len()];
    let mut sum: f64 = values[..period - 1].iter().sum();
    for i in period - 1..values.len() {
        sum += values[i];
        sma[i] = sum / period as f64;
        sum -= values[i + 1 - period];
    }
    sma
}

/// SMA-seeded EMA over a raw value sequence: zeros before index `period - 1`,
/// seed equal to the first SMA, then the `k = 2/(period+1)` recurrence.
/// Empty output when the input is shorter than `period`.
pub(crate) fn ema_values(values: &[f64], period: usize) -> Vec<f64> {
    if values.len() < period {
        return Vec::new();
    }

    let mut ema = vec![0.0; values.len()];
    let k = 2.0 / (period as f64 + 1.0);

    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    ema[period - 1] = seed;

    for i in period..values.len() {
        ema[i] = values[i] * k + ema[i - 1] * (1.0 - k);
    }
    ema
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
