//! Signal replay engine.
//!
//! A single deterministic pass over a candle sequence and its parallel signal
//! sequence, driven by a FLAT/LONG state machine. Only matched BUY -> SELL
//! round trips count: a SELL with no open position is ignored, a BUY on top of
//! an open position is ignored, and a position still open when the sequence
//! ends is discarded without contributing to the result.

use crate::domain::candle::{Candle, Signal};
use crate::domain::error::WavetraderError;

/// One completed round trip. Internal to the replay loop.
#[derive(Debug, Clone, Copy)]
struct OpenPosition {
    entry_price: f64,
}

/// Outcome of one backtest run.
///
/// `total_profit` is the sum of per-trade fractional returns.
/// `final_portfolio` compounds one unit of starting capital through the same
/// trades. `equity_curve`, when requested, holds the portfolio value after
/// every candle: flat while holding or idle, stepping only at trade exits.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestResult {
    pub trade_count: usize,
    pub total_profit: f64,
    pub final_portfolio: f64,
    pub equity_curve: Option<Vec<f64>>,
}

impl BacktestResult {
    /// Strict improvement by realized profit. Equal profit is not an
    /// improvement, so the first candidate seen wins exact ties.
    pub fn improves_on(&self, other: &BacktestResult) -> bool {
        self.total_profit > other.total_profit
    }
}

/// Replay `signals` against `candles` with the given per-fill slippage.
///
/// Slippage works against the position holder on both sides: buys fill at
/// `close + slippage`, sells at `close - slippage`.
pub fn run_backtest(
    candles: &[Candle],
    signals: &[Signal],
    slippage: f64,
) -> Result<BacktestResult, WavetraderError> {
    replay(candles, signals, slippage, false)
}

/// Same as [`run_backtest`] but also records the per-candle equity curve.
pub fn run_backtest_with_equity(
    candles: &[Candle],
    signals: &[Signal],
    slippage: f64,
) -> Result<BacktestResult, WavetraderError> {
    replay(candles, signals, slippage, true)
}

fn replay(
    candles: &[Candle],
    signals: &[Signal],
    slippage: f64,
    with_equity: bool,
) -> Result<BacktestResult, WavetraderError> {
    if candles.len() != signals.len() {
        return Err(WavetraderError::SignalLengthMismatch {
            candles: candles.len(),
            signals: signals.len(),
        });
    }

    let mut trade_count = 0;
    let mut total_profit = 0.0;
    let mut portfolio = 1.0;
    let mut position: Option<OpenPosition> = None;
    let mut equity_curve = if with_equity {
        Some(Vec::with_capacity(candles.len()))
    } else {
        None
    };

    for (candle, signal) in candles.iter().zip(signals) {
        match (position, signal) {
            (None, Signal::Buy) => {
                position = Some(OpenPosition {
                    entry_price: candle.close + slippage,
                });
            }
            (Some(open), Signal::Sell) => {
                let exit_price = candle.close - slippage;
                let trade_return = (exit_price - open.entry_price) / open.entry_price;

                trade_count += 1;
                total_profit += trade_return;
                portfolio *= 1.0 + trade_return;
                position = None;
            }
            // SELL while flat, BUY while long, and HOLD are all no-ops.
            _ => {}
        }

        if let Some(curve) = &mut equity_curve {
            curve.push(portfolio);
        }
    }

    Ok(BacktestResult {
        trade_count,
        total_profit,
        final_portfolio: portfolio,
        equity_curve,
    })
}
