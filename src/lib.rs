//! wavetrader — indicator computation and signal-replay backtesting for
//! rule-based trading strategies over OHLCV candle series.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
