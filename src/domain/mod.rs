//! Core domain types and engines.

pub mod candle;
pub mod indicator;
pub mod wavelet;
pub mod backtest;
pub mod strategy;
pub mod error;
