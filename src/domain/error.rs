//! Domain error types.

/// Top-level error type for wavetrader.
#[derive(Debug, thiserror::Error)]
pub enum WavetraderError {
    #[error("signal length mismatch: {candles} candles but {signals} signals")]
    SignalLengthMismatch { candles: usize, signals: usize },

    #[error("forward wavelet input length must be even, got {len}")]
    OddWaveletInput { len: usize },

    #[error("wavelet coefficient length mismatch: {approx} approximation vs {detail} detail")]
    WaveletLengthMismatch { approx: usize, detail: usize },

    #[error("candle parse error: {reason}")]
    CandleParse { reason: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
