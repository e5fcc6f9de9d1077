//! Data access port trait.

use crate::domain::candle::Candle;
use crate::domain::error::WavetraderError;

pub trait DataPort {
    /// Load the full candle history for one instrument, ascending by time.
    fn load_candles(&self, instrument: &str) -> Result<Vec<Candle>, WavetraderError>;
}
