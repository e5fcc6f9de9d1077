//! JSON file data adapter.
//!
//! Reads exchange-API candle dumps: a top-level object with a `candles` array
//! where each price is a `{units, nano}` quotation (units as a decimal
//! string), volume is a decimal string, and time is RFC 3339. Prices, volume,
//! and time are converted exactly once at load; downstream code only ever
//! sees plain `f64` and `DateTime<Utc>` values.

use crate::domain::candle::{price_from_parts, Candle};
use crate::domain::error::WavetraderError;
use crate::ports::data_port::DataPort;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct QuotationDto {
    #[serde(default)]
    units: String,
    #[serde(default)]
    nano: i32,
}

impl QuotationDto {
    fn to_price(&self, field: &str) -> Result<f64, WavetraderError> {
        let units: i64 = self
            .units
            .parse()
            .map_err(|e| WavetraderError::CandleParse {
                reason: format!("invalid {} units '{}': {}", field, self.units, e),
            })?;
        Ok(price_from_parts(units, self.nano))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandleDto {
    open: QuotationDto,
    high: QuotationDto,
    low: QuotationDto,
    close: QuotationDto,
    #[serde(default)]
    volume: String,
    time: String,
    #[serde(default)]
    is_complete: bool,
    #[serde(default)]
    candle_source: String,
}

#[derive(Debug, Deserialize)]
struct GetCandlesResponse {
    candles: Vec<CandleDto>,
}

impl CandleDto {
    fn into_candle(self) -> Result<Candle, WavetraderError> {
        let time: DateTime<Utc> = DateTime::parse_from_rfc3339(&self.time)
            .map_err(|e| WavetraderError::CandleParse {
                reason: format!("invalid time '{}': {}", self.time, e),
            })?
            .with_timezone(&Utc);

        // The feed occasionally carries a blank or garbage volume; treat it
        // as zero rather than rejecting the whole candle.
        let volume = self.volume.parse::<i64>().map(|v| v as f64).unwrap_or(0.0);

        Ok(Candle {
            open: self.open.to_price("open")?,
            high: self.high.to_price("high")?,
            low: self.low.to_price("low")?,
            close: self.close.to_price("close")?,
            volume,
            time,
            is_complete: self.is_complete,
            source: self.candle_source,
        })
    }
}

pub struct JsonFileAdapter {
    base_path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn candle_path(&self, instrument: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", instrument))
    }
}

impl DataPort for JsonFileAdapter {
    fn load_candles(&self, instrument: &str) -> Result<Vec<Candle>, WavetraderError> {
        let path = self.candle_path(instrument);
        let content = fs::read_to_string(&path)?;
        let response: GetCandlesResponse = serde_json::from_str(&content)?;

        let mut candles = response
            .candles
            .into_iter()
            .map(CandleDto::into_candle)
            .collect::<Result<Vec<_>, _>>()?;

        candles.sort_by_key(|c| c.time);
        Ok(candles)
    }
}
