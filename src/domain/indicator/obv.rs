//! On-Balance Volume.
//!
//! Cumulative volume signed by close direction versus the previous close:
//! rising adds, falling subtracts, a tie leaves OBV unchanged. OBV[0] = 0.
//! Needs at least 2 candles.

use crate::domain::candle::Candle;
use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};

pub fn calculate_obv(candles: &[Candle]) -> IndicatorSeries {
    let kind = IndicatorKind::Obv;
    if candles.len() < 2 {
        return IndicatorSeries::empty(kind);
    }

    let mut values = Vec::with_capacity(candles.len());
    let mut obv = 0.0;
    values.push(IndicatorPoint::simple(obv));

    for i in 1..candles.len() {
        let current = candles[i].close;
        let previous = candles[i - 1].close;

        if current > previous {
            obv += candles[i].volume;
        } else if current < previous {
            obv -= candles[i].volume;
        }
        values.push(IndicatorPoint::simple(obv));
    }

    IndicatorSeries { kind, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::test_support::make_volume_candles;

    #[test]
    fn obv_accumulates_by_direction() {
        let candles = make_volume_candles(&[
            (100.0, 1000.0),
            (105.0, 2000.0), // up: +2000
            (103.0, 1500.0), // down: -1500
            (108.0, 3000.0), // up: +3000
        ]);
        let series = calculate_obv(&candles);

        assert_eq!(series.simple(0), Some(0.0));
        assert_eq!(series.simple(1), Some(2000.0));
        assert_eq!(series.simple(2), Some(500.0));
        assert_eq!(series.simple(3), Some(3500.0));
    }

    #[test]
    fn obv_unchanged_on_tie() {
        let candles = make_volume_candles(&[
            (100.0, 1000.0),
            (105.0, 2000.0),
            (105.0, 9999.0), // tie: OBV holds
        ]);
        let series = calculate_obv(&candles);

        assert_eq!(series.simple(1), Some(2000.0));
        assert_eq!(series.simple(2), Some(2000.0));
    }

    #[test]
    fn obv_all_points_valid() {
        let candles = make_volume_candles(&[(100.0, 10.0), (99.0, 20.0), (98.0, 30.0)]);
        let series = calculate_obv(&candles);

        assert_eq!(series.values.len(), 3);
        assert!(series.values.iter().all(|p| p.valid));
    }

    #[test]
    fn obv_insufficient_history() {
        let candles = make_volume_candles(&[(100.0, 1000.0)]);
        let series = calculate_obv(&candles);
        assert!(series.is_empty());
    }
}
