use serde::{Deserialize, Serialize};

use crate::{Symbol, TradingDate, UtcDateTime};

/// One trading day of price and volume data.
///
/// Only `close` is guaranteed to be present on bars produced by the
/// normalizer; every other field is whatever the provider reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: TradingDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<u64>,
}

/// Daily bars for one symbol over one resolved window, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub symbol: Symbol,
    pub start: UtcDateTime,
    pub end: UtcDateTime,
    pub bars: Vec<DailyBar>,
}

impl BarSeries {
    pub fn new(symbol: Symbol, start: UtcDateTime, end: UtcDateTime, bars: Vec<DailyBar>) -> Self {
        Self {
            symbol,
            start,
            end,
            bars,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent `count` bars, or all of them when fewer exist.
    pub fn tail(&self, count: usize) -> &[DailyBar] {
        let skip = self.bars.len().saturating_sub(count);
        &self.bars[skip..]
    }
}

/// Point-in-time quote derived from the chart metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub symbol: Symbol,
    pub display_name: String,
    pub price: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub open: Option<f64>,
    pub day_high: Option<f64>,
    pub day_low: Option<f64>,
    pub volume: Option<u64>,
    pub previous_close: Option<f64>,
    pub exchange: Option<String>,
    pub currency: Option<String>,
    pub as_of: Option<UtcDateTime>,
}
