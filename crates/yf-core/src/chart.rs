//! Schema of the provider's `v8/finance/chart` response.
//!
//! Every field the provider may omit or send as `null` is an `Option`, so a
//! missing block is a value the normalizer has to match on rather than a
//! silent default.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

impl ChartResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// First result entry, if the provider returned any.
    pub fn first_result(&self) -> Option<&ChartResult> {
        self.chart.result.as_deref().and_then(<[ChartResult]>::first)
    }

    /// Provider error description, falling back to its code.
    pub fn error_description(&self) -> Option<&str> {
        let error = self.chart.error.as_ref()?;
        error.description.as_deref().or(error.code.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartResult {
    pub meta: Option<ChartMeta>,
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Option<ChartIndicators>,
}

impl ChartResult {
    pub fn timestamps(&self) -> &[i64] {
        self.timestamp.as_deref().unwrap_or_default()
    }

    pub fn quote_columns(&self) -> Option<&QuoteColumns> {
        self.indicators
            .as_ref()?
            .quote
            .as_deref()
            .and_then(<[QuoteColumns]>::first)
    }

    pub fn adjusted_closes(&self) -> Option<&[Option<f64>]> {
        self.indicators
            .as_ref()?
            .adjclose
            .as_deref()
            .and_then(<[AdjCloseColumn]>::first)?
            .adjclose
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub full_exchange_name: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_time: Option<i64>,
    pub regular_market_price: Option<f64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub previous_close: Option<f64>,
    pub chart_previous_close: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartIndicators {
    pub quote: Option<Vec<QuoteColumns>>,
    pub adjclose: Option<Vec<AdjCloseColumn>>,
}

/// Parallel per-day columns, indexed like `ChartResult::timestamp`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteColumns {
    pub open: Option<Vec<Option<f64>>>,
    pub high: Option<Vec<Option<f64>>>,
    pub low: Option<Vec<Option<f64>>>,
    pub close: Option<Vec<Option<f64>>>,
    pub volume: Option<Vec<Option<u64>>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdjCloseColumn {
    pub adjclose: Option<Vec<Option<f64>>>,
}

/// Value at `index`, treating a missing column or a short column as null.
pub fn column_value<T: Copy>(column: Option<&[Option<T>]>, index: usize) -> Option<T> {
    column?.get(index).copied().flatten()
}
