//! Chart response → daily bars and quote snapshots.
//!
//! Both functions are pure over their inputs; calling them twice on the same
//! response yields identical output.

use tracing::debug;

use crate::chart::{column_value, ChartMeta, ChartResponse};
use crate::{
    BarSeries, DailyBar, QueryWindow, QuoteSnapshot, SourceError, Symbol, TradingDate,
    UtcDateTime,
};

/// Convert a chart response into chronologically ordered daily bars.
///
/// A bar is kept if and only if its close is present. Missing open, high,
/// low or volume values stay `None` on the bar. Adjusted close falls back to
/// the close when the provider sent no adjusted value for that day. Provider
/// order is preserved; nothing is re-sorted.
///
/// # Errors
///
/// - `NoData` when the response has no result entry at all.
/// - `Normalization` when timestamps are present without quote columns, or a
///   timestamp cannot be represented as a date.
pub fn normalize_series(
    symbol: &Symbol,
    window: &QueryWindow,
    response: &ChartResponse,
) -> Result<BarSeries, SourceError> {
    let result = response.first_result().ok_or_else(|| {
        let detail = response.error_description().unwrap_or("empty result set");
        SourceError::no_data(format!("no data found for {symbol}: {detail}"))
    })?;

    let timestamps = result.timestamps();
    if timestamps.is_empty() {
        return Ok(BarSeries::new(
            symbol.clone(),
            window.start,
            window.end,
            Vec::new(),
        ));
    }

    let columns = result.quote_columns().ok_or_else(|| {
        SourceError::normalization(format!(
            "chart for {symbol} has {} timestamps but no quote indicators",
            timestamps.len()
        ))
    })?;
    let adjusted = result.adjusted_closes();

    let mut bars = Vec::with_capacity(timestamps.len());
    for (index, &ts) in timestamps.iter().enumerate() {
        let Some(close) = column_value(columns.close.as_deref(), index) else {
            continue;
        };

        let date = TradingDate::from_unix_timestamp(ts).map_err(|error| {
            SourceError::normalization(format!("chart for {symbol}: {error}"))
        })?;

        bars.push(DailyBar {
            date,
            open: column_value(columns.open.as_deref(), index),
            high: column_value(columns.high.as_deref(), index),
            low: column_value(columns.low.as_deref(), index),
            close: Some(close),
            adj_close: column_value(adjusted, index).or(Some(close)),
            volume: column_value(columns.volume.as_deref(), index),
        });
    }

    debug!(
        %symbol,
        points = timestamps.len(),
        bars = bars.len(),
        dropped = timestamps.len() - bars.len(),
        "normalized chart series"
    );

    Ok(BarSeries::new(symbol.clone(), window.start, window.end, bars))
}

/// Derive a quote snapshot from a short (5 day) chart response.
///
/// Fallback order:
/// - price: `regularMarketPrice`, then the metadata previous close.
/// - previous close: the series close scanned backward from the
///   second-to-last point, then the metadata previous close.
/// - metadata previous close: `previousClose`, then `chartPreviousClose`.
///
/// # Errors
///
/// `Quote("Ticker not found")` without a result entry and
/// `Quote("No data available")` when the entry has no metadata block.
pub fn derive_quote(symbol: &Symbol, response: &ChartResponse) -> Result<QuoteSnapshot, SourceError> {
    let result = response
        .first_result()
        .ok_or_else(|| SourceError::quote("Ticker not found"))?;
    let meta = result
        .meta
        .as_ref()
        .ok_or_else(|| SourceError::quote("No data available"))?;

    let columns = result.quote_columns();
    let closes = columns.and_then(|c| c.close.as_deref()).unwrap_or_default();
    let opens = columns.and_then(|c| c.open.as_deref()).unwrap_or_default();

    let meta_previous_close = meta.previous_close.or(meta.chart_previous_close);
    let price = meta.regular_market_price.or(meta_previous_close);
    let previous_close = previous_close_from_series(closes).or(meta_previous_close);
    let (change, change_percent) = price_change(price, previous_close);

    Ok(QuoteSnapshot {
        symbol: quoted_symbol(symbol, meta),
        display_name: meta
            .short_name
            .clone()
            .or_else(|| meta.long_name.clone())
            .unwrap_or_else(|| symbol.to_string()),
        price,
        change,
        change_percent,
        open: meta
            .regular_market_open
            .or_else(|| opens.iter().rev().find_map(|open| *open)),
        day_high: meta.regular_market_day_high,
        day_low: meta.regular_market_day_low,
        volume: meta.regular_market_volume,
        previous_close,
        exchange: meta
            .exchange_name
            .clone()
            .or_else(|| meta.full_exchange_name.clone()),
        currency: meta.currency.clone(),
        as_of: meta
            .regular_market_time
            .and_then(|ts| UtcDateTime::from_unix_timestamp(ts).ok()),
    })
}

/// First non-null close scanning backward from index `len - 2`.
///
/// The last point is the current session, so the close before it is the
/// previous session's close.
pub fn previous_close_from_series(closes: &[Option<f64>]) -> Option<f64> {
    let end = closes.len().checked_sub(1)?;
    closes[..end].iter().rev().find_map(|close| *close)
}

/// `(change, change_percent)`; both `None` unless price and a non-zero
/// previous close are known.
fn price_change(price: Option<f64>, previous_close: Option<f64>) -> (Option<f64>, Option<f64>) {
    match (price, previous_close) {
        (Some(price), Some(previous)) if previous != 0.0 => {
            let change = price - previous;
            (Some(change), Some(100.0 * change / previous))
        }
        _ => (None, None),
    }
}

fn quoted_symbol(requested: &Symbol, meta: &ChartMeta) -> Symbol {
    meta.symbol
        .as_deref()
        .and_then(|raw| Symbol::parse(raw).ok())
        .unwrap_or_else(|| requested.clone())
}
