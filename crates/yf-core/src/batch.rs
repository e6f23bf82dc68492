//! Per-ticker lookups with failure isolation.
//!
//! Lookups for a batch run concurrently; outcomes come back in input order
//! and a failing ticker never prevents the others from completing.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::data_source::{DataSource, SourceError};
use crate::{BarSeries, QueryWindow, QuoteSnapshot, Symbol};

/// Result of one lookup, tied to the ticker as the user typed it.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerOutcome<T> {
    pub ticker: String,
    pub result: Result<T, SourceError>,
}

impl<T> TickerOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Quote every ticker concurrently, preserving input order.
pub async fn quote_batch<S>(source: &S, tickers: &[String]) -> Vec<TickerOutcome<QuoteSnapshot>>
where
    S: DataSource + ?Sized,
{
    debug!(count = tickers.len(), "starting quote batch");

    let lookups = tickers.iter().map(|ticker| async move {
        let result = match Symbol::parse(ticker) {
            Ok(symbol) => source.quote(&symbol).await,
            Err(error) => Err(SourceError::from(error)),
        };
        outcome(ticker, result)
    });

    join_all(lookups).await
}

/// History for a single ticker over an already resolved window.
pub async fn history_lookup<S>(
    source: &S,
    ticker: &str,
    window: &QueryWindow,
) -> TickerOutcome<BarSeries>
where
    S: DataSource + ?Sized,
{
    let result = match Symbol::parse(ticker) {
        Ok(symbol) => source.history(&symbol, window).await,
        Err(error) => Err(SourceError::from(error)),
    };
    outcome(ticker, result)
}

fn outcome<T>(ticker: &str, result: Result<T, SourceError>) -> TickerOutcome<T> {
    if let Err(error) = &result {
        warn!(ticker, code = error.code(), "lookup failed: {}", error.message());
    }

    TickerOutcome {
        ticker: ticker.to_owned(),
        result,
    }
}
