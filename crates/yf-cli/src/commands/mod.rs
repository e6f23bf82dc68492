mod csv;
mod history;
mod quote;

use tracing::debug;
use yf_core::{DataSource, YahooAdapter, YahooConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a finished command reports back to `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandReport {
    pub failed: usize,
}

impl CommandReport {
    pub const fn with_failures(failed: usize) -> Self {
        Self { failed }
    }

    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

pub async fn run(cli: &Cli) -> Result<CommandReport, CliError> {
    let mut config = YahooConfig::from_env();
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    debug!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "using yahoo config");

    let adapter = YahooAdapter::from_config(config);
    dispatch(cli, &adapter).await
}

async fn dispatch(cli: &Cli, source: &dyn DataSource) -> Result<CommandReport, CliError> {
    match &cli.command {
        Command::Quote(args) => quote::run(args, source, cli.json).await,
        Command::Csv(args) => csv::run(args, source, cli.json).await,
        Command::History(args) => history::run(args, source, cli.json).await,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::future::Future;
    use std::pin::Pin;

    use yf_core::{
        BarSeries, DataSource, QueryWindow, QuoteSnapshot, SourceError, Symbol,
    };

    /// Quotes any symbol except those starting with `BAD`; history is empty.
    pub struct StubSource;

    impl DataSource for StubSource {
        fn quote<'a>(
            &'a self,
            symbol: &'a Symbol,
        ) -> Pin<Box<dyn Future<Output = Result<QuoteSnapshot, SourceError>> + Send + 'a>>
        {
            Box::pin(async move {
                if symbol.as_str().starts_with("BAD") {
                    return Err(SourceError::quote("Ticker not found"));
                }
                Ok(QuoteSnapshot {
                    symbol: symbol.clone(),
                    display_name: symbol.to_string(),
                    price: Some(10.0),
                    change: Some(1.0),
                    change_percent: Some(11.11),
                    open: Some(9.5),
                    day_high: Some(10.5),
                    day_low: Some(9.0),
                    volume: Some(1_000),
                    previous_close: Some(9.0),
                    exchange: Some(String::from("NMS")),
                    currency: Some(String::from("USD")),
                    as_of: None,
                })
            })
        }

        fn history<'a>(
            &'a self,
            symbol: &'a Symbol,
            window: &'a QueryWindow,
        ) -> Pin<Box<dyn Future<Output = Result<BarSeries, SourceError>> + Send + 'a>> {
            Box::pin(async move {
                if symbol.as_str().starts_with("BAD") {
                    return Err(SourceError::no_data(format!("no data found for {symbol}")));
                }
                Ok(BarSeries::new(
                    symbol.clone(),
                    window.start,
                    window.end,
                    Vec::new(),
                ))
            })
        }
    }
}
