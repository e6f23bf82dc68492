//! # yf core
//!
//! Period resolution, chart normalization and quote derivation for the `yf`
//! stock quote CLI.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Yahoo chart adapter |
//! | [`batch`] | Concurrent per-ticker lookups with failure isolation |
//! | [`chart`] | Provider chart response schema |
//! | [`config`] | Endpoint and timeout configuration |
//! | [`data_source`] | Data source trait and per-ticker errors |
//! | [`domain`] | Symbols, periods, bars and quotes |
//! | [`error`] | Validation errors |
//! | [`http_client`] | Transport capability |
//! | [`normalize`] | Chart → bars and chart → quote |
//!
//! ## Flow
//!
//! ```text
//! (ticker, period token)
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ resolve_period  │── ValidationError
//! └────────┬────────┘
//!          │ QueryWindow
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ YahooAdapter    │────▶│ HttpClient       │
//! │ (DataSource)    │     │ (reqwest)        │
//! └────────┬────────┘     └──────────────────┘
//!          │ ChartResponse
//!          ▼
//! ┌─────────────────┐
//! │ normalize_series│── SourceError
//! │ derive_quote    │
//! └─────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yf_core::{resolve_period, DataSource, Symbol, UtcDateTime, YahooAdapter, YahooConfig};
//!
//! let adapter = YahooAdapter::from_config(YahooConfig::from_env());
//! let window = resolve_period("1mo", UtcDateTime::now())?;
//! let symbol = Symbol::parse("AAPL")?;
//! let series = adapter.history(&symbol, &window).await?;
//! println!("{} bars", series.bars.len());
//! ```

pub mod adapters;
pub mod batch;
pub mod chart;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod normalize;

pub use adapters::YahooAdapter;

pub use batch::{history_lookup, quote_batch, TickerOutcome};

pub use chart::ChartResponse;

pub use config::YahooConfig;

pub use data_source::{DataSource, SourceError, SourceErrorKind};

pub use domain::{
    resolve_period, split_tickers, BarSeries, DailyBar, PeriodRequest, QueryWindow,
    QuoteSnapshot, Symbol, TradingDate, UtcDateTime, MAX_HISTORY_FLOOR, RELATIVE_PERIODS,
};

pub use error::ValidationError;

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use normalize::{derive_quote, normalize_series};
