//! CLI argument definitions for yf.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Quote one or more tickers |
//! | `csv` | Quote every ticker listed in a file |
//! | `history` | Daily bars for one ticker over a period |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `-j, --json` | `false` | Pretty JSON instead of tables |
//! | `--timeout-ms` | `YF_TIMEOUT_MS` or `10000` | Per-request timeout |
//!
//! # Examples
//!
//! ```bash
//! yf quote AAPL,MSFT GOOG
//! yf csv watchlist.csv --json
//! yf history AAPL ytd
//! yf history ^GSPC 01012024-31032024 --all
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// yf - Yahoo Finance quotes and daily history from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "yf",
    author,
    version,
    about = "Yahoo Finance CLI - Get stock quotes and historical data"
)]
pub struct Cli {
    /// Output as pretty-printed JSON.
    #[arg(short = 'j', long, global = true, default_value_t = false)]
    pub json: bool,

    /// Request timeout in milliseconds (overrides YF_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get quote for one or more tickers.
    Quote(QuoteArgs),
    /// Read tickers from a CSV file.
    Csv(CsvArgs),
    /// Get historical data for a ticker.
    History(HistoryArgs),
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Ticker(s): single (AAPL) or comma-separated (AAPL,GOOG).
    #[arg(required = true, num_args = 1..)]
    pub tickers: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CsvArgs {
    /// Path to CSV file (one ticker per line or comma-separated).
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Stock ticker symbol (e.g., AAPL).
    pub ticker: String,

    /// Period (1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max) or date
    /// range (DDMMYYYY-DDMMYYYY).
    #[arg(default_value = "1mo")]
    pub period: String,

    /// Show all data (default shows last 10 rows).
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,
}
