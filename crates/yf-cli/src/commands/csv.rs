use yf_core::{split_tickers, DataSource};

use crate::cli::CsvArgs;
use crate::error::CliError;

use super::quote::quote_tickers;
use super::CommandReport;

pub async fn run(
    args: &CsvArgs,
    source: &dyn DataSource,
    json: bool,
) -> Result<CommandReport, CliError> {
    let content = std::fs::read_to_string(&args.file).map_err(|source| CliError::TickerFile {
        path: args.file.clone(),
        source,
    })?;

    let tickers = split_tickers(&content);
    if tickers.is_empty() {
        println!("No tickers found in file.");
        return Ok(CommandReport::default());
    }

    eprintln!("Processing {} ticker(s)...", tickers.len());
    quote_tickers(&tickers, source, json).await
}
