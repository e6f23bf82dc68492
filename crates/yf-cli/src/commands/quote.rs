use yf_core::{quote_batch, split_tickers, DataSource};

use crate::cli::QuoteArgs;
use crate::error::CliError;
use crate::output;

use super::CommandReport;

pub async fn run(
    args: &QuoteArgs,
    source: &dyn DataSource,
    json: bool,
) -> Result<CommandReport, CliError> {
    let tickers = args
        .tickers
        .iter()
        .flat_map(|raw| split_tickers(raw))
        .collect::<Vec<_>>();
    if tickers.is_empty() {
        return Err(CliError::Command(String::from("no tickers given")));
    }

    quote_tickers(&tickers, source, json).await
}

/// Quote `tickers` as one batch and render every outcome.
pub(super) async fn quote_tickers(
    tickers: &[String],
    source: &dyn DataSource,
    json: bool,
) -> Result<CommandReport, CliError> {
    let outcomes = quote_batch(source, tickers).await;
    output::render_quotes(&outcomes, json)?;

    let failed = outcomes.iter().filter(|outcome| !outcome.is_ok()).count();
    Ok(CommandReport::with_failures(failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::StubSource;

    fn args(raw: &[&str]) -> QuoteArgs {
        QuoteArgs {
            tickers: raw.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    #[tokio::test]
    async fn failures_are_counted_not_fatal() {
        let report = run(&args(&["aapl,BADTICKER", "msft"]), &StubSource, true)
            .await
            .expect("batch should complete");

        assert_eq!(report.failed, 1);
        assert!(report.has_failures());
    }

    #[tokio::test]
    async fn separators_only_is_a_command_error() {
        let error = run(&args(&[", ,"]), &StubSource, false)
            .await
            .expect_err("must fail");

        assert_eq!(error.exit_code(), 2);
    }
}
