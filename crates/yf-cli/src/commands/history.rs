use yf_core::{history_lookup, resolve_period, DataSource, UtcDateTime};

use crate::cli::HistoryArgs;
use crate::error::CliError;
use crate::output;

use super::CommandReport;

pub async fn run(
    args: &HistoryArgs,
    source: &dyn DataSource,
    json: bool,
) -> Result<CommandReport, CliError> {
    let window = resolve_period(&args.period, UtcDateTime::now())?;
    let outcome = history_lookup(source, &args.ticker, &window).await;

    let symbol = args.ticker.trim().to_uppercase();
    output::render_history(&symbol, &outcome, json, args.all)?;

    Ok(CommandReport::with_failures(usize::from(!outcome.is_ok())))
}
