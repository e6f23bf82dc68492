use serde_json::{json, Value};

use yf_core::{BarSeries, QuoteSnapshot, SourceError, TickerOutcome};

use crate::error::CliError;

const NOT_AVAILABLE: &str = "N/A";
const HISTORY_TAIL: usize = 10;

pub fn render_quotes(
    outcomes: &[TickerOutcome<QuoteSnapshot>],
    json: bool,
) -> Result<(), CliError> {
    if json {
        let payload = outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(quote) => serde_json::to_value(quote),
                Err(error) => Ok(error_value(&outcome.ticker, error)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for outcome in outcomes {
        match &outcome.result {
            Ok(quote) => print!("{}", quote_table(quote)),
            Err(error) => println!("Error: {}", error.message()),
        }
    }
    Ok(())
}

pub fn render_history(
    symbol: &str,
    outcome: &TickerOutcome<BarSeries>,
    json: bool,
    show_all: bool,
) -> Result<(), CliError> {
    if json {
        let payload = match &outcome.result {
            Ok(series) => serde_json::to_value(&series.bars)?,
            Err(error) => error_value(symbol, error),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match &outcome.result {
        Ok(series) if series.is_empty() => println!("No historical data found."),
        Ok(series) => print!("{}", history_table(symbol, series, show_all)),
        Err(error) => println!("Error for {symbol}: {}", error.message()),
    }
    Ok(())
}

fn error_value(ticker: &str, error: &SourceError) -> Value {
    json!({
        "symbol": ticker.trim().to_uppercase(),
        "error": error.message(),
        "code": error.code(),
    })
}

pub fn quote_table(quote: &QuoteSnapshot) -> String {
    let mut main = Table::new(&[
        ("Symbol", 8),
        ("Name", 28),
        ("Price", 10),
        ("Change", 10),
        ("%", 8),
        ("Volume", 13),
    ]);
    main.push(vec![
        quote.symbol.to_string(),
        quote.display_name.clone(),
        format_optional(quote.price),
        format_optional(quote.change),
        quote
            .change_percent
            .map_or_else(|| NOT_AVAILABLE.to_string(), format_percent),
        format_optional(quote.volume.map(|v| v as f64)),
    ]);

    let details = [
        ("Open", format_optional(quote.open)),
        ("Prev Close", format_optional(quote.previous_close)),
        ("Day High", format_optional(quote.day_high)),
        ("Day Low", format_optional(quote.day_low)),
        (
            "Exchange",
            quote
                .exchange
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
    ];

    let mut out = main.render();
    for (label, value) in details {
        out.push_str(&format!("{label:<12}{value}\n"));
    }
    out
}

pub fn history_table(symbol: &str, series: &BarSeries, show_all: bool) -> String {
    let rows = if show_all {
        series.bars.as_slice()
    } else {
        series.tail(HISTORY_TAIL)
    };

    let mut table = Table::new(&[
        ("Date", 10),
        ("Open", 10),
        ("High", 10),
        ("Low", 10),
        ("Close", 10),
        ("Adj Close", 10),
        ("Volume", 13),
    ]);
    for bar in rows {
        table.push(vec![
            bar.date.to_string(),
            format_optional(bar.open),
            format_optional(bar.high),
            format_optional(bar.low),
            format_optional(bar.close),
            format_optional(bar.adj_close),
            format_optional(bar.volume.map(|v| v as f64)),
        ]);
    }

    format!("\n{symbol} - Last {} days:\n{}", rows.len(), table.render())
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_number)
}

/// Two decimals with comma thousands separators, e.g. `1,234,567.89`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Signed percentage with two decimals, e.g. `+1.25%`.
pub fn format_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Boxed text table with fixed column widths; long cells are cut.
struct Table {
    headers: Vec<String>,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(columns: &[(&str, usize)]) -> Self {
        Self {
            headers: columns.iter().map(|(name, _)| (*name).to_string()).collect(),
            widths: columns.iter().map(|(_, width)| *width).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render(&self) -> String {
        let border = self.border();
        let mut out = String::new();
        out.push_str(&border);
        out.push_str(&self.line(&self.headers));
        out.push_str(&border);
        for row in &self.rows {
            out.push_str(&self.line(row));
        }
        out.push_str(&border);
        out
    }

    fn border(&self) -> String {
        let mut line = String::from("+");
        for width in &self.widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    }

    fn line(&self, cells: &[String]) -> String {
        let mut line = String::from("|");
        for (cell, &width) in cells.iter().zip(&self.widths) {
            let cut: String = cell.chars().take(width).collect();
            line.push_str(&format!(" {cut:<width$} |"));
        }
        line.push('\n');
        line
    }
}
