//! # Domain Models
//!
//! Canonical types shared by the resolver, the normalizer and the CLI.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, uppercased ticker |
//! | [`PeriodRequest`] | Parsed period token (relative, ytd, max, explicit range) |
//! | [`QueryWindow`] | Concrete `[start, end]` instants for a history query |
//! | [`DailyBar`] | One trading day of OHLC, adjusted close and volume |
//! | [`BarSeries`] | Ordered daily bars for one symbol and window |
//! | [`QuoteSnapshot`] | Point-in-time quote with derived change fields |
//! | [`TradingDate`] | Calendar date of a bar (`YYYY-MM-DD`) |
//! | [`UtcDateTime`] | UTC instant |

mod date;
mod models;
mod period;
mod symbol;
mod timestamp;

pub use date::TradingDate;
pub use models::{BarSeries, DailyBar, QuoteSnapshot};
pub use period::{
    resolve_period, PeriodRequest, QueryWindow, MAX_HISTORY_FLOOR, RELATIVE_PERIODS,
};
pub use symbol::{split_tickers, Symbol};
pub use timestamp::UtcDateTime;
