use std::fmt::{Display, Formatter};
use std::str::FromStr;

use time::macros::date;
use time::{Date, Duration, Month};

use crate::{TradingDate, UtcDateTime, ValidationError};

/// Fixed day counts for the relative period tokens.
///
/// These are plain calendar-day offsets from `now`: `1mo` is always 30 days,
/// never "one calendar month".
pub const RELATIVE_PERIODS: [(&str, u32); 9] = [
    ("1d", 1),
    ("5d", 5),
    ("1mo", 30),
    ("3mo", 90),
    ("6mo", 180),
    ("1y", 365),
    ("2y", 730),
    ("5y", 1825),
    ("10y", 3650),
];

/// Earliest date requested for `max`.
pub const MAX_HISTORY_FLOOR: Date = date!(1900 - 01 - 01);

const RANGE_DAY_LEN: usize = 8;
const RANGE_TOKEN_LEN: usize = RANGE_DAY_LEN * 2 + 1;

/// Parsed period expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodRequest {
    RelativeWindow { length_in_days: u32 },
    YearToDate,
    MaxHistory,
    /// Both ends inclusive.
    ExplicitRange { start: Date, end: Date },
}

impl PeriodRequest {
    /// Syntactic parse of a period token.
    ///
    /// Explicit ranges are `DDMMYYYY-DDMMYYYY` (day first). Each half must be
    /// a real calendar day and the range must not run backwards.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        let token = token.trim();

        if let Some((_, days)) = RELATIVE_PERIODS.iter().find(|(name, _)| *name == token) {
            return Ok(Self::RelativeWindow {
                length_in_days: *days,
            });
        }

        match token {
            "ytd" => Ok(Self::YearToDate),
            "max" => Ok(Self::MaxHistory),
            _ if is_range_token(token) => {
                let (start, end) = token.split_at(RANGE_DAY_LEN);
                let start = parse_day_first(start)?;
                let end = parse_day_first(&end[1..])?;
                if start > end {
                    return Err(ValidationError::RangeOutOfOrder {
                        start: TradingDate::new(start).to_string(),
                        end: TradingDate::new(end).to_string(),
                    });
                }
                Ok(Self::ExplicitRange { start, end })
            }
            _ => Err(ValidationError::InvalidPeriod {
                value: token.to_owned(),
            }),
        }
    }

    /// Concrete query window for this request relative to `now`.
    pub fn window(self, now: UtcDateTime) -> QueryWindow {
        let (start, end) = match self {
            Self::RelativeWindow { length_in_days } => {
                let start = now.into_inner() - Duration::days(i64::from(length_in_days));
                (UtcDateTime::from_offset_datetime(start).unwrap_or(now), now)
            }
            Self::YearToDate => {
                let jan_first = Date::from_calendar_date(now.date().year(), Month::January, 1)
                    .unwrap_or(MAX_HISTORY_FLOOR);
                (UtcDateTime::start_of_day(jan_first), now)
            }
            Self::MaxHistory => (UtcDateTime::start_of_day(MAX_HISTORY_FLOOR), now),
            Self::ExplicitRange { start, end } => {
                // The provider's end bound is exclusive; stretch to the next
                // midnight so the last requested day is included.
                let end_exclusive = end.next_day().unwrap_or(end);
                (
                    UtcDateTime::start_of_day(start),
                    UtcDateTime::start_of_day(end_exclusive),
                )
            }
        };

        QueryWindow {
            period: self,
            start,
            end,
        }
    }
}

impl FromStr for PeriodRequest {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for PeriodRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeWindow { length_in_days } => write!(f, "last {length_in_days} days"),
            Self::YearToDate => f.write_str("year to date"),
            Self::MaxHistory => f.write_str("max history"),
            Self::ExplicitRange { start, end } => write!(
                f,
                "{} to {}",
                TradingDate::new(*start),
                TradingDate::new(*end)
            ),
        }
    }
}

/// Resolved `[start, end]` instants for a history query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub period: PeriodRequest,
    pub start: UtcDateTime,
    pub end: UtcDateTime,
}

/// Parse `token` and resolve it against `now`.
///
/// Pure: the same token and `now` always give the same window.
pub fn resolve_period(token: &str, now: UtcDateTime) -> Result<QueryWindow, ValidationError> {
    PeriodRequest::parse(token).map(|period| period.window(now))
}

fn is_range_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == RANGE_TOKEN_LEN
        && bytes[RANGE_DAY_LEN] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| index == RANGE_DAY_LEN || byte.is_ascii_digit())
}

/// `DDMMYYYY` → date. Callers guarantee eight ASCII digits.
fn parse_day_first(raw: &str) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidRangeDate {
        value: raw.to_owned(),
    };

    let day: u8 = raw[0..2].parse().map_err(|_| invalid())?;
    let month: u8 = raw[2..4].parse().map_err(|_| invalid())?;
    let year: i32 = raw[4..8].parse().map_err(|_| invalid())?;

    let month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}
