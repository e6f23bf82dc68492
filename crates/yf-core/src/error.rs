use thiserror::Error;

/// Validation errors for user-supplied symbols and period tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter, digit or '^': '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error(
        "invalid period '{value}'. Use: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max, or DDMMYYYY-DDMMYYYY"
    )]
    InvalidPeriod { value: String },
    #[error("invalid date '{value}' in range, expected a real calendar day as DDMMYYYY")]
    InvalidRangeDate { value: String },
    #[error("range start {start} is after range end {end}")]
    RangeOutOfOrder { start: String, end: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unix timestamp {value} is out of range")]
    TimestampOutOfRange { value: i64 },
}
