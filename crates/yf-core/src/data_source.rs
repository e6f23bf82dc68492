//! Data source trait and per-ticker error type.
//!
//! [`DataSource`] is the seam between the CLI/batch layer and a concrete
//! provider adapter. Every lookup returns a [`SourceError`] on failure; the
//! caller keeps it next to the ticker instead of aborting sibling lookups.
//!
//! | Kind | Code | Raised when |
//! |------|------|-------------|
//! | `InvalidRequest` | `source.invalid_request` | ticker or period fails to parse |
//! | `NoData` | `source.no_data` | the provider returned no result set |
//! | `Quote` | `source.quote` | a quote cannot be derived for the ticker |
//! | `Normalization` | `source.normalization` | the response has an unexpected shape |
//! | `Transport` | `source.transport` | the request itself failed |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{BarSeries, QueryWindow, QuoteSnapshot, Symbol, ValidationError};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    InvalidRequest,
    NoData,
    Quote,
    Normalization,
    Transport,
}

/// Structured per-ticker error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::InvalidRequest, message)
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::NoData, message)
    }

    pub fn quote(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Quote, message)
    }

    pub fn normalization(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Normalization, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Transport, message)
    }

    fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::NoData => "source.no_data",
            SourceErrorKind::Quote => "source.quote",
            SourceErrorKind::Normalization => "source.normalization",
            SourceErrorKind::Transport => "source.transport",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

impl From<ValidationError> for SourceError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_request(error.to_string())
    }
}

/// Source adapter contract.
///
/// Implementations must be `Send + Sync`; one instance is built per process
/// and shared by reference across concurrent lookups.
pub trait DataSource: Send + Sync {
    /// Fetches a point-in-time quote for `symbol`.
    ///
    /// # Errors
    ///
    /// `Quote` when the ticker is unknown or has no metadata, `Transport`
    /// when the request fails.
    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteSnapshot, SourceError>> + Send + 'a>>;

    /// Fetches daily bars for `symbol` inside `window`.
    ///
    /// # Errors
    ///
    /// `NoData`, `Normalization` or `Transport`; see the module table.
    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        window: &'a QueryWindow,
    ) -> Pin<Box<dyn Future<Output = Result<BarSeries, SourceError>> + Send + 'a>>;
}
