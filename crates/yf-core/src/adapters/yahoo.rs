use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::chart::ChartResponse;
use crate::data_source::{DataSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::normalize::{derive_quote, normalize_series};
use crate::{BarSeries, QueryWindow, QuoteSnapshot, Symbol, YahooConfig};

const REFERER: &str = "https://finance.yahoo.com/";

/// Yahoo chart adapter. Quotes and history both come from the chart
/// endpoint; one request per lookup, no retries.
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    config: YahooConfig,
}

impl YahooAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, config: YahooConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Adapter over a reqwest client built from `config`.
    pub fn from_config(config: YahooConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::new(http_client, config)
    }

    pub fn config(&self) -> &YahooConfig {
        &self.config
    }

    pub fn history_url(&self, symbol: &Symbol, window: &QueryWindow) -> String {
        self.chart_url(
            symbol,
            &format!(
                "period1={}&period2={}&interval=1d&events=div%7Csplit&includeAdjustedClose=true",
                window.start.unix_timestamp(),
                window.end.unix_timestamp()
            ),
        )
    }

    pub fn quote_url(&self, symbol: &Symbol) -> String {
        self.chart_url(symbol, "range=5d&interval=1d")
    }

    fn chart_url(&self, symbol: &Symbol, query: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}?{}",
            self.config.base_url,
            urlencoding::encode(symbol.as_str()),
            query
        )
    }

    /// Fetch and parse one chart document.
    ///
    /// Unknown tickers come back as a 404 whose body is still a chart
    /// document, so the body is parsed before the status is judged.
    async fn fetch_chart(&self, symbol: &Symbol, url: String) -> Result<ChartResponse, SourceError> {
        debug!(%symbol, %url, "fetching yahoo chart");

        let request = HttpRequest::get(url)
            .with_header("referer", REFERER)
            .with_timeout_ms(self.config.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::transport(format!("yahoo transport error: {}", e.message()))
        })?;

        match ChartResponse::from_json(&response.body) {
            Ok(chart) => {
                debug!(%symbol, status = response.status, "received yahoo chart");
                Ok(chart)
            }
            Err(_) if !response.is_success() => Err(SourceError::transport(format!(
                "yahoo returned status {}",
                response.status
            ))),
            Err(e) => Err(SourceError::normalization(format!(
                "failed to parse yahoo chart: {e}"
            ))),
        }
    }
}

impl DataSource for YahooAdapter {
    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteSnapshot, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let chart = self.fetch_chart(symbol, self.quote_url(symbol)).await?;
            derive_quote(symbol, &chart)
        })
    }

    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        window: &'a QueryWindow,
    ) -> Pin<Box<dyn Future<Output = Result<BarSeries, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let chart = self
                .fetch_chart(symbol, self.history_url(symbol, window))
                .await?;
            normalize_series(symbol, window, &chart)
        })
    }
}
