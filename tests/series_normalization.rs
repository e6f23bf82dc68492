//! Behavior-driven tests for chart normalization and quote derivation
//!
//! These tests feed provider-shaped JSON through the normalizer and check
//! the bars and quotes a user would see.

use yf_core::{
    derive_quote, normalize_series, resolve_period, ChartResponse, QueryWindow, SourceErrorKind,
    Symbol, UtcDateTime,
};

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

fn window() -> QueryWindow {
    let now = UtcDateTime::parse("2024-01-10T21:00:00Z").expect("valid clock");
    resolve_period("5d", now).expect("valid period")
}

fn chart(body: &str) -> ChartResponse {
    ChartResponse::from_json(body).expect("fixture is valid chart json")
}

// 2024-01-08 .. 2024-01-12 at 14:30 UTC (regular session open)
const FIVE_DAYS: &str = r#"{"chart":{"result":[{
    "meta":{"symbol":"MSFT","currency":"USD"},
    "timestamp":[1704724200,1704810600,1704897000,1704983400,1705069800],
    "indicators":{
        "quote":[{
            "open":  [370.1, null, 372.0, 375.5, 380.0],
            "high":  [371.0, 373.0, 374.0, null, 382.5],
            "low":   [368.0, 369.5, 370.0, 372.2, 378.1],
            "close": [370.6, 372.9, null, 375.8, 381.2],
            "volume":[21000000, null, 19000000, 18000000, 23000000]
        }],
        "adjclose":[{"adjclose":[369.9, 372.2, null, 375.1, null]}]
    }
}],"error":null}}"#;

// =============================================================================
// Series Normalization: Filtering
// =============================================================================

#[test]
fn bars_without_a_close_are_dropped_and_others_are_kept() {
    // Given: Five trading days where day three has no close
    let response = chart(FIVE_DAYS);

    // When: The series is normalized
    let series = normalize_series(&symbol("MSFT"), &window(), &response).expect("valid series");

    // Then: Only the day without a close disappears
    let dates: Vec<String> = series.bars.iter().map(|b| b.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2024-01-08", "2024-01-09", "2024-01-11", "2024-01-12"]
    );
    assert!(series.bars.iter().all(|bar| bar.close.is_some()));
}

#[test]
fn missing_open_volume_or_high_do_not_drop_a_bar() {
    let series = normalize_series(&symbol("MSFT"), &window(), &chart(FIVE_DAYS)).expect("valid");

    // Day two: null open and volume, but a close
    let day_two = &series.bars[1];
    assert_eq!(day_two.open, None);
    assert_eq!(day_two.volume, None);
    assert_eq!(day_two.close, Some(372.9));

    // Day four: null high, but a close
    let day_four = &series.bars[2];
    assert_eq!(day_four.high, None);
    assert_eq!(day_four.close, Some(375.8));
}

#[test]
fn adjusted_close_falls_back_to_close_only_where_missing() {
    let series = normalize_series(&symbol("MSFT"), &window(), &chart(FIVE_DAYS)).expect("valid");

    assert_eq!(series.bars[0].adj_close, Some(369.9));
    assert_eq!(series.bars[3].adj_close, Some(381.2));
}

#[test]
fn adjusted_close_equals_close_when_provider_omits_the_array() {
    let body = r#"{"chart":{"result":[{
        "timestamp":[1704724200,1704810600],
        "indicators":{"quote":[{"close":[10.5, 11.0]}]}
    }],"error":null}}"#;

    let series = normalize_series(&symbol("XYZ"), &window(), &chart(body)).expect("valid");

    assert_eq!(series.bars.len(), 2);
    for bar in &series.bars {
        assert_eq!(bar.adj_close, bar.close);
        assert_eq!(bar.open, None);
    }
}

#[test]
fn provider_order_is_kept_as_returned() {
    // Given: A provider that (unusually) returns days out of order
    let body = r#"{"chart":{"result":[{
        "timestamp":[1704897000,1704724200],
        "indicators":{"quote":[{"close":[2.0, 1.0]}]}
    }],"error":null}}"#;

    let series = normalize_series(&symbol("XYZ"), &window(), &chart(body)).expect("valid");

    // Then: No re-sorting happens
    assert_eq!(series.bars[0].date.to_string(), "2024-01-10");
    assert_eq!(series.bars[1].date.to_string(), "2024-01-08");
}

#[test]
fn normalizing_twice_gives_identical_output() {
    let response = chart(FIVE_DAYS);

    let first = normalize_series(&symbol("MSFT"), &window(), &response).expect("valid");
    let second = normalize_series(&symbol("MSFT"), &window(), &response).expect("valid");

    assert_eq!(first, second);
}

// =============================================================================
// Series Normalization: Empty and Malformed Responses
// =============================================================================

#[test]
fn result_without_points_is_an_empty_series_not_an_error() {
    let body = r#"{"chart":{"result":[{"meta":{"symbol":"MSFT"},"timestamp":[],"indicators":{"quote":[{}]}}],"error":null}}"#;

    let series = normalize_series(&symbol("MSFT"), &window(), &chart(body)).expect("valid");

    assert!(series.is_empty());
    assert_eq!(series.start, window().start);
    assert_eq!(series.end, window().end);
}

#[test]
fn missing_result_container_is_no_data() {
    let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;

    let error = normalize_series(&symbol("GONE"), &window(), &chart(body)).expect_err("must fail");

    assert_eq!(error.kind(), SourceErrorKind::NoData);
    assert!(error.message().contains("GONE"));
    assert!(error.message().contains("delisted"));
}

#[test]
fn empty_result_list_is_no_data() {
    let body = r#"{"chart":{"result":[],"error":null}}"#;

    let error = normalize_series(&symbol("MSFT"), &window(), &chart(body)).expect_err("must fail");

    assert_eq!(error.kind(), SourceErrorKind::NoData);
}

#[test]
fn timestamps_without_indicators_are_a_normalization_error() {
    let body = r#"{"chart":{"result":[{"timestamp":[1704724200]}],"error":null}}"#;

    let error = normalize_series(&symbol("MSFT"), &window(), &chart(body)).expect_err("must fail");

    assert_eq!(error.kind(), SourceErrorKind::Normalization);
}

// =============================================================================
// Quote Derivation
// =============================================================================

#[test]
fn previous_close_comes_from_the_second_to_last_non_null_close() {
    // Given: closes [10, null, 12, null, 15] with the latest last
    let body = r#"{"chart":{"result":[{
        "meta":{"symbol":"ACME","regularMarketPrice":15.0,"previousClose":9.0},
        "timestamp":[1,2,3,4,5],
        "indicators":{"quote":[{"close":[10.0,null,12.0,null,15.0]}]}
    }],"error":null}}"#;

    // When: A quote is derived
    let quote = derive_quote(&symbol("ACME"), &chart(body)).expect("valid quote");

    // Then: The previous close is 12, not the metadata value
    assert_eq!(quote.previous_close, Some(12.0));
    assert_eq!(quote.change, Some(3.0));
    assert_eq!(quote.change_percent, Some(25.0));
}

#[test]
fn previous_close_falls_back_to_metadata_when_series_has_none() {
    let body = r#"{"chart":{"result":[{
        "meta":{"regularMarketPrice":50.0,"chartPreviousClose":40.0},
        "timestamp":[1,2],
        "indicators":{"quote":[{"close":[null,50.0]}]}
    }],"error":null}}"#;

    let quote = derive_quote(&symbol("ACME"), &chart(body)).expect("valid quote");

    assert_eq!(quote.previous_close, Some(40.0));
    assert_eq!(quote.change, Some(10.0));
}

#[test]
fn without_any_previous_close_change_fields_stay_null() {
    let body = r#"{"chart":{"result":[{
        "meta":{"regularMarketPrice":50.0},
        "timestamp":[1],
        "indicators":{"quote":[{"close":[50.0]}]}
    }],"error":null}}"#;

    let quote = derive_quote(&symbol("ACME"), &chart(body)).expect("valid quote");

    assert_eq!(quote.previous_close, None);
    assert_eq!(quote.change, None);
    assert_eq!(quote.change_percent, None);
    assert_eq!(quote.price, Some(50.0));
}

#[test]
fn price_falls_back_to_metadata_previous_close() {
    let body = r#"{"chart":{"result":[{"meta":{"previousClose":99.5,"longName":"Acme Corporation"}}],"error":null}}"#;

    let quote = derive_quote(&symbol("ACME"), &chart(body)).expect("valid quote");

    assert_eq!(quote.price, Some(99.5));
    assert_eq!(quote.previous_close, Some(99.5));
    assert_eq!(quote.change, Some(0.0));
    assert_eq!(quote.display_name, "Acme Corporation");
}

#[test]
fn quote_fields_follow_their_fallback_order() {
    let body = r#"{"chart":{"result":[{
        "meta":{"symbol":"BRK-B","shortName":"Berkshire B","longName":"Berkshire Hathaway Inc.",
                "fullExchangeName":"NYSE","currency":"USD","regularMarketPrice":410.0,
                "regularMarketDayHigh":412.0,"regularMarketDayLow":405.5,
                "regularMarketVolume":3100000,"regularMarketTime":1718380800},
        "timestamp":[1,2,3],
        "indicators":{"quote":[{"open":[400.0,406.0,null],"close":[401.0,405.0,410.0]}]}
    }],"error":null}}"#;

    let quote = derive_quote(&symbol("brk-b"), &chart(body)).expect("valid quote");

    assert_eq!(quote.symbol.as_str(), "BRK-B");
    assert_eq!(quote.display_name, "Berkshire B");
    assert_eq!(quote.exchange.as_deref(), Some("NYSE"));
    assert_eq!(quote.open, Some(406.0));
    assert_eq!(quote.day_high, Some(412.0));
    assert_eq!(quote.day_low, Some(405.5));
    assert_eq!(quote.volume, Some(3_100_000));
    assert_eq!(
        quote.as_of.map(UtcDateTime::format_rfc3339).as_deref(),
        Some("2024-06-14T16:00:00Z")
    );
}

#[test]
fn display_name_falls_back_to_ticker() {
    let body = r#"{"chart":{"result":[{"meta":{"regularMarketPrice":1.0}}],"error":null}}"#;

    let quote = derive_quote(&symbol("ZZZ"), &chart(body)).expect("valid quote");

    assert_eq!(quote.display_name, "ZZZ");
}

#[test]
fn no_result_entries_means_ticker_not_found() {
    let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found"}}}"#;

    let error = derive_quote(&symbol("BADTICKER"), &chart(body)).expect_err("must fail");

    assert_eq!(error.kind(), SourceErrorKind::Quote);
    assert_eq!(error.message(), "Ticker not found");
}

#[test]
fn result_without_metadata_means_no_data_available() {
    let body = r#"{"chart":{"result":[{"timestamp":[1]}],"error":null}}"#;

    let error = derive_quote(&symbol("ACME"), &chart(body)).expect_err("must fail");

    assert_eq!(error.kind(), SourceErrorKind::Quote);
    assert_eq!(error.message(), "No data available");
}
