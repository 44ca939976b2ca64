//! Yahoo Finance quote fetcher
//!
//! Fetches delayed index levels (NIFTY, BANKNIFTY, INDIA VIX) from Yahoo
//! Finance's unofficial v7 quote endpoint.
//!
//! Note: Yahoo Finance data is delayed and intended for personal use.

use chrono::Utc;
use serde::Deserialize;

use crate::core::{MarketError, MarketResult};

use super::quotes::{QuoteSource, SpotQuote};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self::with_base_url("https://query1.finance.yahoo.com/v7/finance")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Get current quote for a symbol
    pub fn get_quote(&self, symbol: &str) -> MarketResult<SpotQuote> {
        let body = self.fetch(symbol)?;
        parse_quote_response(&body, symbol)
    }

    /// Get quotes for several symbols in one request, one result per symbol
    pub fn get_quotes(&self, symbols: &[&str]) -> Vec<MarketResult<SpotQuote>> {
        let parsed = self
            .fetch(&symbols.join(","))
            .and_then(|body| parse_quotes_response(&body, symbols));

        match parsed {
            Ok(quotes) => quotes,
            Err(e) => {
                let reason = e.to_string();
                symbols
                    .iter()
                    .map(|_| Err(MarketError::network(reason.clone())))
                    .collect()
            }
        }
    }

    fn fetch(&self, symbols: &str) -> MarketResult<String> {
        let url = format!("{}/quote", self.base_url);

        self.client
            .get(&url)
            .query(&[("symbols", symbols)])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| MarketError::network(e.to_string()))?
            .text()
            .map_err(|e| MarketError::network(e.to_string()))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource for YahooClient {
    fn quote(&self, symbol: &str) -> MarketResult<SpotQuote> {
        self.get_quote(symbol)
    }

    fn quotes(&self, symbols: &[&str]) -> Vec<MarketResult<SpotQuote>> {
        self.get_quotes(symbols)
    }
}

fn parse_body(body: &str) -> MarketResult<Vec<YahooQuoteData>> {
    let response: YahooQuoteResponse = serde_json::from_str(body)
        .map_err(|e| MarketError::data(format!("Failed to parse quote: {}", e)))?;
    Ok(response.quote_response.result)
}

/// Parse a v7 quote response body for one symbol
pub fn parse_quote_response(body: &str, symbol: &str) -> MarketResult<SpotQuote> {
    let result = parse_body(body)?
        .into_iter()
        .find(|q| q.symbol.as_deref().map_or(true, |s| s == symbol))
        .ok_or_else(|| MarketError::data(format!("No quote data returned for {}", symbol)))?;

    result.to_spot(symbol)
}

/// Parse a multi-symbol response, one result per requested symbol
pub fn parse_quotes_response(
    body: &str,
    symbols: &[&str],
) -> MarketResult<Vec<MarketResult<SpotQuote>>> {
    let results = parse_body(body)?;

    Ok(symbols
        .iter()
        .map(|&symbol| {
            results
                .iter()
                .find(|q| q.symbol.as_deref() == Some(symbol))
                .ok_or_else(|| MarketError::data(format!("No quote data returned for {}", symbol)))
                .and_then(|q| q.to_spot(symbol))
        })
        .collect())
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResult {
    #[serde(default)]
    result: Vec<YahooQuoteData>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteData {
    symbol: Option<String>,
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
    bid: Option<f64>,
    ask: Option<f64>,
}

impl YahooQuoteData {
    fn to_spot(&self, symbol: &str) -> MarketResult<SpotQuote> {
        let price = self
            .regular_market_price
            .ok_or_else(|| MarketError::data(format!("No market price for {}", symbol)))?;

        Ok(SpotQuote {
            symbol: symbol.to_string(),
            price,
            bid: self.bid,
            ask: self.ask,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NIFTY_BODY: &str = r#"{
        "quoteResponse": {
            "result": [
                {"symbol": "^NSEI", "regularMarketPrice": 21731.4, "bid": 21730.0, "ask": 21732.5}
            ],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_quote() {
        let quote = parse_quote_response(NIFTY_BODY, "^NSEI").unwrap();
        assert_eq!(quote.symbol, "^NSEI");
        assert_eq!(quote.price, 21731.4);
        assert_eq!(quote.bid, Some(21730.0));
        assert_eq!(quote.ask, Some(21732.5));
    }

    #[test]
    fn test_parse_empty_result() {
        let body = r#"{"quoteResponse": {"result": [], "error": null}}"#;
        assert!(matches!(parse_quote_response(body, "^NSEI"), Err(MarketError::Data(_))));
    }

    #[test]
    fn test_parse_missing_price() {
        let body = r#"{"quoteResponse": {"result": [{"symbol": "^INDIAVIX"}]}}"#;
        assert!(parse_quote_response(body, "^INDIAVIX").is_err());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_quote_response("<html>", "^NSEI").is_err());
    }

    #[test]
    fn test_parse_batch_in_request_order() {
        let body = r#"{
            "quoteResponse": {
                "result": [
                    {"symbol": "^INDIAVIX", "regularMarketPrice": 13.42},
                    {"symbol": "^NSEI", "regularMarketPrice": 21731.4},
                    {"symbol": "^NSEBANK"}
                ]
            }
        }"#;
        let quotes = parse_quotes_response(
            body,
            &["^NSEI", "^NSEBANK", "NIFTY_FIN_SERVICE.NS", "^INDIAVIX"],
        )
        .unwrap();

        assert_eq!(quotes.len(), 4);
        assert_eq!(quotes[0].as_ref().unwrap().price, 21731.4);
        assert!(matches!(quotes[1], Err(MarketError::Data(_))));
        assert!(matches!(quotes[2], Err(MarketError::Data(_))));
        assert_eq!(quotes[3].as_ref().unwrap().symbol, "^INDIAVIX");
    }

    #[test]
    fn test_unreachable_host_fails_every_symbol() {
        let client = YahooClient::with_base_url("http://127.0.0.1:9");
        let quotes = client.get_quotes(&["^NSEI", "^INDIAVIX"]);

        assert_eq!(quotes.len(), 2);
        for quote in &quotes {
            assert!(matches!(quote, Err(MarketError::Network(_))));
        }
    }

    #[test]
    #[ignore] // Requires network
    fn test_get_quote() {
        let client = YahooClient::new();
        let quote = client.get_quote("^NSEI").unwrap();

        assert!(quote.price > 0.0);
        println!("NIFTY level: {}", quote.price);
    }
}
