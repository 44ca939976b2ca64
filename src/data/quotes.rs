//! Spot quote sources
//!
//! The desk only needs a last price per symbol. Live sources implement
//! [`QuoteSource`]; [`MockQuoteSource`] serves the static snapshot used
//! when live retrieval fails.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{MarketError, MarketResult};

/// Last traded price for a symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    pub price: f64,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl SpotQuote {
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            bid: None,
            ask: None,
            timestamp: Utc::now(),
        }
    }

    /// Finite and strictly positive
    pub fn is_usable(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// Anything that can return a spot quote for a symbol
pub trait QuoteSource {
    fn quote(&self, symbol: &str) -> MarketResult<SpotQuote>;

    /// One result per symbol, in input order. Sources with a batch endpoint
    /// override this to answer in a single request.
    fn quotes(&self, symbols: &[&str]) -> Vec<MarketResult<SpotQuote>> {
        symbols.iter().map(|symbol| self.quote(symbol)).collect()
    }
}

impl<Q: QuoteSource + ?Sized> QuoteSource for &Q {
    fn quote(&self, symbol: &str) -> MarketResult<SpotQuote> {
        (**self).quote(symbol)
    }

    fn quotes(&self, symbols: &[&str]) -> Vec<MarketResult<SpotQuote>> {
        (**self).quotes(symbols)
    }
}

/// Static quotes keyed by symbol
#[derive(Debug, Clone, Default)]
pub struct MockQuoteSource {
    prices: HashMap<String, f64>,
}

impl MockQuoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the NSE indices used as fallback data
    pub fn nse_snapshot() -> Self {
        Self::new()
            .with_price("^NSEI", 21731.40)
            .with_price("^NSEBANK", 46125.85)
            .with_price("NIFTY_FIN_SERVICE.NS", 19845.30)
            .with_price("^BSESN", 71752.11)
            .with_price("^INDIAVIX", 13.42)
    }

    pub fn with_price(mut self, symbol: impl Into<String>, price: f64) -> Self {
        self.prices.insert(symbol.into(), price);
        self
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }
}

impl QuoteSource for MockQuoteSource {
    fn quote(&self, symbol: &str) -> MarketResult<SpotQuote> {
        self.prices
            .get(symbol)
            .map(|&price| SpotQuote::new(symbol, price))
            .ok_or_else(|| MarketError::data(format!("No mock quote for {}", symbol)))
    }
}
