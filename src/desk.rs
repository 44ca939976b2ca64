//! Options desk
//!
//! Request-level orchestration: pull spot levels and the volatility index
//! from a quote source, substitute fallback data for anything unavailable,
//! then build one chain per configured index.

use chrono::NaiveDate;
use rand::Rng;

use crate::chain::ChainBuilder;
use crate::config::{IndexConfig, MarketConfig};
use crate::core::{ChainResponse, MarketError, MarketResult};
use crate::data::{expiry_labels, ChainCache, MockQuoteSource, QuoteSource, SpotQuote};

pub struct OptionsDesk<Q> {
    config: MarketConfig,
    source: Q,
    fallback: MockQuoteSource,
    builder: ChainBuilder,
}

impl<Q: QuoteSource> OptionsDesk<Q> {
    pub fn new(config: MarketConfig, source: Q) -> Self {
        let builder = ChainBuilder::new(config.chain.clone());
        Self {
            config,
            source,
            fallback: MockQuoteSource::nse_snapshot(),
            builder,
        }
    }

    /// Replace the fallback snapshot
    pub fn with_fallback(mut self, fallback: MockQuoteSource) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// σ from the volatility index (level / 100), or the configured fallback
    pub fn volatility(&self) -> f64 {
        let quote = self.source.quote(&self.config.volatility_symbol);
        self.volatility_from(quote)
    }

    /// Live spot for an index, else the fallback snapshot's
    pub fn spot(&self, index: &IndexConfig) -> Option<f64> {
        self.spot_from(index, self.source.quote(&index.symbol))
    }

    fn volatility_from(&self, quote: MarketResult<SpotQuote>) -> f64 {
        let symbol = &self.config.volatility_symbol;
        match quote {
            Ok(quote) if quote.is_usable() => quote.price / 100.0,
            Ok(quote) => {
                tracing::warn!(
                    "Unusable {} level {}, using fallback volatility {}",
                    symbol,
                    quote.price,
                    self.config.fallback_volatility
                );
                self.config.fallback_volatility
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to get {}: {}, using fallback volatility {}",
                    symbol,
                    e,
                    self.config.fallback_volatility
                );
                self.config.fallback_volatility
            }
        }
    }

    fn spot_from(&self, index: &IndexConfig, quote: MarketResult<SpotQuote>) -> Option<f64> {
        let live = match quote {
            Ok(quote) if quote.is_usable() => return Some(quote.price),
            Ok(quote) => format!("unusable price {}", quote.price),
            Err(e) => e.to_string(),
        };

        match self.fallback.quote(&index.symbol) {
            Ok(quote) => {
                tracing::warn!(
                    "Failed to get {} ({}), using fallback spot {:.2}",
                    index.symbol,
                    live,
                    quote.price
                );
                Some(quote.price)
            }
            Err(_) => {
                tracing::warn!(
                    "Failed to get {} ({}) and no fallback available, skipping {}",
                    index.symbol,
                    live,
                    index.key
                );
                None
            }
        }
    }

    /// Build chains for every configured index.
    ///
    /// All index levels and the volatility index are requested in one batch.
    pub fn chains(&self, today: NaiveDate, rng: &mut impl Rng) -> ChainResponse {
        let mut symbols: Vec<&str> = self
            .config
            .indices
            .iter()
            .map(|index| index.symbol.as_str())
            .collect();
        symbols.push(&self.config.volatility_symbol);

        let mut quotes = self.source.quotes(&symbols).into_iter();
        let mut next_quote = |symbol: &str| {
            quotes.next().unwrap_or_else(|| {
                Err(MarketError::data(format!("No quote returned for {}", symbol)))
            })
        };

        let spots: Vec<_> = self
            .config
            .indices
            .iter()
            .map(|index| next_quote(&index.symbol))
            .collect();
        let volatility = self.volatility_from(next_quote(&self.config.volatility_symbol));
        let expiries = expiry_labels(today, self.config.expiry_count);

        let data: Vec<_> = self
            .config
            .indices
            .iter()
            .zip(spots)
            .filter_map(|(index, quote)| {
                let spot = self.spot_from(index, quote)?;
                Some(self.builder.build(
                    spot,
                    index,
                    volatility,
                    self.config.risk_free_rate,
                    &expiries,
                    rng,
                ))
            })
            .collect();

        if data.is_empty() {
            return ChainResponse::failure("Failed to generate options");
        }

        ChainResponse::ok(data)
    }

    /// Serve from cache while fresh, otherwise rebuild and store
    pub fn cached_chains(
        &self,
        cache: &ChainCache,
        key: &str,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> MarketResult<ChainResponse> {
        if let Some(response) = cache.load(key)? {
            return Ok(response);
        }

        tracing::info!("Generating fresh chains for {}", key);
        let response = self.chains(today, rng);
        if response.success {
            cache.save(key, &response)?;
        }
        Ok(response)
    }
}
