//! # Market Today - Black-Scholes Option Chains
//!
//! Prices European index options and synthesizes display-ready option
//! chains for NSE indices (NIFTY, BANK NIFTY, FIN NIFTY).
//!
//! ## Overview
//!
//! Two layers:
//! - **Pricing**: closed-form Black-Scholes price and Greeks from five
//!   scalar inputs, with a polynomial normal CDF
//! - **Chain building**: a 17-strike ladder around ATM, each strike priced
//!   as call and put, with distance-decay open interest and volume
//!
//! Around them sit the quote sources, the weekly expiry calendar and a
//! response cache that the desk uses to serve requests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use market_today::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Price a single option
//! let inputs = MarketInputs::with_days(21731.40, 21750.0, 4.0, 0.07, 0.13, OptionType::Call);
//! let call = bs_price(&inputs);
//! println!("premium {:.2}, delta {:.3}", call.price, call.greeks.delta);
//!
//! // Build a chain
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let expiries = vec!["25-Jan-2024".to_string()];
//! let chain = build_chain(21731.40, &IndexConfig::nifty(), 0.13, 0.07, 4.0, &expiries, &mut rng);
//! assert_eq!(chain.options.len(), 17);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - Solve implied volatility (`impliedVolatility` echoes the input σ)
//! - Price American exercise or dividends
//! - Aggregate multi-leg portfolio risk
//! - Provide real open interest or volume

pub mod chain;
pub mod config;
pub mod core;
pub mod data;
pub mod desk;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        ChainResponse, Greeks, Liquidity, MarketError, MarketInputs, MarketResult, OptionSide,
        OptionType, OptionsChainData, OptionsChainEntry, PricedOption,
    };

    // Configuration
    pub use crate::config::{ChainConfig, IndexConfig, LiquidityConfig, MarketConfig};

    // Models
    pub use crate::models::{
        closest_available_strike, expected_range, norm_cdf, norm_pdf,
        // Black-Scholes
        price as bs_price,
        price_pair as bs_price_pair,
        round_to_nearest, strangle_strikes, StrangleStrikes,
    };

    // Chains
    pub use crate::chain::{atm_strike, build_chain, ChainBuilder, StrikeLadder};

    // Data
    pub use crate::data::{
        expiry_labels, format_expiry, next_weekly_expiries, CacheConfig, ChainCache,
        MockQuoteSource, QuoteSource, SpotQuote, YahooClient,
    };

    pub use crate::desk::OptionsDesk;
}

// Re-export main types at crate root
pub use crate::core::{MarketError, MarketResult};
pub use crate::desk::OptionsDesk;
