//! Configuration for chain generation
//!
//! Index table, rate and volatility fallbacks, ladder shape and the
//! liquidity heuristic. Every value the desk uses lives here so tests can
//! supply arbitrary market scenarios.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{MarketError, MarketResult};

/// One tradable index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Internal key (e.g. "NIFTY")
    pub key: String,
    /// Quote-source symbol (e.g. "^NSEI")
    pub symbol: String,
    /// Display label written to the chain
    pub label: String,
    /// Strike increment
    pub step: f64,
}

impl IndexConfig {
    pub fn new(
        key: impl Into<String>,
        symbol: impl Into<String>,
        label: impl Into<String>,
        step: f64,
    ) -> Self {
        Self {
            key: key.into(),
            symbol: symbol.into(),
            label: label.into(),
            step,
        }
    }

    pub fn nifty() -> Self {
        Self::new("NIFTY", "^NSEI", "NIFTY", 50.0)
    }

    pub fn bank_nifty() -> Self {
        Self::new("BANKNIFTY", "^NSEBANK", "BANK NIFTY", 100.0)
    }

    pub fn fin_nifty() -> Self {
        Self::new(
            "FINNIFTY",
            "NIFTY_FIN_SERVICE.NS",
            "NIFTY FIN SERVICES",
            50.0,
        )
    }
}

/// Distance-decay liquidity heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityConfig {
    /// Call OI at zero distance from spot
    /// Default: 2,000,000
    pub call_open_interest_base: f64,

    /// Put OI at zero distance from spot
    /// Default: 1,800,000
    pub put_open_interest_base: f64,

    /// Call volume at zero distance from spot
    /// Default: 500,000
    pub call_volume_base: f64,

    /// Put volume at zero distance from spot
    /// Default: 450,000
    pub put_volume_base: f64,

    /// Decay length in strike steps: weight = e^(−|k − spot| / (decay_steps · step))
    /// Default: 3.0
    pub decay_steps: f64,

    /// Full width of the change-in-OI noise, centered on zero
    /// Default: 50,000 (±25,000)
    pub oi_change_span: f64,
}

impl Default for LiquidityConfig {
    fn default() -> Self {
        Self {
            call_open_interest_base: 2_000_000.0,
            put_open_interest_base: 1_800_000.0,
            call_volume_base: 500_000.0,
            put_volume_base: 450_000.0,
            decay_steps: 3.0,
            oi_change_span: 50_000.0,
        }
    }
}

/// Ladder shape and expiry horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Strikes on each side of ATM
    /// Default: 8 (17 strikes in total)
    pub strikes_each_side: usize,

    /// Calendar days to the priced expiry, not derived from the labels
    /// Default: 4
    pub days_to_expiry: f64,

    pub liquidity: LiquidityConfig,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            strikes_each_side: 8,
            days_to_expiry: 4.0,
            liquidity: LiquidityConfig::default(),
        }
    }
}

impl ChainConfig {
    /// Time to expiry in years
    pub fn time_to_expiry(&self) -> f64 {
        self.days_to_expiry / 365.0
    }
}

/// Full market desk configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    pub indices: Vec<IndexConfig>,

    /// Volatility index whose level / 100 is used as σ
    /// Default: "^INDIAVIX"
    pub volatility_symbol: String,

    /// Default: 0.07
    pub risk_free_rate: f64,

    /// σ used when the volatility index is unavailable
    /// Default: 0.13
    pub fallback_volatility: f64,

    /// Number of weekly expiry labels to publish
    /// Default: 3
    pub expiry_count: usize,

    pub chain: ChainConfig,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            indices: vec![
                IndexConfig::nifty(),
                IndexConfig::bank_nifty(),
                IndexConfig::fin_nifty(),
            ],
            volatility_symbol: "^INDIAVIX".to_string(),
            risk_free_rate: 0.07,
            fallback_volatility: 0.13,
            expiry_count: 3,
            chain: ChainConfig::default(),
        }
    }
}

impl MarketConfig {
    pub fn from_json_str(json: &str) -> MarketResult<Self> {
        let config: MarketConfig = serde_json::from_str(json)
            .map_err(|e| MarketError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> MarketResult<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Index by key
    pub fn index(&self, key: &str) -> Option<&IndexConfig> {
        self.indices.iter().find(|i| i.key == key)
    }

    pub fn validate(&self) -> MarketResult<()> {
        if self.indices.is_empty() {
            return Err(MarketError::config("No indices configured"));
        }
        for index in &self.indices {
            if !(index.step > 0.0) {
                return Err(MarketError::config(format!(
                    "Strike step for {} must be positive, got {}",
                    index.key, index.step
                )));
            }
        }
        if !(self.fallback_volatility >= 0.0) {
            return Err(MarketError::config("Fallback volatility must be non-negative"));
        }
        if self.expiry_count == 0 {
            return Err(MarketError::config("expiry_count must be at least 1"));
        }
        let liquidity = &self.chain.liquidity;
        if !(liquidity.decay_steps > 0.0) {
            return Err(MarketError::config("Liquidity decay_steps must be positive"));
        }
        let bases = [
            liquidity.call_open_interest_base,
            liquidity.put_open_interest_base,
            liquidity.call_volume_base,
            liquidity.put_volume_base,
        ];
        if bases.iter().any(|b| !(b.is_finite() && *b >= 0.0)) {
            return Err(MarketError::config("Liquidity bases must be finite and non-negative"));
        }
        Ok(())
    }
}
