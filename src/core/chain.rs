//! Options chain data
//!
//! One entry per strike (call and put side by side), the full chain for an
//! underlying, and the response envelope handed to the presentation layer.
//! Field names serialize in camelCase to match the consuming UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::greeks::{Greeks, PricedOption};

/// Synthesized liquidity for one side of a strike
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liquidity {
    pub open_interest: u64,
    pub volume: u64,
    pub change_in_oi: i64,
}

/// One side (call or put) of a chain entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSide {
    /// Theoretical premium
    pub premium: f64,
    pub greeks: Greeks,
    /// Synthesized, not market data
    pub open_interest: u64,
    /// Synthesized, not market data
    pub volume: u64,
    /// Random noise with no informational content
    #[serde(rename = "changeInOI")]
    pub change_in_oi: i64,
    /// The input volatility echoed back as a percentage.
    /// Not solved from any price.
    pub implied_volatility: f64,
}

impl OptionSide {
    pub fn new(priced: PricedOption, liquidity: Liquidity, volatility: f64) -> Self {
        Self {
            premium: priced.price,
            greeks: priced.greeks,
            open_interest: liquidity.open_interest,
            volume: liquidity.volume,
            change_in_oi: liquidity.change_in_oi,
            implied_volatility: volatility * 100.0,
        }
    }

    pub fn liquidity(&self) -> Liquidity {
        Liquidity {
            open_interest: self.open_interest,
            volume: self.volume,
            change_in_oi: self.change_in_oi,
        }
    }
}

/// Call and put priced at one strike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsChainEntry {
    pub strike_price: f64,
    pub expiry_date: String,
    pub call: OptionSide,
    pub put: OptionSide,
}

/// Full chain for one underlying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsChainData {
    /// Display label of the underlying
    pub underlying: String,
    pub spot_price: f64,
    /// Expiry labels for display; entries are priced against the first
    pub expiries: Vec<String>,
    pub atm_strike: f64,
    pub options: Vec<OptionsChainEntry>,
}

impl OptionsChainData {
    /// All strikes, ascending
    pub fn strikes(&self) -> Vec<f64> {
        self.options.iter().map(|e| e.strike_price).collect()
    }

    /// Entry at strike
    pub fn entry_at(&self, strike: f64) -> Option<&OptionsChainEntry> {
        self.options
            .iter()
            .find(|e| (e.strike_price - strike).abs() < 0.01)
    }

    /// Entry at the ATM strike
    pub fn atm_entry(&self) -> Option<&OptionsChainEntry> {
        self.entry_at(self.atm_strike)
    }

    /// Saturates at `u64::MAX`
    pub fn total_call_open_interest(&self) -> u64 {
        self.options
            .iter()
            .fold(0, |total: u64, e| total.saturating_add(e.call.open_interest))
    }

    /// Saturates at `u64::MAX`
    pub fn total_put_open_interest(&self) -> u64 {
        self.options
            .iter()
            .fold(0, |total: u64, e| total.saturating_add(e.put.open_interest))
    }

    /// Put/call open-interest ratio (0 when there is no call OI)
    pub fn put_call_ratio(&self) -> f64 {
        let calls = self.total_call_open_interest();
        if calls == 0 {
            return 0.0;
        }
        self.total_put_open_interest() as f64 / calls as f64
    }
}

/// Response envelope: `{ success, data, timestamp }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainResponse {
    pub success: bool,
    pub data: Vec<OptionsChainData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChainResponse {
    pub fn ok(data: Vec<OptionsChainData>) -> Self {
        Self {
            success: true,
            data,
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            error: Some(message.into()),
            timestamp: Utc::now(),
        }
    }

    /// Chain for an underlying label
    pub fn chain_for(&self, underlying: &str) -> Option<&OptionsChainData> {
        self.data.iter().find(|c| c.underlying == underlying)
    }
}
