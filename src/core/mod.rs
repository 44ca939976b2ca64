//! Core data types
//!
//! Defines fundamental types:
//! - MarketInputs: Spot, strike, time, rate, vol, type (call/put)
//! - PricedOption: Premium plus Greeks
//! - OptionsChainData: Strike ladder with both sides priced
//! - MarketError: Failures at the I/O edges

pub mod chain;
pub mod error;
pub mod greeks;
pub mod option;

pub use chain::*;
pub use error::*;
pub use greeks::*;
pub use option::*;
