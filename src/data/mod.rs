//! Data fetching and storage
//!
//! Handles:
//! - Spot quote sources (Yahoo Finance, static fallback snapshot)
//! - Weekly expiry calendar
//! - Local caching of generated chains

pub mod cache;
pub mod expiry;
pub mod quotes;
pub mod yahoo;

pub use cache::*;
pub use expiry::*;
pub use quotes::*;
pub use yahoo::*;
