//! Pricing Models
//!
//! Implements:
//! - Black-Scholes (European price and Greeks)
//! - Sigma-range strike selection

pub mod black_scholes;
pub mod range;

pub use black_scholes::*;
pub use range::*;
