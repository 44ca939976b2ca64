//! Options chain synthesis
//!
//! Strike ladder around ATM, Black-Scholes pricing per strike, and
//! distance-decay liquidity. Everything here is pure apart from the
//! caller-supplied random source.

pub mod builder;
pub mod ladder;
pub mod liquidity;

pub use builder::*;
pub use ladder::*;
