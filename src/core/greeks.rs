//! Option Greeks
//!
//! First and second order sensitivities for options, and the priced result
//! that carries them.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: dV/dt per calendar day
    pub theta: f64,
    /// Vega: dV/dσ per 1 percentage point of volatility
    pub vega: f64,
    /// Rho: dV/dr, unscaled (per 1.00 of rate)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// All sensitivities zero (expired or zero-vol option)
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Theoretical price plus Greeks from one pricing call
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricedOption {
    pub price: f64,
    pub greeks: Greeks,
}

impl PricedOption {
    pub fn new(price: f64, greeks: Greeks) -> Self {
        Self { price, greeks }
    }

    /// Price with no sensitivities
    pub fn intrinsic(price: f64) -> Self {
        Self::new(price, Greeks::zero())
    }
}
