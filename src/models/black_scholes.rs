//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks computation
//!
//! The normal CDF uses the Zelen & Severo rational approximation
//! (Abramowitz & Stegun 26.2.17) rather than an error function, with
//! absolute error below ~7.5e-8. Coefficients:
//!
//! ```text
//! t    = 1 / (1 + 0.2316419·|x|)
//! d    = 0.3989422804014337 · e^(−x²/2)
//! poly = d·t·(0.319381530 + t·(−0.356563782 + t·(1.781477937
//!          + t·(−1.821255978 + t·1.330274429))))
//! N(x) = x > 0 ? 1 − poly : poly
//! ```
//!
//! Pricing is total: there is no error path. Expired or zero-vol inputs
//! return intrinsic value with zero Greeks, and invalid inputs (NaN,
//! negative spot) propagate as meaningless numbers.

use std::f64::consts::PI;

use crate::core::{Greeks, MarketInputs, OptionType, PricedOption};

const P: f64 = 0.2316419;
const INV_SQRT_2PI: f64 = 0.3989422804014337;
const B1: f64 = 0.319381530;
const B2: f64 = -0.356563782;
const B3: f64 = 1.781477937;
const B4: f64 = -1.821255978;
const B5: f64 = 1.330274429;

/// Days per year used for theta
const DAYS_PER_YEAR: f64 = 365.0;

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let t = 1.0 / (1.0 + P * x.abs());
    let d = INV_SQRT_2PI * (-x * x / 2.0).exp();
    let prob = d * t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    if x > 0.0 {
        1.0 - prob
    } else {
        prob
    }
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-(x * x) / 2.0).exp()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + vol * vol / 2.0) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

/// Black-Scholes price and Greeks for a European option
pub fn price(inputs: &MarketInputs) -> PricedOption {
    let MarketInputs {
        spot,
        strike,
        time_to_expiry: time,
        risk_free_rate: rate,
        volatility: vol,
        option_type,
    } = *inputs;

    if inputs.is_degenerate() {
        return PricedOption::intrinsic(option_type.intrinsic(spot, strike));
    }

    let sqrt_t = time.sqrt();
    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d1 - vol * sqrt_t;
    let df = (-rate * time).exp();
    let pdf_d1 = norm_pdf(d1);

    // Time decay common to both sides
    let term1 = -(spot * pdf_d1 * vol) / (2.0 * sqrt_t);

    let (premium, delta, theta, rho) = match option_type {
        OptionType::Call => {
            let nd2 = norm_cdf(d2);
            (
                spot * norm_cdf(d1) - strike * df * nd2,
                norm_cdf(d1),
                (term1 - rate * strike * df * nd2) / DAYS_PER_YEAR,
                strike * time * df * nd2,
            )
        }
        OptionType::Put => {
            let n_minus_d2 = norm_cdf(-d2);
            (
                strike * df * n_minus_d2 - spot * norm_cdf(-d1),
                norm_cdf(d1) - 1.0,
                (term1 + rate * strike * df * n_minus_d2) / DAYS_PER_YEAR,
                -strike * time * df * n_minus_d2,
            )
        }
    };

    // Gamma and vega are the same for call and put; vega per 1% vol move
    let gamma = pdf_d1 / (spot * vol * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t / 100.0;

    PricedOption::new(premium, Greeks::new(delta, gamma, theta, vega, rho))
}

/// Price the call and the put for the same inputs
pub fn price_pair(inputs: &MarketInputs) -> (PricedOption, PricedOption) {
    (
        price(&inputs.with_option_type(OptionType::Call)),
        price(&inputs.with_option_type(OptionType::Put)),
    )
}
