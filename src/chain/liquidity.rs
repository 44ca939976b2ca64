//! Synthesized liquidity
//!
//! Open interest and volume decay exponentially with distance from spot;
//! change in OI is uniform noise around zero. None of it is market data.
//! The random source is supplied by the caller so chains are reproducible
//! under a seeded or mocked generator.

use rand::Rng;

use crate::config::LiquidityConfig;
use crate::core::{Liquidity, OptionType};

/// Distance weight `e^(−|strike − spot| / (decay_steps · step))`
pub fn distance_decay(strike: f64, spot: f64, step: f64, decay_steps: f64) -> f64 {
    (-(strike - spot).abs() / (step * decay_steps)).exp()
}

/// Noise for change in OI: `floor((u − 0.5) · span)`, `u ∈ [0, 1)`
pub fn oi_change_noise(rng: &mut impl Rng, span: f64) -> i64 {
    let u: f64 = rng.gen();
    ((u - 0.5) * span).floor() as i64
}

/// Liquidity fields for one side of one strike
pub fn synthesize(
    config: &LiquidityConfig,
    option_type: OptionType,
    strike: f64,
    spot: f64,
    step: f64,
    rng: &mut impl Rng,
) -> Liquidity {
    let weight = distance_decay(strike, spot, step, config.decay_steps);
    let (oi_base, volume_base) = match option_type {
        OptionType::Call => (config.call_open_interest_base, config.call_volume_base),
        OptionType::Put => (config.put_open_interest_base, config.put_volume_base),
    };

    Liquidity {
        // Saturating casts: NaN spot yields 0
        open_interest: (oi_base * weight).floor() as u64,
        volume: (volume_base * weight).floor() as u64,
        change_in_oi: oi_change_noise(rng, config.oi_change_span),
    }
}
