//! Sigma-range strike selection
//!
//! Expected move from an annualized IV and the short-strangle strikes that
//! sit a multiple of that move away from spot.

use serde::{Deserialize, Serialize};

/// Expected one-sigma move in points: `spot · (iv/100) · √(days/365)`
pub fn expected_range(spot: f64, iv_percent: f64, days_to_expiry: f64) -> f64 {
    spot * (iv_percent / 100.0) * (days_to_expiry / 365.0).sqrt()
}

/// Round to the nearest multiple of `base`, ties rounding up
pub fn round_to_nearest(value: f64, base: f64) -> f64 {
    (value / base + 0.5).floor() * base
}

/// Nearest listed strike, or the rounded target when nothing is listed
pub fn closest_available_strike(target: f64, available: &[f64], base: f64) -> f64 {
    available
        .iter()
        .copied()
        .min_by(|a, b| (a - target).abs().total_cmp(&(b - target).abs()))
        .unwrap_or_else(|| round_to_nearest(target, base))
}

/// Short strangle legs around spot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrangleStrikes {
    /// One-sigma range in points
    pub range_points: f64,
    pub sigma_mult: f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
    /// Call to sell (upper bound rounded)
    pub call_strike: f64,
    /// Put to sell (lower bound rounded)
    pub put_strike: f64,
}

pub fn strangle_strikes(
    spot: f64,
    iv_percent: f64,
    days_to_expiry: f64,
    sigma_mult: f64,
    base: f64,
) -> StrangleStrikes {
    let range_points = expected_range(spot, iv_percent, days_to_expiry);
    let adjustment = range_points * sigma_mult;
    let upper_bound = spot + adjustment;
    let lower_bound = spot - adjustment;

    StrangleStrikes {
        range_points,
        sigma_mult,
        upper_bound,
        lower_bound,
        call_strike: round_to_nearest(upper_bound, base),
        put_strike: round_to_nearest(lower_bound, base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_nearest() {
        assert_eq!(round_to_nearest(21731.40, 50.0), 21750.0);
        assert_eq!(round_to_nearest(21724.99, 50.0), 21700.0);
        // Ties round up
        assert_eq!(round_to_nearest(21725.0, 50.0), 21750.0);
        assert_eq!(round_to_nearest(46150.0, 100.0), 46200.0);
    }

    #[test]
    fn test_expected_range() {
        // One year at 20% is 20% of spot
        assert!((expected_range(100.0, 20.0, 365.0) - 20.0).abs() < 1e-12);
        assert_eq!(expected_range(100.0, 20.0, 0.0), 0.0);
    }

    #[test]
    fn test_strangle_strikes() {
        let s = strangle_strikes(22000.0, 13.0, 4.0, 1.0, 50.0);
        // 22000 · 0.13 · √(4/365) ≈ 299.4
        assert!((s.range_points - 299.39).abs() < 0.05);
        assert_eq!(s.call_strike, 22300.0);
        assert_eq!(s.put_strike, 21700.0);
        assert!(s.upper_bound > s.call_strike - 50.0);

        let wide = strangle_strikes(22000.0, 13.0, 4.0, 2.0, 50.0);
        assert!(wide.call_strike > s.call_strike);
        assert!(wide.put_strike < s.put_strike);
    }

    #[test]
    fn test_closest_available_strike() {
        let listed = [21600.0, 21700.0, 21800.0];
        assert_eq!(closest_available_strike(21740.0, &listed, 50.0), 21700.0);
        assert_eq!(closest_available_strike(21760.0, &listed, 50.0), 21800.0);
        assert_eq!(closest_available_strike(21740.0, &[], 50.0), 21750.0);
    }
}
