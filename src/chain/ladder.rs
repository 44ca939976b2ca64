//! Strike ladder construction
//!
//! A fixed number of strikes below and above the ATM strike, spaced by the
//! index's strike increment.

use serde::{Deserialize, Serialize};

use crate::models::round_to_nearest;

/// ATM strike: spot rounded to the nearest multiple of `step` (ties up)
pub fn atm_strike(spot: f64, step: f64) -> f64 {
    round_to_nearest(spot, step)
}

/// Ordered strikes centered on the ATM strike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeLadder {
    pub atm_strike: f64,
    pub step: f64,
    pub strikes: Vec<f64>,
}

impl StrikeLadder {
    /// `each_side` strikes below ATM, ATM, then `each_side` above
    pub fn around(spot: f64, step: f64, each_side: usize) -> Self {
        let atm = atm_strike(spot, step);
        let n = each_side as i64;

        // Offsets from ATM, so spacing does not accumulate rounding error
        let strikes = (-n..=n).map(|i| atm + i as f64 * step).collect();

        Self {
            atm_strike: atm,
            step,
            strikes,
        }
    }

    pub fn len(&self) -> usize {
        self.strikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strikes.is_empty()
    }

    pub fn min_strike(&self) -> Option<f64> {
        self.strikes.first().copied()
    }

    pub fn max_strike(&self) -> Option<f64> {
        self.strikes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.strikes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atm_strike() {
        assert_eq!(atm_strike(21731.40, 50.0), 21750.0);
        assert_eq!(atm_strike(46125.85, 100.0), 46100.0);
        assert_eq!(atm_strike(19845.30, 50.0), 19850.0);
        assert_eq!(atm_strike(46150.0, 100.0), 46200.0);
    }

    #[test]
    fn test_nifty_ladder_shape() {
        let ladder = StrikeLadder::around(21731.40, 50.0, 8);

        assert_eq!(ladder.atm_strike, 21750.0);
        assert_eq!(ladder.len(), 17);
        assert_eq!(ladder.min_strike(), Some(21350.0));
        assert_eq!(ladder.max_strike(), Some(22150.0));
        for w in ladder.strikes.windows(2) {
            assert_eq!(w[1] - w[0], 50.0);
        }
        assert_eq!(ladder.strikes[8], ladder.atm_strike);
    }

    #[test]
    fn test_custom_width() {
        let ladder = StrikeLadder::around(46125.85, 100.0, 2);
        assert_eq!(
            ladder.strikes,
            vec![45900.0, 46000.0, 46100.0, 46200.0, 46300.0]
        );

        let single = StrikeLadder::around(100.0, 5.0, 0);
        assert_eq!(single.strikes, vec![100.0]);
        assert!(!single.is_empty());
    }
}
