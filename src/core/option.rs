//! Option type and pricing inputs
//!
//! Represents the five scalar market inputs of a European option together
//! with its side (call/put).

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Market inputs for a single European option.
///
/// No validation is performed: nonsensical values (negative spot, NaN)
/// flow through the pricer and produce meaningless output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Years until expiry (T)
    pub time_to_expiry: f64,
    /// Annualized continuously-compounded rate (r)
    pub risk_free_rate: f64,
    /// Annualized decimal volatility (σ)
    pub volatility: f64,
    pub option_type: OptionType,
}

impl MarketInputs {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        }
    }

    /// Same inputs, calendar days to expiry instead of years
    pub fn with_days(
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self::new(
            spot,
            strike,
            days_to_expiry / 365.0,
            risk_free_rate,
            volatility,
            option_type,
        )
    }

    /// Copy of these inputs for the other side (or the same side)
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Copy of these inputs at a different strike
    pub fn with_strike(&self, strike: f64) -> Self {
        Self { strike, ..*self }
    }

    /// Inputs for which the closed form is undefined (no time value)
    pub fn is_degenerate(&self) -> bool {
        self.time_to_expiry <= 0.0 || self.volatility <= 0.0
    }

    /// Intrinsic value of the option at the current spot
    pub fn intrinsic(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Is this option in the money?
    pub fn is_itm(&self) -> bool {
        match self.option_type {
            OptionType::Call => self.spot > self.strike,
            OptionType::Put => self.spot < self.strike,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_option_type_serializes_uppercase() {
        let call = serde_json::to_string(&OptionType::Call).unwrap();
        assert_eq!(call, "\"CALL\"");
        let put: OptionType = serde_json::from_str("\"PUT\"").unwrap();
        assert_eq!(put, OptionType::Put);
    }

    #[test]
    fn test_with_days() {
        let inputs = MarketInputs::with_days(100.0, 100.0, 73.0, 0.05, 0.2, OptionType::Call);
        assert!((inputs.time_to_expiry - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        let base = MarketInputs::new(100.0, 95.0, 0.5, 0.05, 0.2, OptionType::Call);
        assert!(!base.is_degenerate());

        let mut expired = base;
        expired.time_to_expiry = 0.0;
        assert!(expired.is_degenerate());

        let mut no_vol = base;
        no_vol.volatility = -0.1;
        assert!(no_vol.is_degenerate());
    }

    #[test]
    fn test_moneyness() {
        let call = MarketInputs::new(110.0, 100.0, 0.5, 0.05, 0.2, OptionType::Call);
        assert!(call.is_itm());
        assert!(!call.with_option_type(OptionType::Put).is_itm());
        assert_eq!(call.with_strike(120.0).intrinsic(), 0.0);
    }
}
