//! Options chain builder
//!
//! Turns one spot price and one index configuration into a display chain:
//! a strike ladder around ATM, each strike priced as a call and a put with
//! synthesized liquidity attached.

use rand::Rng;

use crate::config::{ChainConfig, IndexConfig};
use crate::core::{
    Liquidity, MarketInputs, OptionSide, OptionType, OptionsChainData, OptionsChainEntry,
};
use crate::models::black_scholes;

use super::ladder::StrikeLadder;
use super::liquidity;

/// Builds option chains with a fixed ladder shape and expiry horizon
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    config: ChainConfig,
}

impl ChainBuilder {
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Ladder for a spot and strike increment
    pub fn ladder(&self, spot: f64, step: f64) -> StrikeLadder {
        StrikeLadder::around(spot, step, self.config.strikes_each_side)
    }

    /// Build the chain for one underlying.
    ///
    /// Every entry is priced against `expiry_labels[0]` using the configured
    /// days to expiry; the remaining labels are only published for display.
    /// Non-finite `spot` or `volatility` propagate into the output.
    pub fn build(
        &self,
        spot: f64,
        index: &IndexConfig,
        volatility: f64,
        risk_free_rate: f64,
        expiry_labels: &[String],
        rng: &mut impl Rng,
    ) -> OptionsChainData {
        let ladder = self.ladder(spot, index.step);
        let time = self.config.time_to_expiry();
        let expiry_date = expiry_labels.first().cloned().unwrap_or_default();

        let options = ladder
            .iter()
            .map(|strike| {
                let inputs = MarketInputs::new(
                    spot,
                    strike,
                    time,
                    risk_free_rate,
                    volatility,
                    OptionType::Call,
                );
                let (call, put) = black_scholes::price_pair(&inputs);

                let call_liquidity =
                    self.liquidity(OptionType::Call, strike, spot, index.step, rng);
                let put_liquidity = self.liquidity(OptionType::Put, strike, spot, index.step, rng);

                OptionsChainEntry {
                    strike_price: strike,
                    expiry_date: expiry_date.clone(),
                    call: OptionSide::new(call, call_liquidity, volatility),
                    put: OptionSide::new(put, put_liquidity, volatility),
                }
            })
            .collect();

        tracing::debug!(
            "Built {} chain: spot {:.2}, ATM {}, {} strikes",
            index.label,
            spot,
            ladder.atm_strike,
            ladder.len()
        );

        OptionsChainData {
            underlying: index.label.clone(),
            spot_price: spot,
            expiries: expiry_labels.to_vec(),
            atm_strike: ladder.atm_strike,
            options,
        }
    }

    fn liquidity(
        &self,
        option_type: OptionType,
        strike: f64,
        spot: f64,
        step: f64,
        rng: &mut impl Rng,
    ) -> Liquidity {
        liquidity::synthesize(&self.config.liquidity, option_type, strike, spot, step, rng)
    }
}

/// Build a chain with an explicit days-to-expiry and default ladder shape
pub fn build_chain(
    spot: f64,
    index: &IndexConfig,
    volatility: f64,
    risk_free_rate: f64,
    days_to_expiry: f64,
    expiry_labels: &[String],
    rng: &mut impl Rng,
) -> OptionsChainData {
    let builder = ChainBuilder::new(ChainConfig {
        days_to_expiry,
        ..Default::default()
    });
    builder.build(spot, index, volatility, risk_free_rate, expiry_labels, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn labels() -> Vec<String> {
        vec![
            "25-Jan-2024".to_string(),
            "01-Feb-2024".to_string(),
            "08-Feb-2024".to_string(),
        ]
    }

    fn nifty_chain(rng: &mut impl Rng) -> OptionsChainData {
        build_chain(
            21731.40,
            &IndexConfig::nifty(),
            0.13,
            0.07,
            4.0,
            &labels(),
            rng,
        )
    }

    #[test]
    fn test_nifty_ladder() {
        let chain = nifty_chain(&mut StepRng::new(0, 0));

        assert_eq!(chain.underlying, "NIFTY");
        assert_eq!(chain.spot_price, 21731.40);
        assert_eq!(chain.atm_strike, 21750.0);
        assert_eq!(chain.options.len(), 17);
        assert_eq!(chain.options.first().unwrap().strike_price, 21350.0);
        assert_eq!(chain.options.last().unwrap().strike_price, 22150.0);
        for w in chain.options.windows(2) {
            assert_eq!(w[1].strike_price - w[0].strike_price, 50.0);
        }
    }

    #[test]
    fn test_entries_priced_against_first_expiry() {
        let chain = nifty_chain(&mut StepRng::new(0, 0));
        assert_eq!(chain.expiries, labels());
        assert!(chain.options.iter().all(|e| e.expiry_date == "25-Jan-2024"));
    }

    #[test]
    fn test_entries_match_pricer() {
        let chain = nifty_chain(&mut StepRng::new(0, 0));
        let atm = chain.atm_entry().unwrap();

        let inputs = MarketInputs::with_days(21731.40, 21750.0, 4.0, 0.07, 0.13, OptionType::Call);
        let (call, put) = black_scholes::price_pair(&inputs);

        assert_eq!(atm.call.premium, call.price);
        assert_eq!(atm.put.premium, put.price);
        assert_eq!(atm.call.greeks, call.greeks);
        assert_eq!(atm.put.greeks, put.greeks);
    }

    #[test]
    fn test_implied_volatility_is_echoed_input() {
        let chain = nifty_chain(&mut StepRng::new(0, 0));
        for entry in &chain.options {
            assert!((entry.call.implied_volatility - 13.0).abs() < 1e-12);
            assert!((entry.put.implied_volatility - 13.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_liquidity_peaks_near_spot() {
        let chain = nifty_chain(&mut StepRng::new(0, 0));
        let atm = chain.atm_entry().unwrap();

        for entry in &chain.options {
            assert!(entry.call.open_interest <= atm.call.open_interest);
            assert!(entry.put.open_interest <= atm.put.open_interest);
            // Call base exceeds put base
            assert!(entry.call.open_interest > entry.put.open_interest);
            assert!(entry.call.volume > entry.put.volume);
        }
    }

    #[test]
    fn test_seeded_chains_are_reproducible() {
        let a = nifty_chain(&mut ChaCha8Rng::seed_from_u64(11));
        let b = nifty_chain(&mut ChaCha8Rng::seed_from_u64(11));
        let c = nifty_chain(&mut ChaCha8Rng::seed_from_u64(12));

        assert_eq!(a, b);
        let noise = |chain: &OptionsChainData| -> Vec<i64> {
            chain.options.iter().map(|e| e.call.change_in_oi).collect()
        };
        assert_ne!(noise(&a), noise(&c));
    }

    #[test]
    fn test_put_call_parity_across_ladder() {
        let chain = nifty_chain(&mut StepRng::new(0, 0));
        let t: f64 = 4.0 / 365.0;
        for entry in &chain.options {
            let lhs = entry.call.premium - entry.put.premium;
            let rhs = chain.spot_price - entry.strike_price * (-0.07 * t).exp();
            assert!((lhs - rhs).abs() < 1e-6 * chain.spot_price);
        }
    }

    #[test]
    fn test_builder_with_custom_config() {
        let builder = ChainBuilder::new(ChainConfig {
            strikes_each_side: 3,
            days_to_expiry: 7.0,
            ..Default::default()
        });
        let chain = builder.build(
            46125.85,
            &IndexConfig::bank_nifty(),
            0.15,
            0.07,
            &labels(),
            &mut StepRng::new(0, 0),
        );

        assert_eq!(chain.underlying, "BANK NIFTY");
        assert_eq!(chain.atm_strike, 46100.0);
        assert_eq!(
            chain.strikes(),
            vec![45800.0, 45900.0, 46000.0, 46100.0, 46200.0, 46300.0, 46400.0]
        );
    }

    #[test]
    fn test_zero_volatility_gives_intrinsic_chain() {
        let mut rng = StepRng::new(0, 0);
        let chain = build_chain(
            21731.40,
            &IndexConfig::nifty(),
            0.0,
            0.07,
            4.0,
            &labels(),
            &mut rng,
        );
        for entry in &chain.options {
            assert_eq!(entry.call.premium, (21731.40 - entry.strike_price).max(0.0));
            assert_eq!(entry.put.premium, (entry.strike_price - 21731.40).max(0.0));
            assert!(entry.call.greeks.is_zero());
        }
    }

    #[test]
    fn test_nan_spot_propagates() {
        let mut rng = StepRng::new(0, 0);
        let chain = build_chain(
            f64::NAN,
            &IndexConfig::nifty(),
            0.13,
            0.07,
            4.0,
            &labels(),
            &mut rng,
        );
        assert!(chain.atm_strike.is_nan());
        assert_eq!(chain.options.len(), 17);
        assert!(chain.options[0].call.premium.is_nan());
    }

    #[test]
    fn test_no_expiry_labels() {
        let mut rng = StepRng::new(0, 0);
        let chain = build_chain(
            21731.40,
            &IndexConfig::nifty(),
            0.13,
            0.07,
            4.0,
            &[],
            &mut rng,
        );
        assert!(chain.expiries.is_empty());
        assert!(chain.options.iter().all(|e| e.expiry_date.is_empty()));
    }
}
