//! Example: Black-Scholes pricing and a NIFTY weekly chain
//!
//! Run with: cargo run --example basic_pricing

use market_today::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    // Option parameters
    let spot = 21731.40;
    let strike = 21750.0;
    let days = 4.0;
    let rate = 0.07; // 7% risk-free rate
    let vol = 0.13; // 13% volatility

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     {:.2}", spot);
    println!("Strike:   {:.2}", strike);
    println!("Time:     {:.0} days", days);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let inputs = MarketInputs::with_days(spot, strike, days, rate, vol, OptionType::Call);
    let (call, put) = bs_price_pair(&inputs);
    println!("Call Price: {:.4}", call.price);
    println!("Put Price:  {:.4}", put.price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    let parity_lhs = call.price - put.price;
    let parity_rhs = spot - strike * (-rate * inputs.time_to_expiry).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    println!("\n=== Greeks (Call) ===\n");
    println!("Delta:  {:.4}", call.greeks.delta);
    println!("Gamma:  {:.6}", call.greeks.gamma);
    println!("Theta:  {:.4} (per day)", call.greeks.theta);
    println!("Vega:   {:.4} (per 1% vol)", call.greeks.vega);
    println!("Rho:    {:.4}", call.greeks.rho);

    println!("\n=== NIFTY Chain ===\n");
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let expiries = vec!["25-Jan-2024".to_string()];
    let chain = build_chain(
        spot,
        &IndexConfig::nifty(),
        vol,
        rate,
        days,
        &expiries,
        &mut rng,
    );

    println!("ATM strike: {:.0}", chain.atm_strike);
    println!(
        "{:>10} {:>10} {:>10} {:>10} {:>10}",
        "Call OI", "Call", "Strike", "Put", "Put OI"
    );
    for entry in &chain.options {
        println!(
            "{:>10} {:>10.2} {:>10.0} {:>10.2} {:>10}",
            entry.call.open_interest,
            entry.call.premium,
            entry.strike_price,
            entry.put.premium,
            entry.put.open_interest
        );
    }
    println!("\nPut/call OI ratio: {:.3}", chain.put_call_ratio());

    println!("\n=== 1-Sigma Strangle ===\n");
    let strangle = strangle_strikes(spot, vol * 100.0, days, 1.0, 50.0);
    println!("Range:      {:.2} points", strangle.range_points);
    println!("Sell call:  {:.0}", strangle.call_strike);
    println!("Sell put:   {:.0}", strangle.put_strike);
}
