//! Price command implementation.
//!
//! Runs one Monte Carlo pricing batch and prints the result as a table or
//! as JSON for scripting.

use tracing::info;

use engine_pricing::mc::{price, PricingConfig};

use crate::{CliError, Result};

/// Run the price command.
pub fn run(config: &PricingConfig, format: &str) -> Result<()> {
    info!(
        num_simulations = config.num_simulations(),
        n_steps = config.n_steps(),
        style = %config.option_style(),
        option_type = %config.option_type(),
        "starting pricing run"
    );

    let result = price(config.clone())?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "table" => {
            println!();
            println!(
                "  {} {} | S0 = {} | K = {} | T = {}y | r = {} | sigma = {}",
                config.option_style(),
                config.option_type(),
                config.spot(),
                config.strike(),
                config.maturity(),
                config.rate(),
                config.volatility()
            );
            println!(
                "  paths = {} | steps = {}",
                config.num_simulations(),
                config.n_steps()
            );
            println!();
            println!("  price        {:>12.6}", result.price);
            println!("  std error    {:>12.6}", result.std_error);
            println!("  95% CI       {:>12.6}", result.confidence_95());
            if let Some(analytic) = result.analytic_price {
                println!("  black-scholes{:>12.6}", analytic);
                println!("  difference   {:>12.6}", result.price - analytic);
            }
            println!();
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("pricing complete");
    Ok(())
}
