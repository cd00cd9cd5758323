//! Check command implementation.
//!
//! Validates a pricing configuration and reports the derived simulation
//! shape without running any paths. Useful for catching odd simulation
//! counts or non-integral maturity/dt before a long run.

use tracing::info;

use engine_pricing::mc::PricingConfig;

use crate::Result;

/// Run the check command.
///
/// The configuration reaching this point has already passed builder
/// validation; this prints the derived batch shape.
pub fn run(config: &PricingConfig) -> Result<()> {
    info!("configuration valid");

    println!("configuration OK");
    println!("  paths:          {}", config.num_simulations());
    println!("  steps per path: {}", config.n_steps());
    println!(
        "  batch size:     {} doubles ({:.1} MiB)",
        config.num_simulations() * config.n_steps(),
        (config.num_simulations() * config.n_steps() * 8) as f64 / (1024.0 * 1024.0)
    );
    println!("  discount:       {:.6}", config.discount_factor());

    Ok(())
}
