//! optmc - Command Line Operations for Monte Carlo Option Pricing
//!
//! # Commands
//!
//! - `optmc price` - Price a European or Asian vanilla option
//! - `optmc check` - Validate a pricing configuration without simulating
//!
//! # Examples
//!
//! ```bash
//! optmc price --spot 100 --strike 90 --maturity 0.5 --rate 0.02 \
//!     --volatility 0.2 --num-simulations 100000 --option-type call \
//!     --option-style european --seed 42
//!
//! optmc price --option-style asiatic --format json
//! ```

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use engine_pricing::mc::PricingConfig;
use engine_pricing::{OptionStyle, OptionType};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Monte Carlo option-pricing CLI
#[derive(Parser)]
#[command(name = "optmc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Pricing request parameters, shared by all subcommands.
#[derive(Args, Clone, Debug)]
struct PricingArgs {
    /// Initial asset price (S0)
    #[arg(long, default_value_t = 100.0)]
    spot: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 100.0)]
    strike: f64,

    /// Time to maturity in years (T)
    #[arg(long, default_value_t = 1.0)]
    maturity: f64,

    /// Annualised risk-free rate (r)
    #[arg(long, default_value_t = 0.05)]
    rate: f64,

    /// Annualised volatility (sigma)
    #[arg(long, default_value_t = 0.2)]
    volatility: f64,

    /// Number of Monte Carlo paths (even, for antithetic pairing)
    #[arg(short = 'n', long, default_value_t = 100_000)]
    num_simulations: usize,

    /// Time step in years; maturity/dt must be integral
    #[arg(long, default_value_t = 1.0 / 252.0)]
    dt: f64,

    /// Option type: call or put
    #[arg(short = 't', long, default_value = "call")]
    option_type: OptionType,

    /// Option style: european or asiatic
    #[arg(short = 's', long, default_value = "european")]
    option_style: OptionStyle,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

impl PricingArgs {
    /// Builds and validates the engine configuration.
    fn to_config(&self) -> Result<PricingConfig> {
        let mut builder = PricingConfig::builder()
            .spot(self.spot)
            .strike(self.strike)
            .maturity(self.maturity)
            .rate(self.rate)
            .volatility(self.volatility)
            .num_simulations(self.num_simulations)
            .dt(self.dt)
            .option_type(self.option_type)
            .option_style(self.option_style);

        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }

        Ok(builder.build()?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option with the Monte Carlo engine
    Price {
        #[command(flatten)]
        args: PricingArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Validate a configuration without running a simulation
    Check {
        #[command(flatten)]
        args: PricingArgs,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { args, format } => commands::price::run(&args.to_config()?, &format),
        Commands::Check { args } => commands::check::run(&args.to_config()?),
    }
}
