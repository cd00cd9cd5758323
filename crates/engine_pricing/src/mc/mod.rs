//! Monte Carlo pricing kernels.
//!
//! The simulation is one synchronous, CPU-bound batch per pricing call:
//!
//! 1. [`EngineRng`] fills an antithetic standard-normal matrix
//! 2. [`generate_gbm_paths`] turns increments into price paths
//! 3. [`compute_payoffs`] reduces each path to one payoff scalar
//! 4. [`MonteCarloEngine`] discounts the payoff mean and, for European
//!    options, attaches the Black-Scholes price as a validation oracle
//!
//! All buffers live in a [`PathWorkspace`] that is allocated once and
//! reused across calls; the batch is transient and discarded after payoff
//! extraction.

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;
pub mod rng;
pub mod workspace;

// Re-exports for convenient access
pub use config::{PricingConfig, PricingConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use paths::{generate_gbm_paths, GbmParams};
pub use payoff::{compute_payoff, compute_payoffs};
pub use pricer::{price, MonteCarloEngine, PricingResult};
pub use rng::EngineRng;
pub use workspace::PathWorkspace;
