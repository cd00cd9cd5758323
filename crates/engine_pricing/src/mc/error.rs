//! Error types for the Monte Carlo engine.
//!
//! All failures are deterministic input-validation failures detected before
//! any simulation work begins; once a configuration validates, the pricing
//! computation itself is pure arithmetic over finite inputs and cannot fail.

use thiserror::Error;

/// Configuration error for the Monte Carlo engine.
///
/// # Examples
/// ```
/// use engine_pricing::mc::ConfigError;
///
/// let err = ConfigError::InvalidSimulationCount(3);
/// assert!(err.to_string().contains("even"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Simulation count must be even (antithetic pairing) and within
    /// [2, MAX_PATHS].
    #[error("invalid simulation count {0}: must be even and in range [2, 10_000_000]")]
    InvalidSimulationCount(usize),

    /// Step count maturity/dt outside [1, MAX_STEPS].
    #[error("invalid step count {n_steps}: maturity/dt must resolve to [1, 10_000] steps")]
    InvalidStepCount {
        /// The rounded step count.
        n_steps: i64,
    },

    /// maturity/dt deviates from an integer beyond tolerance.
    #[error("maturity/dt = {ratio} is not an integral step count (maturity = {maturity}, dt = {dt})")]
    NonIntegralStepCount {
        /// Time to maturity in years.
        maturity: f64,
        /// Time step in years.
        dt: f64,
        /// The offending ratio.
        ratio: f64,
    },

    /// A numeric parameter violates its domain constraint.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
