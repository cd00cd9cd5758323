//! Monte Carlo pricing engine.
//!
//! [`MonteCarloEngine`] wires the pipeline together: antithetic normal
//! generation, GBM path simulation, payoff evaluation, and discounted
//! aggregation. For European options the closed-form Black-Scholes price is
//! attached as a validation oracle; it is never the production price for
//! Asian options, which have no closed form in this engine's scope.
//!
//! # Workspace Reuse
//!
//! The engine keeps a [`PathWorkspace`](super::workspace::PathWorkspace)
//! that is reused across pricing calls; no other state survives a call.
//! With a seeded configuration, the generator is re-seeded on every call,
//! so repeated calls return bit-identical estimates.

use engine_models::analytical::BlackScholes;
use engine_models::instruments::OptionStyle;
use tracing::debug;

use super::config::PricingConfig;
use super::error::ConfigError;
use super::paths::{generate_gbm_paths, GbmParams};
use super::payoff::compute_payoffs;
use super::rng::EngineRng;
use super::workspace::PathWorkspace;

/// Result of one Monte Carlo pricing call.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 12.45,
///     std_error: 0.05,
///     analytic_price: Some(12.44),
/// };
///
/// println!("price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted Monte Carlo estimate of the option's present value.
    pub price: f64,
    /// Standard error of the estimate (discounted).
    pub std_error: f64,
    /// Closed-form Black-Scholes price, attached for European options when
    /// the oracle's preconditions hold (sigma > 0); `None` otherwise.
    pub analytic_price: Option<f64>,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::{MonteCarloEngine, PricingConfig};
/// use engine_pricing::{OptionStyle, OptionType};
///
/// let config = PricingConfig::builder()
///     .spot(100.0)
///     .strike(90.0)
///     .maturity(0.5)
///     .rate(0.02)
///     .volatility(0.2)
///     .num_simulations(10_000)
///     .dt(1.0 / 252.0)
///     .option_type(OptionType::Call)
///     .option_style(OptionStyle::European)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut engine = MonteCarloEngine::new(config).unwrap();
/// let result = engine.price();
/// assert!(result.price > 0.0);
/// ```
pub struct MonteCarloEngine {
    config: PricingConfig,
    workspace: PathWorkspace,
}

impl MonteCarloEngine {
    /// Creates an engine for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid. Validation is
    /// repeated here so a configuration that bypassed the builder (e.g.
    /// deserialised) still fails before any buffer is allocated.
    pub fn new(config: PricingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let workspace = PathWorkspace::new(config.num_simulations(), config.n_steps());

        Ok(Self { config, workspace })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Prices the configured option.
    ///
    /// Runs one full simulation batch: antithetic normals, GBM paths,
    /// payoffs, discounted aggregation. For a seeded configuration the
    /// generator is re-seeded per call, so the result is bit-identical
    /// across calls and across rayon thread counts.
    pub fn price(&mut self) -> PricingResult {
        let n_paths = self.config.num_simulations();
        let n_steps = self.config.n_steps();

        debug!(
            n_paths,
            n_steps,
            style = %self.config.option_style(),
            option_type = %self.config.option_type(),
            "starting pricing run"
        );

        self.workspace.ensure_capacity(n_paths, n_steps);

        // Sequential draw on the seeded generator; consumption is parallel
        let mut rng = match self.config.seed() {
            Some(seed) => EngineRng::from_seed(seed),
            None => EngineRng::from_entropy(),
        };
        // Shape was validated at construction, so the fill cannot fail here
        rng.fill_antithetic_normal(self.workspace.randoms_mut(), n_paths, n_steps)
            .unwrap_or_else(|_| unreachable!("validated configuration"));

        let params = GbmParams::new(
            self.config.spot(),
            self.config.rate(),
            self.config.volatility(),
        );
        let (paths, randoms) = self.workspace.paths_mut_and_randoms();
        generate_gbm_paths(paths, randoms, params, self.config.dt(), n_steps);

        let (payoffs, paths) = self.workspace.payoffs_mut_and_paths();
        compute_payoffs(
            payoffs,
            paths,
            n_steps,
            self.config.option_style(),
            self.config.option_type(),
            self.config.strike(),
        );

        let (mean, std_error) = aggregate(self.workspace.payoffs());
        let discount = self.config.discount_factor();

        let analytic_price = self.analytic_oracle();

        debug!(price = mean * discount, std_error, "pricing run complete");

        PricingResult {
            price: mean * discount,
            std_error: std_error * discount,
            analytic_price,
        }
    }

    /// Black-Scholes cross-check for European options.
    ///
    /// Returns `None` for Asian options, and for degenerate European
    /// configurations (sigma = 0) where the oracle's preconditions fail.
    fn analytic_oracle(&self) -> Option<f64> {
        if self.config.option_style() != OptionStyle::European {
            return None;
        }

        BlackScholes::new(self.config.spot(), self.config.rate(), self.config.volatility())
            .and_then(|bs| {
                bs.price_vanilla(
                    OptionStyle::European,
                    self.config.option_type(),
                    self.config.strike(),
                    self.config.maturity(),
                )
            })
            .ok()
    }
}

/// Sample mean and standard error of a payoff vector.
///
/// Uses the unbiased sample variance (n - 1 denominator).
fn aggregate(payoffs: &[f64]) -> (f64, f64) {
    let n = payoffs.len();
    let mean = payoffs.iter().sum::<f64>() / n as f64;

    let variance = payoffs.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_error = (variance / n as f64).sqrt();

    (mean, std_error)
}

/// Single-call pricing entry point.
///
/// Validates the configuration, runs one simulation batch, and returns the
/// result. Equivalent to constructing a [`MonteCarloEngine`] and calling
/// [`price`](MonteCarloEngine::price) once.
///
/// # Errors
///
/// Returns `ConfigError` if the configuration is invalid; no simulation
/// work is done in that case.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::{price, PricingConfig};
/// use engine_pricing::{OptionStyle, OptionType};
///
/// let config = PricingConfig::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .maturity(1.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .num_simulations(10_000)
///     .dt(1.0 / 252.0)
///     .option_type(OptionType::Put)
///     .option_style(OptionStyle::Asian)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let result = price(config).unwrap();
/// assert!(result.price >= 0.0);
/// assert!(result.analytic_price.is_none()); // no closed form for Asians
/// ```
pub fn price(config: PricingConfig) -> Result<PricingResult, ConfigError> {
    let mut engine = MonteCarloEngine::new(config)?;
    Ok(engine.price())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::config::PricingConfigBuilder;
    use engine_models::instruments::OptionType;
    use approx::assert_relative_eq;

    fn base_config() -> PricingConfigBuilder {
        PricingConfig::builder()
            .spot(100.0)
            .strike(90.0)
            .maturity(0.5)
            .rate(0.02)
            .volatility(0.2)
            .num_simulations(20_000)
            .dt(1.0 / 252.0)
            .option_type(OptionType::Call)
            .option_style(OptionStyle::European)
            .seed(42)
    }

    #[test]
    fn test_seeded_runs_bit_identical() {
        let config = base_config().build().unwrap();

        let mut engine = MonteCarloEngine::new(config.clone()).unwrap();
        let first = engine.price();
        let second = engine.price();
        assert_eq!(first.price, second.price);
        assert_eq!(first.std_error, second.std_error);

        // A fresh engine with the same config agrees too
        let third = price(config).unwrap();
        assert_eq!(first.price, third.price);
    }

    #[test]
    fn test_european_attaches_analytic_price() {
        let result = price(base_config().build().unwrap()).unwrap();
        let analytic = result.analytic_price.expect("European oracle");

        // 20k antithetic paths land well within a few standard errors
        assert!((result.price - analytic).abs() < 4.0 * result.std_error);
    }

    #[test]
    fn test_asian_has_no_analytic_price() {
        let config = base_config()
            .option_style(OptionStyle::Asian)
            .build()
            .unwrap();
        let result = price(config).unwrap();
        assert!(result.analytic_price.is_none());
        assert!(result.price > 0.0);
    }

    #[test]
    fn test_asian_call_below_european_call() {
        // Averaging dampens the upside, so the Asian call is cheaper
        let european = price(base_config().build().unwrap()).unwrap();
        let asian = price(
            base_config()
                .option_style(OptionStyle::Asian)
                .build()
                .unwrap(),
        )
        .unwrap();

        assert!(asian.price < european.price);
    }

    #[test]
    fn test_zero_volatility_degenerate_case() {
        let config = base_config().volatility(0.0).build().unwrap();
        let result = price(config).unwrap();

        // Every path collapses to S0*exp(r t): zero variance, exact price
        let expected = (-0.02_f64 * 0.5).exp() * (100.0 * (0.02_f64 * 0.5).exp() - 90.0);
        assert_relative_eq!(result.price, expected, epsilon = 1e-9);
        assert_relative_eq!(result.std_error, 0.0, epsilon = 1e-12);

        // The oracle declines sigma = 0
        assert!(result.analytic_price.is_none());
    }

    #[test]
    fn test_invalid_config_fails_before_simulation() {
        let err = base_config().num_simulations(3).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidSimulationCount(3));
    }

    #[test]
    fn test_confidence_helpers() {
        let result = PricingResult {
            price: 10.0,
            std_error: 0.1,
            analytic_price: None,
        };
        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(result.confidence_99(), 0.2576, epsilon = 1e-12);
    }

    #[test]
    fn test_aggregate_mean_and_error() {
        let payoffs = [1.0, 2.0, 3.0, 4.0];
        let (mean, std_error) = aggregate(&payoffs);

        assert_relative_eq!(mean, 2.5, epsilon = 1e-15);
        // Sample variance = 5/3; SE = sqrt(5/3 / 4)
        assert_relative_eq!(std_error, (5.0_f64 / 3.0 / 4.0).sqrt(), epsilon = 1e-12);
    }
}
