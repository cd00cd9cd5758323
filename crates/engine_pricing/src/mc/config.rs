//! Pricing configuration.
//!
//! [`PricingConfig`] gathers every input of a pricing request into one
//! immutable, centrally validated structure. Use [`PricingConfigBuilder`]
//! to construct instances; validation runs at build time and all errors are
//! reported before any simulation work begins.

use engine_models::instruments::{OptionStyle, OptionType};
use tracing::warn;

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Relative tolerance for maturity/dt deviating from an integer step count.
const STEP_COUNT_TOLERANCE: f64 = 1e-6;

/// Monte Carlo pricing configuration.
///
/// Immutable once built. The step count is derived at build time as
/// `round(maturity / dt)` and rejected if the ratio deviates from an
/// integer beyond a relative tolerance of 1e-6; a smaller, nonzero
/// deviation is rounded and logged at `warn` level.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::PricingConfig;
/// use engine_pricing::{OptionStyle, OptionType};
///
/// let config = PricingConfig::builder()
///     .spot(100.0)
///     .strike(90.0)
///     .maturity(0.5)
///     .rate(0.02)
///     .volatility(0.2)
///     .num_simulations(100_000)
///     .dt(1.0 / 252.0)
///     .option_type(OptionType::Call)
///     .option_style(OptionStyle::European)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_steps(), 126);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    /// Initial asset price (S0).
    spot: f64,
    /// Strike price (K).
    strike: f64,
    /// Time to maturity in years (T).
    maturity: f64,
    /// Risk-free rate (r), annualised.
    rate: f64,
    /// Volatility (sigma), annualised.
    volatility: f64,
    /// Number of simulated paths; even, for antithetic pairing.
    num_simulations: usize,
    /// Time step in years.
    dt: f64,
    /// Steps per path, round(maturity / dt).
    n_steps: usize,
    /// Call or put.
    option_type: OptionType,
    /// European or Asian.
    option_style: OptionStyle,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl PricingConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> PricingConfigBuilder {
        PricingConfigBuilder::default()
    }

    /// Returns the initial asset price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the annualised risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Returns the time step in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the option type (call / put).
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the option style (european / asiatic).
    #[inline]
    pub fn option_style(&self) -> OptionStyle {
        self.option_style
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the present-value discount factor exp(-r * T).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Validates the configuration.
    ///
    /// Builders run this automatically; the engine re-runs it at the start
    /// of every pricing call so a hand-rolled (e.g. deserialised)
    /// configuration still fails fast.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any field violates its domain constraint
    /// (see [`PricingConfigBuilder::build`]).
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_positive("maturity", self.maturity)?;
        validate_positive("dt", self.dt)?;

        if !self.rate.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "rate",
                value: format!("must be finite, got {}", self.rate),
            });
        }

        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "volatility",
                value: format!("must be non-negative, got {}", self.volatility),
            });
        }

        if self.num_simulations < 2
            || self.num_simulations > MAX_PATHS
            || self.num_simulations % 2 != 0
        {
            return Err(ConfigError::InvalidSimulationCount(self.num_simulations));
        }

        let derived = derive_n_steps(self.maturity, self.dt)?;
        if derived != self.n_steps {
            return Err(ConfigError::InvalidStepCount {
                n_steps: self.n_steps as i64,
            });
        }

        Ok(())
    }
}

fn validate_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value: format!("must be positive and finite, got {}", value),
        })
    }
}

/// Derives the step count from maturity and dt.
///
/// Rounds maturity/dt to the nearest integer; rejects the configuration if
/// the deviation exceeds a relative tolerance of 1e-6, and logs a warning
/// for any nonzero deviation that is rounded away.
fn derive_n_steps(maturity: f64, dt: f64) -> Result<usize, ConfigError> {
    let ratio = maturity / dt;
    let rounded = ratio.round();
    let deviation = (ratio - rounded).abs();

    if deviation > STEP_COUNT_TOLERANCE * ratio.max(1.0) {
        return Err(ConfigError::NonIntegralStepCount {
            maturity,
            dt,
            ratio,
        });
    }

    if deviation > 0.0 {
        warn!(
            maturity,
            dt, ratio, "maturity/dt rounded to nearest integral step count"
        );
    }

    if !(1.0..=MAX_STEPS as f64).contains(&rounded) {
        return Err(ConfigError::InvalidStepCount {
            n_steps: rounded as i64,
        });
    }

    Ok(rounded as usize)
}

/// Builder for [`PricingConfig`].
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::PricingConfig;
/// use engine_pricing::{OptionStyle, OptionType};
///
/// let config = PricingConfig::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .maturity(1.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .num_simulations(50_000)
///     .dt(1.0 / 252.0)
///     .option_type(OptionType::Put)
///     .option_style(OptionStyle::Asian)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PricingConfigBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    maturity: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    num_simulations: Option<usize>,
    dt: Option<f64>,
    option_type: Option<OptionType>,
    option_style: Option<OptionStyle>,
    seed: Option<u64>,
}

impl PricingConfigBuilder {
    /// Sets the initial asset price (S0 > 0).
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price (K > 0).
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the time to maturity in years (T > 0).
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the annualised risk-free rate (any finite real).
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the annualised volatility (sigma >= 0).
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the number of simulated paths (even, in [2, MAX_PATHS]).
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the time step in years (dt > 0, maturity/dt integral).
    #[inline]
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Sets the option type.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Sets the option style.
    #[inline]
    pub fn option_style(mut self, option_style: OptionStyle) -> Self {
        self.option_style = Some(option_style);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - any required field is missing
    /// - `spot`, `strike`, `maturity` or `dt` is not positive and finite
    /// - `volatility` is negative or `rate` is not finite
    /// - `num_simulations` is odd, < 2, or exceeds [`MAX_PATHS`]
    /// - `maturity/dt` is not integral within tolerance, or the rounded
    ///   step count falls outside [1, [`MAX_STEPS`]]
    pub fn build(self) -> Result<PricingConfig, ConfigError> {
        let spot = required("spot", self.spot)?;
        let strike = required("strike", self.strike)?;
        let maturity = required("maturity", self.maturity)?;
        let rate = required("rate", self.rate)?;
        let volatility = required("volatility", self.volatility)?;
        let num_simulations = required("num_simulations", self.num_simulations)?;
        let dt = required("dt", self.dt)?;
        let option_type = required("option_type", self.option_type)?;
        let option_style = required("option_style", self.option_style)?;

        validate_positive("maturity", maturity)?;
        validate_positive("dt", dt)?;
        let n_steps = derive_n_steps(maturity, dt)?;

        let config = PricingConfig {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            num_simulations,
            dt,
            n_steps,
            option_type,
            option_style,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

fn required<T>(name: &'static str, value: Option<T>) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::InvalidParameter {
        name,
        value: "must be specified".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> PricingConfigBuilder {
        PricingConfig::builder()
            .spot(100.0)
            .strike(90.0)
            .maturity(0.5)
            .rate(0.02)
            .volatility(0.2)
            .num_simulations(10_000)
            .dt(1.0 / 252.0)
            .option_type(OptionType::Call)
            .option_style(OptionStyle::European)
    }

    #[test]
    fn test_builder_valid() {
        let config = base_builder().build().unwrap();

        assert_eq!(config.spot(), 100.0);
        assert_eq!(config.strike(), 90.0);
        assert_eq!(config.num_simulations(), 10_000);
        assert_eq!(config.n_steps(), 126); // 0.5 years of daily steps
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_with_seed() {
        let config = base_builder().seed(42).build().unwrap();
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_discount_factor() {
        let config = base_builder().build().unwrap();
        assert_eq!(config.discount_factor(), (-0.02_f64 * 0.5).exp());
    }

    #[test]
    fn test_odd_simulation_count_rejected() {
        let result = base_builder().num_simulations(3).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidSimulationCount(3));
    }

    #[test]
    fn test_too_small_simulation_count_rejected() {
        assert!(base_builder().num_simulations(0).build().is_err());
        // 2 is the smallest valid antithetic batch
        assert!(base_builder().num_simulations(2).build().is_ok());
    }

    #[test]
    fn test_too_many_simulations_rejected() {
        let result = base_builder().num_simulations(MAX_PATHS + 2).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSimulationCount(_))
        ));
    }

    #[test]
    fn test_non_positive_parameters_rejected() {
        for (name, builder) in [
            ("spot", base_builder().spot(0.0)),
            ("strike", base_builder().strike(-90.0)),
            ("maturity", base_builder().maturity(0.0)),
            ("dt", base_builder().dt(-0.01)),
        ] {
            let err = builder.build().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidParameter { name: n, .. } if n == name),
                "expected rejection of {}, got {:?}",
                name,
                err
            );
        }
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let err = base_builder().volatility(-0.2).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "volatility",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_volatility_accepted() {
        // Degenerate but valid: all paths collapse to the forward curve
        assert!(base_builder().volatility(0.0).build().is_ok());
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        assert!(base_builder().rate(f64::NAN).build().is_err());
        assert!(base_builder().rate(f64::INFINITY).build().is_err());
        // Negative rates are fine
        assert!(base_builder().rate(-0.01).build().is_ok());
    }

    #[test]
    fn test_non_integral_step_count_rejected() {
        // 1.0 / 0.3 = 3.33... steps
        let result = base_builder().maturity(1.0).dt(0.3).build();
        assert!(matches!(
            result,
            Err(ConfigError::NonIntegralStepCount { .. })
        ));
    }

    #[test]
    fn test_near_integral_step_count_rounded() {
        // Deviation of ~1e-9: rounded to 126 steps, accepted
        let config = base_builder()
            .maturity(0.5)
            .dt(0.5 / (126.0 + 1e-7))
            .build()
            .unwrap();
        assert_eq!(config.n_steps(), 126);
    }

    #[test]
    fn test_dt_larger_than_maturity_rejected() {
        // Rounds to zero steps
        let result = base_builder().maturity(0.1).dt(0.5).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = PricingConfig::builder().spot(100.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "strike",
                ..
            })
        ));
    }
}
