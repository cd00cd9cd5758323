//! Black-Scholes pricing for European vanilla options.
//!
//! Used by the Monte Carlo engine as a validation oracle: the simulated
//! European price must converge to the closed form as the path count grows.
//!
//! ## Formulas
//!
//! **Call**: C = S*N(d1) - K*e^(-rT)*N(d2)
//! **Put**:  P = K*e^(-rT)*N(-d2) - S*N(-d1)
//!
//! Where:
//! - d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma*sqrt(T))
//! - d2 = d1 - sigma*sqrt(T)

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{OptionStyle, OptionType};

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g. `f64`)
///
/// # Examples
/// ```
/// use engine_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (sigma)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if `spot <= 0`
    /// - `AnalyticalError::InvalidVolatility` if `volatility <= 0`
    ///
    /// # Examples
    /// ```
    /// use engine_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term.
    ///
    /// d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma*sqrt(T))
    ///
    /// Callers must ensure `expiry > 0`; the style-checked entry point
    /// [`price_vanilla`](Self::price_vanilla) enforces this.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term: d2 = d1 - sigma*sqrt(T).
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price: C = S*N(d1) - K*e^(-rT)*N(d2).
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// European put price: P = K*e^(-rT)*N(-d2) - S*N(-d1).
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Style-checked oracle entry point.
    ///
    /// Prices a European call or put; Asian requests are rejected since no
    /// closed form exists in this engine's scope.
    ///
    /// # Errors
    /// - `AnalyticalError::UnsupportedStyle` for [`OptionStyle::Asian`]
    /// - `AnalyticalError::InvalidExpiry` if `expiry <= 0`
    ///
    /// # Examples
    /// ```
    /// use engine_models::analytical::BlackScholes;
    /// use engine_models::instruments::{OptionStyle, OptionType};
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.02, 0.2).unwrap();
    /// let price = bs
    ///     .price_vanilla(OptionStyle::European, OptionType::Call, 90.0, 0.5)
    ///     .unwrap();
    /// assert!((price - 12.45).abs() < 0.01);
    /// ```
    pub fn price_vanilla(
        &self,
        style: OptionStyle,
        option_type: OptionType,
        strike: T,
        expiry: T,
    ) -> Result<T, AnalyticalError> {
        if style != OptionStyle::European {
            return Err(AnalyticalError::UnsupportedStyle { style });
        }

        if expiry <= T::zero() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }

        Ok(match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        })
    }
}
