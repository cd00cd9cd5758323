//! Error types for analytical pricing.

use crate::instruments::OptionStyle;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Examples
/// ```
/// use engine_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive spot price.
    #[error("invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value.
        spot: f64,
    },

    /// Non-positive volatility. The Black-Scholes d1 term divides by sigma.
    #[error("invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Non-positive expiry. The d1 term divides by sqrt(T).
    #[error("invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value.
        expiry: f64,
    },

    /// No closed form exists for this style in the engine's scope.
    #[error("unsupported option style for analytical pricing: {style}")]
    UnsupportedStyle {
        /// The rejected option style.
        style: OptionStyle,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(err.to_string(), "invalid volatility: sigma = -0.2");

        let err = AnalyticalError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(err.to_string(), "invalid expiry: T = 0");

        let err = AnalyticalError::UnsupportedStyle {
            style: OptionStyle::Asian,
        };
        assert_eq!(
            err.to_string(),
            "unsupported option style for analytical pricing: asiatic"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        let _: &dyn std::error::Error = &err;
    }
}
