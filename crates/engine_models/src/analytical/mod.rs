//! Analytical pricing oracles.
//!
//! Closed-form prices exist only for European vanillas in this engine's
//! scope; the Monte Carlo estimate for a European option is cross-checked
//! against [`BlackScholes`], while Asian requests are rejected with
//! [`AnalyticalError::UnsupportedStyle`].

pub mod black_scholes;
pub mod distributions;
mod error;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
