//! GBM path generation.
//!
//! Turns a matrix of standard-normal increments into full price paths via
//! the log-space discretisation of Geometric Brownian Motion:
//!
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5 sigma^2) dt + sigma sqrt(dt) Z)
//! ```
//!
//! Each path is a running product of per-step growth factors scaled by the
//! initial spot; there is no cross-path dependency, so paths shard across
//! rayon workers, each owning its row of the path matrix exclusively.
//!
//! # Memory Layout
//!
//! Row-major: `paths[path_idx * n_steps + step_idx]`. The initial spot is
//! not stored; step 0 holds the price after the first increment and step
//! `n_steps - 1` holds the terminal price.

use rayon::prelude::*;

/// Market parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// The asset follows `dS = r S dt + sigma S dW` under the risk-neutral
/// measure.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::GbmParams;
///
/// let params = GbmParams {
///     spot: 100.0,
///     rate: 0.05,
///     volatility: 0.2,
/// };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S0).
    pub spot: f64,
    /// Risk-free rate (r), annualised.
    pub rate: f64,
    /// Volatility (sigma), annualised.
    pub volatility: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
        }
    }
}

/// Generates GBM price paths from pre-drawn normal increments.
///
/// # Arguments
///
/// * `paths` - Output matrix, `n_paths * n_steps`, row-major
/// * `randoms` - Standard-normal matrix of the same shape
/// * `params` - GBM market parameters
/// * `dt` - Time step in years
/// * `n_steps` - Steps per path
///
/// # Determinism
///
/// Each rayon worker writes only its own rows, so the output is identical
/// for any thread count.
///
/// # Panics
///
/// Panics if the two matrices do not share the shape implied by `n_steps`.
pub fn generate_gbm_paths(
    paths: &mut [f64],
    randoms: &[f64],
    params: GbmParams,
    dt: f64,
    n_steps: usize,
) {
    assert_eq!(paths.len(), randoms.len());
    assert_eq!(paths.len() % n_steps, 0);

    // Precomputed per-step drift and diffusion scale
    let drift_dt = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    paths
        .par_chunks_mut(n_steps)
        .zip(randoms.par_chunks(n_steps))
        .for_each(|(path, draws)| {
            let mut price = params.spot;
            for (slot, &z) in path.iter_mut().zip(draws) {
                price *= (drift_dt + vol_sqrt_dt * z).exp();
                *slot = price;
            }
        });
}
