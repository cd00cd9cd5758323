//! Payoff evaluation.
//!
//! Reduces each simulated path to one payoff scalar. The four supported
//! contracts are the product of [`OptionStyle`] and [`OptionType`]; dispatch
//! is an exhaustive `match`, so an unsupported combination cannot be
//! expressed.
//!
//! - European call: `max(S_T - K, 0)`
//! - European put: `max(K - S_T, 0)`
//! - Asian call: `max(mean(S) - K, 0)`
//! - Asian put: `max(K - mean(S), 0)`
//!
//! The Asian arithmetic mean runs over every simulated step of the path,
//! not a subset of observation dates.

use engine_models::instruments::{OptionStyle, OptionType};
use rayon::prelude::*;

/// Computes the payoff of a single path.
///
/// # Panics
///
/// Panics if `path` is empty.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::compute_payoff;
/// use engine_pricing::{OptionStyle, OptionType};
///
/// let path = [95.0, 105.0, 110.0];
///
/// let european_call =
///     compute_payoff(&path, OptionStyle::European, OptionType::Call, 100.0);
/// assert_eq!(european_call, 10.0);
///
/// let asian_put = compute_payoff(&path, OptionStyle::Asian, OptionType::Put, 110.0);
/// assert!((asian_put - (110.0 - 310.0 / 3.0)).abs() < 1e-12);
/// ```
#[inline]
pub fn compute_payoff(path: &[f64], style: OptionStyle, option_type: OptionType, strike: f64) -> f64 {
    let reference = match style {
        OptionStyle::European => path[path.len() - 1],
        OptionStyle::Asian => path.iter().sum::<f64>() / path.len() as f64,
    };

    let intrinsic = match option_type {
        OptionType::Call => reference - strike,
        OptionType::Put => strike - reference,
    };

    intrinsic.max(0.0)
}

/// Computes payoffs for a whole batch, one scalar per path row.
///
/// Paths are independent, so evaluation shards across rayon workers; each
/// worker writes one payoff slot, keeping the output ordering deterministic.
///
/// # Panics
///
/// Panics if the matrix shape does not match `payoffs.len() * n_steps`.
pub fn compute_payoffs(
    payoffs: &mut [f64],
    paths: &[f64],
    n_steps: usize,
    style: OptionStyle,
    option_type: OptionType,
    strike: f64,
) {
    assert_eq!(paths.len(), payoffs.len() * n_steps);

    payoffs
        .par_iter_mut()
        .zip(paths.par_chunks(n_steps))
        .for_each(|(payoff, path)| {
            *payoff = compute_payoff(path, style, option_type, strike);
        });
}
