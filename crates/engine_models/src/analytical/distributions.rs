//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` and `norm_pdf`, generic over `T: Float` so the same
//! code serves `f64` and `f32`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz and Stegun
/// approximation (formula 7.1.26), maximum error 1.5e-7 for all x.
///
/// erfc(x) = 1 - erf(x) = (2/sqrt(pi)) * integral_x^inf e^(-t^2) dt
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();

    // erfc(-x) = 2 - erfc(x), so evaluate on |x|
    let abs_x = x.abs();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);

    // Horner's method
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Phi(x) = 0.5 * erfc(-x / sqrt(2)), accurate to at least 1e-7 for all
/// finite x.
///
/// # Examples
/// ```
/// use engine_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// phi(x) = (1 / sqrt(2 pi)) * exp(-x^2 / 2)
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let coef = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    coef * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_known_values() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
        // Phi(1.96) ~ 0.975 (two-sided 95% quantile)
        assert_relative_eq!(norm_cdf(1.96_f64), 0.975, epsilon = 1e-3);
        assert_relative_eq!(norm_cdf(-1.96_f64), 0.025, epsilon = 1e-3);
    }

    #[test]
    fn test_cdf_symmetry() {
        for &x in &[0.1_f64, 0.7, 1.3, 2.5, 4.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_cdf_monotone() {
        let xs = [-3.0_f64, -1.0, -0.5, 0.0, 0.5, 1.0, 3.0];
        for pair in xs.windows(2) {
            assert!(norm_cdf(pair[0]) < norm_cdf(pair[1]));
        }
    }

    #[test]
    fn test_pdf_known_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), 0.3989422804014327, epsilon = 1e-12);
        // Symmetric in x
        assert_relative_eq!(norm_pdf(1.5_f64), norm_pdf(-1.5_f64), epsilon = 1e-15);
    }
}
