//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! All functions are generic over `T: Float` so the same code serves `f64`
//! production paths and `f32` consumers.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun rational approximation (formula 7.1.26)
/// which bounds the absolute error at 1.5e-7 for all x.
///
/// # Mathematical Definition
/// erf(x) = (2/√π) ∫_0^x e^(-t²) dt
///
/// The approximation is deliberate: it keeps the CDF dependency-free and
/// deterministic across platforms, at an accuracy that is ample for
/// sensitivity display. Callers needing tighter bounds should swap in an
/// exact special-function implementation behind the same signature.
#[inline]
fn erf_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // erf is odd, so evaluate on |x| and restore the sign at the end
    let abs_x = x.abs();

    // t = 1 / (1 + p * |x|)
    let t = one / (one + p * abs_x);

    // Horner's method for the degree-5 polynomial in t
    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));

    let y = one - poly * (-abs_x * abs_x).exp();

    if x < zero {
        -y
    } else {
        y
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * (1 + erf(x / sqrt(2)))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Accurate to at least 1.5e-7 for all finite x values (inherited from the
/// erf approximation).
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    let one = T::one();

    half * (one + erf_approx(x / sqrt_2))
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
///
/// let pdf_1 = norm_pdf(1.0_f64);
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}
