//! Rational transfer functions in the Laplace variable s.
//!
//! A `TransferFunction` is an immutable pair of real coefficient vectors in
//! descending powers of s. It is constructed once per filter topology (see
//! [`crate::design`]) and evaluated at arbitrary complex points, most
//! commonly on the jω axis for steady-state frequency response.

use crate::error::{FilterError, Result};
use num_complex::Complex64;

/// Ratio of two real polynomials in s, coefficients in descending power.
///
/// The engine neither normalizes nor reduces the ratio; the coefficient
/// vectors are kept exactly as constructed so that derived numeric results
/// match the analytic formulas bit for bit.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    numerator: Vec<f64>,
    denominator: Vec<f64>,
}

impl TransferFunction {
    /// Create a transfer function from raw coefficient vectors.
    ///
    /// # Errors
    /// Returns `FilterError::Config` if the denominator is empty or its
    /// leading coefficient is zero.
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> Result<Self> {
        match denominator.first() {
            None => {
                return Err(FilterError::Config(
                    "denominator polynomial must be non-empty".to_string(),
                ));
            }
            Some(&lead) if lead == 0.0 => {
                return Err(FilterError::Config(
                    "leading denominator coefficient must be non-zero".to_string(),
                ));
            }
            Some(_) => {}
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Numerator coefficients, descending powers of s.
    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    /// Denominator coefficients, descending powers of s.
    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Evaluate H(s) = N(s)/D(s) at a complex point.
    ///
    /// Both polynomials are evaluated by Horner's method. A denominator
    /// value of exactly zero means a pole lies on the query point.
    ///
    /// # Errors
    /// Returns `FilterError::SingularResponse` if D(s) == 0.
    pub fn evaluate_at(&self, s: Complex64) -> Result<Complex64> {
        let den = horner(&self.denominator, s);
        if den.re == 0.0 && den.im == 0.0 {
            return Err(FilterError::SingularResponse(s));
        }
        Ok(horner(&self.numerator, s) / den)
    }
}

/// Horner evaluation of a real-coefficient polynomial at a complex point.
///
/// An empty coefficient slice evaluates to zero.
fn horner(coeffs: &[f64], s: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * s + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_horner_matches_direct_expansion() {
        // p(s) = 2s^2 + 3s + 4 at s = 1 + 2j
        let s = Complex64::new(1.0, 2.0);
        let value = horner(&[2.0, 3.0, 4.0], s);
        let direct = 2.0 * s * s + 3.0 * s + 4.0;
        assert_relative_eq!(value.re, direct.re, max_relative = 1e-12);
        assert_relative_eq!(value.im, direct.im, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_numerator_evaluates_to_zero() {
        let tf = TransferFunction::new(vec![], vec![1.0, 1.0]).unwrap();
        let h = tf.evaluate_at(Complex64::new(0.0, 1.0)).unwrap();
        assert_eq!(h, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_rejects_empty_denominator() {
        assert!(matches!(
            TransferFunction::new(vec![1.0], vec![]),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_zero_leading_denominator_coefficient() {
        assert!(matches!(
            TransferFunction::new(vec![1.0], vec![0.0, 1.0]),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_pole_on_query_point_is_singular() {
        // H(s) = 1/s has a pole at the origin.
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 0.0]).unwrap();
        assert!(matches!(
            tf.evaluate_at(Complex64::new(0.0, 0.0)),
            Err(FilterError::SingularResponse(_))
        ));
    }

    #[test]
    fn test_first_order_response_value() {
        // H(s) = 1/(s + 1) at s = j: 1/(1 + j) = 0.5 - 0.5j
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
        let h = tf.evaluate_at(Complex64::new(0.0, 1.0)).unwrap();
        assert_relative_eq!(h.re, 0.5, max_relative = 1e-12);
        assert_relative_eq!(h.im, -0.5, max_relative = 1e-12);
    }
}
