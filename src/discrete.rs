//! Discrete application of transfer-function coefficients.
//!
//! The numerator/denominator coefficients are used directly as the b/a
//! coefficients of a recursive difference equation, with no
//! continuous-to-discrete transform in between. This is not a digital
//! filter design, and for physical component values the resulting
//! recurrence need not be stable; callers wanting the physically
//! meaningful response should use [`crate::response`] instead.

use crate::error::{FilterError, Result};
use crate::transfer_function::TransferFunction;

/// Direct-form IIR recurrence with zero initial state.
///
/// Coefficients are normalized by the leading denominator coefficient at
/// construction, so each output sample is
///
/// y[n] = Σ b'[i]·x[n−i] − Σ_{j≥1} a'[j]·y[n−j]
///
/// with history terms before the first sample taken as zero.
pub struct DirectFormIir {
    b: Vec<f64>,
    // Normalized feedback coefficients a[1..], a[0] folded into b and a.
    a: Vec<f64>,
    x_hist: Vec<f64>,
    y_hist: Vec<f64>,
}

impl DirectFormIir {
    /// Create the recurrence from raw b/a coefficient slices.
    ///
    /// # Errors
    /// Returns `FilterError::DegenerateFilter` if `a` is empty or its
    /// leading coefficient is zero.
    pub fn new(b: &[f64], a: &[f64]) -> Result<Self> {
        let a0 = match a.first() {
            Some(&a0) if a0 != 0.0 => a0,
            _ => return Err(FilterError::DegenerateFilter),
        };
        let b: Vec<f64> = b.iter().map(|&c| c / a0).collect();
        let a: Vec<f64> = a[1..].iter().map(|&c| c / a0).collect();
        Ok(Self {
            x_hist: vec![0.0; b.len()],
            y_hist: vec![0.0; a.len()],
            b,
            a,
        })
    }

    /// Build the recurrence straight from a transfer function's
    /// coefficients (numerator as b, denominator as a).
    pub fn from_transfer(tf: &TransferFunction) -> Result<Self> {
        Self::new(tf.numerator(), tf.denominator())
    }

    /// Process one sample, advancing the recurrence.
    pub fn process(&mut self, x: f64) -> f64 {
        if !self.x_hist.is_empty() {
            self.x_hist.rotate_right(1);
            self.x_hist[0] = x;
        }
        let feedforward: f64 = self
            .b
            .iter()
            .zip(&self.x_hist)
            .map(|(&b, &x)| b * x)
            .sum();
        let feedback: f64 = self
            .a
            .iter()
            .zip(&self.y_hist)
            .map(|(&a, &y)| a * y)
            .sum();
        let y = feedforward - feedback;
        if !self.y_hist.is_empty() {
            self.y_hist.rotate_right(1);
            self.y_hist[0] = y;
        }
        y
    }

    /// Process a whole buffer, strictly in sample order.
    pub fn process_buffer(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.process(x)).collect()
    }
}

/// Apply b/a coefficients to an input sequence from rest.
///
/// Output length always equals input length.
pub fn apply(b: &[f64], a: &[f64], input: &[f64]) -> Result<Vec<f64>> {
    let mut filter = DirectFormIir::new(b, a)?;
    Ok(filter.process_buffer(input))
}

/// Apply a transfer function's coefficients to an input sequence.
pub fn filter_signal(tf: &TransferFunction, input: &[f64]) -> Result<Vec<f64>> {
    apply(tf.numerator(), tf.denominator(), input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_leading_denominator_is_degenerate() {
        assert!(matches!(
            DirectFormIir::new(&[1.0], &[0.0, 1.0]),
            Err(FilterError::DegenerateFilter)
        ));
        assert!(matches!(
            DirectFormIir::new(&[1.0], &[]),
            Err(FilterError::DegenerateFilter)
        ));
    }

    #[test]
    fn test_zero_input_stays_at_rest() {
        let input = vec![0.0; 512];
        let output = apply(&[1.0], &[1e-3, 1.0], &input).unwrap();
        assert_eq!(output.len(), 512);
        assert!(output.iter().all(|&y| y == 0.0));
    }

    #[test]
    fn test_output_length_matches_input_length() {
        for n in [1, 2, 7, 1000] {
            let input = vec![1.0; n];
            let output = apply(&[0.5, 0.5], &[1.0, -0.2], &input).unwrap();
            assert_eq!(output.len(), n);
        }
    }

    #[test]
    fn test_pure_feedforward_is_convolution() {
        // b = [1, 2, 3], a = [1]: plain FIR against zero-padded history.
        let output = apply(&[1.0, 2.0, 3.0], &[1.0], &[1.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(output, vec![1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_single_pole_impulse_response() {
        // y[n] = x[n] + 0.5·y[n-1]: impulse response 1, 0.5, 0.25, ...
        let output = apply(&[1.0], &[1.0, -0.5], &[1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        for (n, &y) in output.iter().enumerate() {
            assert_relative_eq!(y, 0.5f64.powi(n as i32), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_normalization_by_leading_coefficient() {
        // Scaling both coefficient sets by the same factor changes nothing.
        let input = [1.0, -0.5, 0.25, 2.0];
        let reference = apply(&[1.0, 0.3], &[1.0, -0.4], &input).unwrap();
        let scaled = apply(&[2.0, 0.6], &[2.0, -0.8], &input).unwrap();
        for (&r, &s) in reference.iter().zip(&scaled) {
            assert_relative_eq!(r, s, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_recurrence_matches_literal_difference_equation() {
        // RC low-pass coefficients reused directly: b = [1], a = [RC, 1].
        // y[n] = (1/RC)·(x[n] − y[n−1]); the first few samples must follow
        // the literal formula even though the recurrence is not stable for
        // these values.
        let rc = 1e-3;
        let input = [0.0, 0.2, -0.1, 0.4];
        let output = apply(&[1.0], &[rc, 1.0], &input).unwrap();

        let mut prev = 0.0;
        for (&x, &y) in input.iter().zip(&output) {
            let expected = (x - prev) / rc;
            assert_relative_eq!(y, expected, max_relative = 1e-12);
            prev = y;
        }
    }

    #[test]
    fn test_process_buffer_matches_per_sample_calls() {
        let input = [0.3, -1.2, 0.8, 0.0, 2.5];
        let mut whole = DirectFormIir::new(&[0.2, 0.1], &[1.0, -0.3]).unwrap();
        let mut stepped = DirectFormIir::new(&[0.2, 0.1], &[1.0, -0.3]).unwrap();

        let buffered = whole.process_buffer(&input);
        let singles: Vec<f64> = input.iter().map(|&x| stepped.process(x)).collect();
        assert_eq!(buffered, singles);
    }
}
