//! Frequency-response evaluation along the jω axis.
//!
//! Every point is an independent, pure evaluation of the transfer function
//! at s = jω; repeated calls with the same inputs are bit-identical. Output
//! order always matches input order.

use crate::config::SweepConfig;
use crate::error::{FilterError, Result};
use crate::transfer_function::TransferFunction;
use num_complex::Complex64;
use std::f64::consts::PI;

/// One evaluated sweep point: angular frequency and complex response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyPoint {
    pub omega: f64,
    pub response: Complex64,
}

impl FrequencyPoint {
    /// Frequency in Hz.
    pub fn frequency_hz(&self) -> f64 {
        self.omega / (2.0 * PI)
    }

    /// Linear magnitude |H|.
    pub fn magnitude_linear(&self) -> f64 {
        magnitude_linear(self.response)
    }

    /// Magnitude in dB; errors when |H| is exactly zero.
    pub fn magnitude_db(&self) -> Result<f64> {
        magnitude_db(self.response)
    }

    /// Phase in radians.
    pub fn phase_radians(&self) -> f64 {
        phase_radians(self.response)
    }
}

/// Evaluate H(jω) for each angular frequency, in order.
///
/// # Errors
/// Returns `FilterError::SingularResponse` if a pole lies exactly on one of
/// the requested points; no partial output is produced.
pub fn frequency_response(tf: &TransferFunction, omegas: &[f64]) -> Result<Vec<Complex64>> {
    omegas
        .iter()
        .map(|&w| tf.evaluate_at(Complex64::new(0.0, w)))
        .collect()
}

/// Lazily evaluate (ω, H) pairs in input order.
///
/// The iterator is a pure view over its inputs: re-creating it replays the
/// identical sequence, and points may be consumed (or evaluated elsewhere)
/// independently of one another.
pub fn response_points<'a>(
    tf: &'a TransferFunction,
    omegas: &'a [f64],
) -> impl Iterator<Item = Result<FrequencyPoint>> + 'a {
    omegas.iter().map(move |&omega| {
        tf.evaluate_at(Complex64::new(0.0, omega))
            .map(|response| FrequencyPoint { omega, response })
    })
}

/// Evaluate a full logarithmic sweep into (ω, H) points.
pub fn sweep(tf: &TransferFunction, config: &SweepConfig) -> Result<Vec<FrequencyPoint>> {
    let omegas = log_spaced(config.low_decade, config.high_decade, config.points);
    response_points(tf, &omegas).collect()
}

/// Magnitude in dB at a single probe frequency in Hz.
pub fn attenuation_db_at(tf: &TransferFunction, frequency_hz: f64) -> Result<f64> {
    let h = tf.evaluate_at(Complex64::new(0.0, 2.0 * PI * frequency_hz))?;
    magnitude_db(h)
}

/// Linear magnitude |H|.
pub fn magnitude_linear(h: Complex64) -> f64 {
    h.norm()
}

/// Magnitude in dB, 20·log10(|H|).
///
/// # Errors
/// Returns `FilterError::NonPositiveMagnitude` when |H| is exactly zero
/// (the query point sits on a transfer-function zero).
pub fn magnitude_db(h: Complex64) -> Result<f64> {
    let mag = h.norm();
    if mag == 0.0 {
        return Err(FilterError::NonPositiveMagnitude);
    }
    Ok(20.0 * mag.log10())
}

/// Phase in radians, arg(H).
pub fn phase_radians(h: Complex64) -> f64 {
    h.arg()
}

/// Logarithmically spaced angular frequencies from 10^low to 10^high,
/// inclusive of both endpoints.
pub fn log_spaced(low_decade: f64, high_decade: f64, points: usize) -> Vec<f64> {
    if points == 0 {
        return Vec::new();
    }
    if points == 1 {
        return vec![10f64.powf(low_decade)];
    }
    let step = (high_decade - low_decade) / (points - 1) as f64;
    (0..points)
        .map(|i| 10f64.powf(low_decade + i as f64 * step))
        .collect()
}
