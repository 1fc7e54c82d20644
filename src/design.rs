//! Analytic filter design from component values.
//!
//! Each topology maps R/L/C directly to transfer-function coefficients via
//! closed-form circuit analysis. The coefficient formulas below are the
//! contract of this crate: derived metrics (cutoff, Q, bandwidth, band
//! edges) must agree with them exactly.

use crate::config::{RcComponents, RlComponents, RlcComponents};
use crate::error::Result;
use crate::transfer_function::TransferFunction;
use std::f64::consts::PI;

/// Sense of a single-pole filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstOrderResponse {
    LowPass,
    HighPass,
}

/// Sense of a two-pole resonant filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondOrderResponse {
    BandPass,
    BandReject,
}

/// A designed single-pole filter: transfer function plus its cutoff.
#[derive(Debug, Clone)]
pub struct FirstOrderDesign {
    response: FirstOrderResponse,
    transfer: TransferFunction,
    cutoff: f64,
}

impl FirstOrderDesign {
    /// RC low-pass: H(s) = 1 / (sRC + 1), ωc = 1/(RC).
    pub fn rc_low_pass(rc: &RcComponents) -> Result<Self> {
        let tau = rc.resistance_ohms * rc.capacitance_farads;
        Ok(Self {
            response: FirstOrderResponse::LowPass,
            transfer: TransferFunction::new(vec![1.0], vec![tau, 1.0])?,
            cutoff: 1.0 / tau,
        })
    }

    /// RC high-pass: H(s) = sRC / (sRC + 1), ωc = 1/(RC).
    pub fn rc_high_pass(rc: &RcComponents) -> Result<Self> {
        let tau = rc.resistance_ohms * rc.capacitance_farads;
        Ok(Self {
            response: FirstOrderResponse::HighPass,
            transfer: TransferFunction::new(vec![tau, 0.0], vec![tau, 1.0])?,
            cutoff: 1.0 / tau,
        })
    }

    /// RL low-pass: H(s) = (R/L) / (s + R/L), ωc = R/L.
    pub fn rl_low_pass(rl: &RlComponents) -> Result<Self> {
        let wc = rl.resistance_ohms / rl.inductance_henries;
        Ok(Self {
            response: FirstOrderResponse::LowPass,
            transfer: TransferFunction::new(vec![wc], vec![1.0, wc])?,
            cutoff: wc,
        })
    }

    /// RL high-pass: H(s) = s / (s + R/L), ωc = R/L.
    pub fn rl_high_pass(rl: &RlComponents) -> Result<Self> {
        let wc = rl.resistance_ohms / rl.inductance_henries;
        Ok(Self {
            response: FirstOrderResponse::HighPass,
            transfer: TransferFunction::new(vec![1.0, 0.0], vec![1.0, wc])?,
            cutoff: wc,
        })
    }

    pub fn response(&self) -> FirstOrderResponse {
        self.response
    }

    pub fn transfer(&self) -> &TransferFunction {
        &self.transfer
    }

    /// Cutoff frequency in rad/s.
    pub fn cutoff_rad(&self) -> f64 {
        self.cutoff
    }

    /// Cutoff frequency in Hz.
    pub fn cutoff_hz(&self) -> f64 {
        self.cutoff / (2.0 * PI)
    }

    /// Conventional stopband probe frequency in Hz.
    ///
    /// `ratio` decades the probe away from the cutoff on the attenuated
    /// side (default convention is 10).
    pub fn stopband_hz(&self, ratio: f64) -> f64 {
        match self.response {
            FirstOrderResponse::LowPass => self.cutoff_hz() * ratio,
            FirstOrderResponse::HighPass => self.cutoff_hz() / ratio,
        }
    }

    /// Conventional passband probe frequency in Hz.
    pub fn passband_hz(&self, ratio: f64) -> f64 {
        match self.response {
            FirstOrderResponse::LowPass => self.cutoff_hz() / ratio,
            FirstOrderResponse::HighPass => self.cutoff_hz() * ratio,
        }
    }
}

/// A designed two-pole resonant filter: transfer function, center, Q.
#[derive(Debug, Clone)]
pub struct SecondOrderDesign {
    response: SecondOrderResponse,
    transfer: TransferFunction,
    center: f64,
    q: f64,
}

impl SecondOrderDesign {
    /// Series RLC band-pass: H(s) = (sR/L) / (s² + sR/L + 1/(LC)).
    ///
    /// ω0 = 1/√(LC), Q = ω0·L/R.
    pub fn rlc_band_pass(rlc: &RlcComponents) -> Result<Self> {
        let w0 = 1.0 / (rlc.inductance_henries * rlc.capacitance_farads).sqrt();
        let rl = rlc.resistance_ohms / rlc.inductance_henries;
        Ok(Self {
            response: SecondOrderResponse::BandPass,
            transfer: TransferFunction::new(
                vec![rl, 0.0],
                vec![
                    1.0,
                    rl,
                    1.0 / (rlc.inductance_henries * rlc.capacitance_farads),
                ],
            )?,
            center: w0,
            q: w0 * rlc.inductance_henries / rlc.resistance_ohms,
        })
    }

    /// Series RLC band-reject (notch): H(s) = (s² + ω0²) / (s² + s·ω0/Q + ω0²).
    ///
    /// The numerator zeros sit exactly on the jω axis at ±jω0, so the
    /// magnitude at the center frequency is exactly zero.
    pub fn rlc_band_reject(rlc: &RlcComponents) -> Result<Self> {
        let w0 = 1.0 / (rlc.inductance_henries * rlc.capacitance_farads).sqrt();
        let q = w0 * rlc.inductance_henries / rlc.resistance_ohms;
        Ok(Self {
            response: SecondOrderResponse::BandReject,
            transfer: TransferFunction::new(
                vec![1.0, 0.0, w0 * w0],
                vec![1.0, w0 / q, w0 * w0],
            )?,
            center: w0,
            q,
        })
    }

    pub fn response(&self) -> SecondOrderResponse {
        self.response
    }

    pub fn transfer(&self) -> &TransferFunction {
        &self.transfer
    }

    /// Center frequency in rad/s.
    pub fn center_rad(&self) -> f64 {
        self.center
    }

    /// Center frequency in Hz.
    pub fn center_hz(&self) -> f64 {
        self.center / (2.0 * PI)
    }

    /// Quality factor.
    pub fn quality_factor(&self) -> f64 {
        self.q
    }

    /// Bandwidth B = ω0/Q in rad/s.
    pub fn bandwidth_rad(&self) -> f64 {
        self.center / self.q
    }

    /// Lower band-edge frequency in Hz.
    ///
    /// Literal closed form fc_low = f0·(−1/(2Q) + √(1/(4Q²)+1)). For low Q
    /// the half-power interpretation is approximate; the form is kept as is
    /// rather than replaced by a numerical root-finder.
    pub fn lower_edge_hz(&self) -> f64 {
        let f0 = self.center_hz();
        f0 * (-1.0 / (2.0 * self.q) + (1.0 / (4.0 * self.q * self.q) + 1.0).sqrt())
    }

    /// Upper band-edge frequency in Hz.
    ///
    /// Literal closed form fc_high = f0·(1/(2Q) + √(1/(4Q²)+1)).
    pub fn upper_edge_hz(&self) -> f64 {
        let f0 = self.center_hz();
        f0 * (1.0 / (2.0 * self.q) + (1.0 / (4.0 * self.q * self.q) + 1.0).sqrt())
    }
}
