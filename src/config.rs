//! Configuration types for filter evaluation.
//!
//! Component values arrive from the caller in SI units (ohms, henries,
//! farads) and are trusted as positive reals; the only validation performed
//! downstream is what transfer-function construction itself implies.

use std::fmt;
use std::str::FromStr;

/// Sampling rate used by the reference signal simulations, in Hz.
pub const REFERENCE_SAMPLE_RATE_HZ: f64 = 100_000.0;

/// Duration of the reference test signal, in seconds (10 ms, 1000 samples).
pub const REFERENCE_DURATION_SECS: f64 = 0.01;

/// Default decade ratio between the cutoff and its attenuation probes.
pub const DEFAULT_PROBE_RATIO: f64 = 10.0;

/// A component value with SI-prefix parsing.
///
/// # Parsing formats
/// - `4700` or `4.7e3` - plain value
/// - `4.7k` - SI prefix (`p`, `n`, `u`/`μ`, `m`, `k`, `M`, `G`)
///
/// # Example
/// ```
/// use filterlab::config::ComponentValue;
///
/// let c: ComponentValue = "10u".parse().unwrap();
/// assert!((c.value() - 10e-6).abs() < 1e-18);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComponentValue(f64);

impl ComponentValue {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComponentValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Plain number, including scientific notation.
        if let Ok(value) = s.parse::<f64>() {
            if value <= 0.0 {
                return Err("component value must be positive".to_string());
            }
            return Ok(Self(value));
        }

        let (last_idx, last) = s
            .char_indices()
            .last()
            .ok_or_else(|| format!("invalid component value: {}", s))?;
        let scale = match last {
            'p' => 1e-12,
            'n' => 1e-9,
            'u' | 'μ' => 1e-6,
            'm' => 1e-3,
            'k' => 1e3,
            'M' => 1e6,
            'G' => 1e9,
            _ => return Err(format!("invalid component value: {}", s)),
        };
        let num = &s[..last_idx];

        let value: f64 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid component value: {}", s))?;
        if value <= 0.0 {
            return Err("component value must be positive".to_string());
        }
        Ok(Self(value * scale))
    }
}

/// RC network component values.
#[derive(Debug, Clone, Copy)]
pub struct RcComponents {
    pub resistance_ohms: f64,
    pub capacitance_farads: f64,
}

/// RL network component values.
#[derive(Debug, Clone, Copy)]
pub struct RlComponents {
    pub resistance_ohms: f64,
    pub inductance_henries: f64,
}

/// Series RLC network component values.
#[derive(Debug, Clone, Copy)]
pub struct RlcComponents {
    pub resistance_ohms: f64,
    pub inductance_henries: f64,
    pub capacitance_farads: f64,
}

/// One sinusoidal component of the synthetic test signal.
///
/// Parses from `"5000"` (unit amplitude) or `"5000x0.5"`.
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    pub frequency_hz: f64,
    pub amplitude: f64,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amplitude == 1.0 {
            write!(f, "{}", self.frequency_hz)
        } else {
            write!(f, "{}x{}", self.frequency_hz, self.amplitude)
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (freq, amp) = match s.split_once('x') {
            Some((freq, amp)) => (
                freq,
                amp.trim()
                    .parse::<f64>()
                    .map_err(|_| format!("invalid tone amplitude: {}", s))?,
            ),
            None => (s, 1.0),
        };
        let frequency_hz: f64 = freq
            .trim()
            .parse()
            .map_err(|_| format!("invalid tone frequency: {}", s))?;
        if frequency_hz <= 0.0 {
            return Err("tone frequency must be positive".to_string());
        }
        Ok(Self {
            frequency_hz,
            amplitude: amp,
        })
    }
}

/// Logarithmic frequency sweep density and bounds.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Number of evaluation points.
    pub points: usize,
    /// Lower bound as a power of ten, in rad/s.
    pub low_decade: f64,
    /// Upper bound as a power of ten, in rad/s.
    pub high_decade: f64,
}

impl SweepConfig {
    /// Reference sweep for single-pole filters: 10¹–10⁵ rad/s, 1000 points.
    pub fn first_order() -> Self {
        Self {
            points: 1000,
            low_decade: 1.0,
            high_decade: 5.0,
        }
    }

    /// Reference sweep for two-pole filters: 10²–10⁶ rad/s, 1000 points.
    pub fn second_order() -> Self {
        Self {
            points: 1000,
            low_decade: 2.0,
            high_decade: 6.0,
        }
    }
}

/// Test-signal sampling parameters and tone mix.
#[derive(Debug, Clone)]
pub struct SignalConfig {
    pub sample_rate_hz: f64,
    pub duration_secs: f64,
    pub tones: Vec<Tone>,
}

impl SignalConfig {
    /// Reference mix for single-pole demos: 50 Hz plus a half-amplitude
    /// 5 kHz component.
    pub fn single_pole_default() -> Self {
        Self {
            sample_rate_hz: REFERENCE_SAMPLE_RATE_HZ,
            duration_secs: REFERENCE_DURATION_SECS,
            tones: vec![
                Tone {
                    frequency_hz: 50.0,
                    amplitude: 1.0,
                },
                Tone {
                    frequency_hz: 5000.0,
                    amplitude: 0.5,
                },
            ],
        }
    }

    /// Reference mix for two-pole demos: 500 Hz, 2 kHz and 10 kHz at unit
    /// amplitude, straddling the band of interest.
    pub fn two_pole_default() -> Self {
        Self {
            sample_rate_hz: REFERENCE_SAMPLE_RATE_HZ,
            duration_secs: REFERENCE_DURATION_SECS,
            tones: vec![
                Tone {
                    frequency_hz: 500.0,
                    amplitude: 1.0,
                },
                Tone {
                    frequency_hz: 2000.0,
                    amplitude: 1.0,
                },
                Tone {
                    frequency_hz: 10_000.0,
                    amplitude: 1.0,
                },
            ],
        }
    }
}
