//! Synthetic multi-tone test signals.
//!
//! Demonstration inputs are sums of a few pure sinusoids sampled on an open
//! interval: n/fs for n = 0..N-1 with N = fs·duration, no sample at the end
//! boundary.

use crate::config::Tone;

/// Sample instants in seconds for the given rate and duration.
pub fn sample_times(sample_rate_hz: f64, duration_secs: f64) -> Vec<f64> {
    let count = (sample_rate_hz * duration_secs) as usize;
    (0..count).map(|n| n as f64 / sample_rate_hz).collect()
}

/// Sum of sinusoids at the given frequencies and amplitudes.
pub fn multi_tone(tones: &[Tone], sample_rate_hz: f64, duration_secs: f64) -> Vec<f64> {
    sample_times(sample_rate_hz, duration_secs)
        .iter()
        .map(|&t| {
            tones
                .iter()
                .map(|tone| {
                    tone.amplitude * (2.0 * std::f64::consts::PI * tone.frequency_hz * t).sin()
                })
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_open_interval_sample_count() {
        // 10 ms at 100 kHz: exactly 1000 samples, last one short of 10 ms.
        let t = sample_times(100_000.0, 0.01);
        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert!(t[999] < 0.01);
        assert_abs_diff_eq!(t[999], 0.00999, epsilon = 1e-12);
    }

    #[test]
    fn test_single_tone_matches_sine() {
        let tones = [Tone {
            frequency_hz: 50.0,
            amplitude: 1.0,
        }];
        let x = multi_tone(&tones, 100_000.0, 0.001);
        assert_eq!(x.len(), 100);
        assert_eq!(x[0], 0.0);
        let t25 = 25.0 / 100_000.0;
        assert_abs_diff_eq!(
            x[25],
            (2.0 * std::f64::consts::PI * 50.0 * t25).sin(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_tone_amplitudes_superpose() {
        let tones = [
            Tone {
                frequency_hz: 50.0,
                amplitude: 1.0,
            },
            Tone {
                frequency_hz: 5000.0,
                amplitude: 0.5,
            },
        ];
        let x = multi_tone(&tones, 100_000.0, 0.01);
        assert_eq!(x.len(), 1000);
        // Peak of the mix never exceeds the sum of amplitudes.
        assert!(x.iter().all(|&v| v.abs() <= 1.5 + 1e-12));
        // And the high tone actually contributes: the mix differs from the
        // 50 Hz tone alone.
        let base = multi_tone(&tones[..1], 100_000.0, 0.01);
        assert!(x.iter().zip(&base).any(|(a, b)| (a - b).abs() > 0.4));
    }
}
