use approx::assert_abs_diff_eq;
use filterlab::config::{RcComponents, RlcComponents, Tone};
use filterlab::design::{FirstOrderDesign, SecondOrderDesign};
use filterlab::discrete::{self, DirectFormIir};
use filterlab::response::attenuation_db_at;
use filterlab::signal::multi_tone;
use num_complex::Complex64;
use rustfft::FftPlanner;

fn reference_rc() -> RcComponents {
    RcComponents {
        resistance_ohms: 1e3,
        capacitance_farads: 1e-6,
    }
}

/// Magnitude of the FFT bin for `frequency_hz` in a real signal sampled at
/// `sample_rate_hz`.
fn fft_bin_magnitude(samples: &[f64], sample_rate_hz: f64, frequency_hz: f64) -> f64 {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(samples.len());
    let mut buffer: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    let bin = (frequency_hz * samples.len() as f64 / sample_rate_hz).round() as usize;
    buffer[bin].norm()
}

#[test]
fn test_zero_input_round_trip_stays_zero() {
    let design = FirstOrderDesign::rc_low_pass(&reference_rc()).unwrap();
    let input = vec![0.0; 1000];
    let output = discrete::filter_signal(design.transfer(), &input).unwrap();
    assert_eq!(output.len(), 1000);
    assert!(output.iter().all(|&y| y == 0.0));
}

#[test]
fn test_output_length_equals_input_length_for_every_topology() {
    let rlc = RlcComponents {
        resistance_ohms: 100.0,
        inductance_henries: 1e-3,
        capacitance_farads: 10e-6,
    };
    let tones = [Tone {
        frequency_hz: 500.0,
        amplitude: 1.0,
    }];
    let input = multi_tone(&tones, 100_000.0, 0.0037);

    let first = FirstOrderDesign::rc_high_pass(&reference_rc()).unwrap();
    let second = SecondOrderDesign::rlc_band_reject(&rlc).unwrap();
    for tf in [first.transfer(), second.transfer()] {
        let output = discrete::filter_signal(tf, &input).unwrap();
        assert_eq!(output.len(), input.len());
    }
}

#[test]
fn test_recurrence_state_is_causal() {
    // Outputs up to n depend only on inputs up to n: truncating the input
    // truncates the output without changing the shared prefix.
    let design = SecondOrderDesign::rlc_band_pass(&RlcComponents {
        resistance_ohms: 100.0,
        inductance_henries: 1e-3,
        capacitance_farads: 10e-6,
    })
    .unwrap();
    let tones = [
        Tone {
            frequency_hz: 500.0,
            amplitude: 1.0,
        },
        Tone {
            frequency_hz: 2000.0,
            amplitude: 1.0,
        },
    ];
    let input = multi_tone(&tones, 100_000.0, 0.002);
    let full = discrete::filter_signal(design.transfer(), &input).unwrap();
    let truncated = discrete::filter_signal(design.transfer(), &input[..50]).unwrap();
    assert_eq!(&full[..50], &truncated[..]);
}

#[test]
fn test_direct_form_matches_free_function() {
    let design = FirstOrderDesign::rc_low_pass(&reference_rc()).unwrap();
    let tones = [Tone {
        frequency_hz: 50.0,
        amplitude: 1.0,
    }];
    let input = multi_tone(&tones, 100_000.0, 0.001);

    let by_function = discrete::filter_signal(design.transfer(), &input).unwrap();
    let mut filter = DirectFormIir::from_transfer(design.transfer()).unwrap();
    let by_struct = filter.process_buffer(&input);
    assert_eq!(by_function, by_struct);
}

#[test]
fn test_low_pass_knocks_high_tone_down_thirty_db() {
    // Reference scenario: x = sin(2π·50·t) + 0.5·sin(2π·5000·t) through the
    // RC low-pass with fc ≈ 159.15 Hz. Relative attenuation between the two
    // tone components is 20·log10(|H(5 kHz)|/|H(50 Hz)|) ≈ −29.5 dB,
    // i.e. roughly 20·log10(5000/159.15) ≈ 30 dB of separation.
    let design = FirstOrderDesign::rc_low_pass(&reference_rc()).unwrap();
    let sample_rate = 100_000.0;
    // 20 ms puts both tones on exact FFT bins (bin width 50 Hz).
    let duration = 0.02;
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
    let input = multi_tone(&tones, sample_rate, duration);
    assert_eq!(input.len(), 2000);

    // Input spectrum: the 5 kHz bin is half the 50 Hz bin (-6.02 dB).
    let in_low = fft_bin_magnitude(&input, sample_rate, 50.0);
    let in_high = fft_bin_magnitude(&input, sample_rate, 5000.0);
    let input_ratio_db = 20.0 * (in_high / in_low).log10();
    assert_abs_diff_eq!(input_ratio_db, -6.02, epsilon = 0.05);

    // Weight each component by the evaluated response to get the output
    // spectrum a physical realization of H(s) would produce.
    let gain_low_db = attenuation_db_at(design.transfer(), 50.0).unwrap();
    let gain_high_db = attenuation_db_at(design.transfer(), 5000.0).unwrap();
    let output_ratio_db = input_ratio_db + gain_high_db - gain_low_db;

    let relative_attenuation_db = output_ratio_db - input_ratio_db;
    assert_abs_diff_eq!(relative_attenuation_db, -30.0, epsilon = 2.0);
    assert_abs_diff_eq!(
        relative_attenuation_db,
        -20.0 * (5000.0f64 / design.cutoff_hz()).log10(),
        epsilon = 0.5
    );
}
