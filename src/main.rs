use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use filterlab::config::{
    ComponentValue, RcComponents, RlComponents, RlcComponents, SignalConfig, SweepConfig, Tone,
};
use filterlab::design::{FirstOrderDesign, SecondOrderDesign, SecondOrderResponse};
use filterlab::discrete;
use filterlab::output::{
    FilterReport, OutputFormat, ProbePoint, create_formatter, write_signal_csv, write_sweep_csv,
};
use filterlab::response::{attenuation_db_at, sweep};
use filterlab::signal::{multi_tone, sample_times};

#[derive(Parser, Debug)]
#[command(name = "filterlab")]
#[command(about = "Evaluate analog RC/RL/RLC filters from component values", long_about = None)]
struct Args {
    /// Filter topology to evaluate
    #[arg(short, long, value_enum)]
    topology: Topology,

    /// Resistance in ohms (SI prefixes accepted, e.g. "1k")
    #[arg(short = 'R', long)]
    resistance: Option<ComponentValue>,

    /// Inductance in henries (e.g. "100m")
    #[arg(short = 'L', long)]
    inductance: Option<ComponentValue>,

    /// Capacitance in farads (e.g. "1u")
    #[arg(short = 'C', long)]
    capacitance: Option<ComponentValue>,

    /// TOML parameter file ([components], [sweep], [signal] sections)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Number of sweep points
    #[arg(long)]
    sweep_points: Option<usize>,

    /// Sweep bounds as powers of ten in rad/s, "low:high" (e.g. "1:5")
    #[arg(long)]
    sweep_decades: Option<String>,

    /// Ratio between the cutoff and its attenuation probe points
    #[arg(long, default_value_t = filterlab::config::DEFAULT_PROBE_RATIO)]
    probe_ratio: f64,

    /// Test-signal sample rate in Hz
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Test-signal duration in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Test-signal tone as "freq" or "freqxamp" (repeatable)
    #[arg(long)]
    tone: Vec<Tone>,

    /// Write the magnitude sweep as CSV
    #[arg(long)]
    sweep_out: Option<PathBuf>,

    /// Write the original and filtered test signals as CSV
    #[arg(long)]
    signal_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Topology {
    RcLowPass,
    RcHighPass,
    RlLowPass,
    RlHighPass,
    RlcBandPass,
    RlcBandReject,
}

impl Topology {
    fn label(&self) -> &'static str {
        match self {
            Topology::RcLowPass => "RC low-pass",
            Topology::RcHighPass => "RC high-pass",
            Topology::RlLowPass => "RL low-pass",
            Topology::RlHighPass => "RL high-pass",
            Topology::RlcBandPass => "RLC band-pass",
            Topology::RlcBandReject => "RLC band-reject",
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct TomlConfig {
    components: Option<ComponentsSection>,
    sweep: Option<SweepSection>,
    signal: Option<SignalSection>,
}

#[derive(Debug, Deserialize, Default)]
struct ComponentsSection {
    resistance_ohms: Option<f64>,
    inductance_henries: Option<f64>,
    capacitance_farads: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SweepSection {
    points: Option<usize>,
    low_decade: Option<f64>,
    high_decade: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SignalSection {
    sample_rate_hz: Option<f64>,
    duration_secs: Option<f64>,
    tones: Option<Vec<ToneSection>>,
}

#[derive(Debug, Deserialize)]
struct ToneSection {
    frequency_hz: f64,
    amplitude: Option<f64>,
}

/// A designed filter of either order, plus everything the driver needs.
enum Design {
    First(FirstOrderDesign),
    Second(SecondOrderDesign),
}

impl Design {
    fn transfer(&self) -> &filterlab::TransferFunction {
        match self {
            Design::First(d) => d.transfer(),
            Design::Second(d) => d.transfer(),
        }
    }

    fn default_sweep(&self) -> SweepConfig {
        match self {
            Design::First(_) => SweepConfig::first_order(),
            Design::Second(_) => SweepConfig::second_order(),
        }
    }

    fn default_signal(&self) -> SignalConfig {
        match self {
            Design::First(_) => SignalConfig::single_pole_default(),
            Design::Second(_) => SignalConfig::two_pole_default(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let file_config: TomlConfig = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => TomlConfig::default(),
    };

    let components = file_config.components.unwrap_or_default();
    let resistance = resolve_value(
        args.resistance,
        components.resistance_ohms,
        "resistance (-R)",
    )?;

    let design = build_design(&args, &components, resistance)?;
    let report = build_report(&args, &components, &design, resistance)?;

    let formatter = create_formatter(args.format);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    println!("{}", formatter.format(&report));

    let sweep_config = resolve_sweep(&args, file_config.sweep.as_ref(), &design)?;
    log::info!(
        "sweeping {} points over 10^{}..10^{} rad/s",
        sweep_config.points,
        sweep_config.low_decade,
        sweep_config.high_decade
    );
    let points = sweep(design.transfer(), &sweep_config)?;
    if let Some(path) = &args.sweep_out {
        write_sweep_csv(path, &points)
            .with_context(|| format!("writing sweep to {}", path.display()))?;
        log::info!("wrote {} sweep points to {}", points.len(), path.display());
    }

    let signal_config = resolve_signal(&args, file_config.signal.as_ref(), &design);
    let times = sample_times(signal_config.sample_rate_hz, signal_config.duration_secs);
    let input = multi_tone(
        &signal_config.tones,
        signal_config.sample_rate_hz,
        signal_config.duration_secs,
    );
    // Continuous coefficients reused directly as the difference equation;
    // this is not a discretized design.
    let output = discrete::filter_signal(design.transfer(), &input)?;
    log::info!(
        "filtered {} samples at {} Hz ({} tones)",
        input.len(),
        signal_config.sample_rate_hz,
        signal_config.tones.len()
    );
    if let Some(path) = &args.signal_out {
        write_signal_csv(path, &times, &input, &output)
            .with_context(|| format!("writing signals to {}", path.display()))?;
        log::info!("wrote signal traces to {}", path.display());
    }

    Ok(())
}

fn resolve_value(cli: Option<ComponentValue>, file: Option<f64>, what: &str) -> Result<f64> {
    cli.map(|v| v.value())
        .or(file)
        .with_context(|| format!("{} is required for this topology", what))
}

fn build_design(
    args: &Args,
    components: &ComponentsSection,
    resistance: f64,
) -> Result<Design> {
    let capacitance = || {
        resolve_value(
            args.capacitance,
            components.capacitance_farads,
            "capacitance (-C)",
        )
    };
    let inductance = || {
        resolve_value(
            args.inductance,
            components.inductance_henries,
            "inductance (-L)",
        )
    };

    let design = match args.topology {
        Topology::RcLowPass | Topology::RcHighPass => {
            let rc = RcComponents {
                resistance_ohms: resistance,
                capacitance_farads: capacitance()?,
            };
            Design::First(match args.topology {
                Topology::RcLowPass => FirstOrderDesign::rc_low_pass(&rc)?,
                _ => FirstOrderDesign::rc_high_pass(&rc)?,
            })
        }
        Topology::RlLowPass | Topology::RlHighPass => {
            let rl = RlComponents {
                resistance_ohms: resistance,
                inductance_henries: inductance()?,
            };
            Design::First(match args.topology {
                Topology::RlLowPass => FirstOrderDesign::rl_low_pass(&rl)?,
                _ => FirstOrderDesign::rl_high_pass(&rl)?,
            })
        }
        Topology::RlcBandPass | Topology::RlcBandReject => {
            let rlc = RlcComponents {
                resistance_ohms: resistance,
                inductance_henries: inductance()?,
                capacitance_farads: capacitance()?,
            };
            Design::Second(match args.topology {
                Topology::RlcBandPass => SecondOrderDesign::rlc_band_pass(&rlc)?,
                _ => SecondOrderDesign::rlc_band_reject(&rlc)?,
            })
        }
    };
    Ok(design)
}

fn build_report(
    args: &Args,
    components: &ComponentsSection,
    design: &Design,
    resistance: f64,
) -> Result<FilterReport> {
    let inductance = args
        .inductance
        .map(|v| v.value())
        .or(components.inductance_henries);
    let capacitance = args
        .capacitance
        .map(|v| v.value())
        .or(components.capacitance_farads);
    let probe = |label: &str, frequency_hz: f64| -> ProbePoint {
        ProbePoint {
            label: label.to_string(),
            frequency_hz,
            attenuation_db: attenuation_db_at(design.transfer(), frequency_hz).ok(),
        }
    };

    let report = match design {
        Design::First(d) => FilterReport {
            topology: args.topology.label().to_string(),
            resistance_ohms: resistance,
            inductance_henries: inductance,
            capacitance_farads: capacitance,
            corner_hz: d.cutoff_hz(),
            quality_factor: None,
            bandwidth_rad: None,
            lower_edge_hz: None,
            upper_edge_hz: None,
            probes: vec![
                probe("Apass", d.passband_hz(args.probe_ratio)),
                probe("Astop", d.stopband_hz(args.probe_ratio)),
            ],
        },
        Design::Second(d) => {
            let center_label = match d.response() {
                SecondOrderResponse::BandPass => "Center",
                SecondOrderResponse::BandReject => "Notch",
            };
            FilterReport {
                topology: args.topology.label().to_string(),
                resistance_ohms: resistance,
                inductance_henries: inductance,
                capacitance_farads: capacitance,
                corner_hz: d.center_hz(),
                quality_factor: Some(d.quality_factor()),
                bandwidth_rad: Some(d.bandwidth_rad()),
                lower_edge_hz: Some(d.lower_edge_hz()),
                upper_edge_hz: Some(d.upper_edge_hz()),
                probes: vec![
                    probe(center_label, d.center_hz()),
                    probe("Lower edge", d.lower_edge_hz()),
                    probe("Upper edge", d.upper_edge_hz()),
                ],
            }
        }
    };
    Ok(report)
}

fn resolve_sweep(
    args: &Args,
    section: Option<&SweepSection>,
    design: &Design,
) -> Result<SweepConfig> {
    let mut config = design.default_sweep();
    if let Some(section) = section {
        if let Some(points) = section.points {
            config.points = points;
        }
        if let Some(low) = section.low_decade {
            config.low_decade = low;
        }
        if let Some(high) = section.high_decade {
            config.high_decade = high;
        }
    }
    if let Some(points) = args.sweep_points {
        config.points = points;
    }
    if let Some(decades) = &args.sweep_decades {
        let (low, high) = decades
            .split_once(':')
            .context("sweep decades must be \"low:high\"")?;
        config.low_decade = low.trim().parse().context("invalid low sweep decade")?;
        config.high_decade = high.trim().parse().context("invalid high sweep decade")?;
    }
    if config.points == 0 {
        bail!("sweep must contain at least one point");
    }
    if config.low_decade >= config.high_decade {
        bail!("sweep decades must satisfy low < high");
    }
    Ok(config)
}

fn resolve_signal(args: &Args, section: Option<&SignalSection>, design: &Design) -> SignalConfig {
    let mut config = design.default_signal();
    if let Some(section) = section {
        if let Some(rate) = section.sample_rate_hz {
            config.sample_rate_hz = rate;
        }
        if let Some(duration) = section.duration_secs {
            config.duration_secs = duration;
        }
        if let Some(tones) = &section.tones {
            config.tones = tones
                .iter()
                .map(|t| Tone {
                    frequency_hz: t.frequency_hz,
                    amplitude: t.amplitude.unwrap_or(1.0),
                })
                .collect();
        }
    }
    if let Some(rate) = args.sample_rate {
        config.sample_rate_hz = rate;
    }
    if let Some(duration) = args.duration {
        config.duration_secs = duration;
    }
    if !args.tone.is_empty() {
        config.tones = args.tone.clone();
    }
    config
}
