//! Reporting and data-product sinks.
//!
//! The core hands derived metrics to a [`Formatter`] and sweep/signal data
//! to plain CSV writers; no rendering or plotting happens in this crate.

mod csv;
mod json;
mod text;

use crate::response::FrequencyPoint;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// Attenuation sampled at a named frequency of interest.
///
/// `attenuation_db` is `None` where the magnitude is exactly zero (the
/// notch center), i.e. −∞ dB.
#[derive(Debug, Clone, Serialize)]
pub struct ProbePoint {
    pub label: String,
    pub frequency_hz: f64,
    pub attenuation_db: Option<f64>,
}

/// Derived figures of merit for one evaluated filter.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub topology: String,
    pub resistance_ohms: f64,
    pub inductance_henries: Option<f64>,
    pub capacitance_farads: Option<f64>,
    /// Cutoff (single-pole) or center (two-pole) frequency in Hz.
    pub corner_hz: f64,
    pub quality_factor: Option<f64>,
    pub bandwidth_rad: Option<f64>,
    pub lower_edge_hz: Option<f64>,
    pub upper_edge_hz: Option<f64>,
    pub probes: Vec<ProbePoint>,
}

pub trait Formatter {
    fn format(&self, report: &FilterReport) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Write a magnitude sweep as `frequency_hz,magnitude_db` rows.
///
/// Points with exactly zero magnitude leave the dB cell empty.
pub fn write_sweep_csv(path: &Path, points: &[FrequencyPoint]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "frequency_hz,magnitude_db")?;
    for point in points {
        match point.magnitude_db() {
            Ok(db) => writeln!(out, "{:.6},{:.6}", point.frequency_hz(), db)?,
            Err(_) => writeln!(out, "{:.6},", point.frequency_hz())?,
        }
    }
    out.flush()
}

/// Write time-aligned input and filtered signals as `t,input,output` rows.
pub fn write_signal_csv(
    path: &Path,
    times: &[f64],
    input: &[f64],
    output: &[f64],
) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "t,input,output")?;
    for ((t, x), y) in times.iter().zip(input).zip(output) {
        writeln!(out, "{:.8},{:.8},{:.8}", t, x, y)?;
    }
    out.flush()
}
