use super::{FilterReport, Formatter};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &FilterReport) -> String {
        let opt = |v: Option<f64>| v.map_or(String::new(), |v| format!("{:.6}", v));
        let probes = report
            .probes
            .iter()
            .map(|p| {
                format!(
                    "{}@{:.2}Hz={}dB",
                    p.label,
                    p.frequency_hz,
                    p.attenuation_db
                        .map_or("-inf".to_string(), |db| format!("{:.2}", db))
                )
            })
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{},{:.6},{},{},{},{},{}",
            report.topology,
            report.corner_hz,
            opt(report.quality_factor),
            opt(report.bandwidth_rad),
            opt(report.lower_edge_hz),
            opt(report.upper_edge_hz),
            probes
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("topology,corner_hz,q,bandwidth_rad,lower_edge_hz,upper_edge_hz,probes")
    }
}
