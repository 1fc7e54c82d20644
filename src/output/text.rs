use super::{FilterReport, Formatter};

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, report: &FilterReport) -> String {
        let mut lines = Vec::new();
        lines.push(format!("Filter: {}", report.topology));

        let mut components = format!("R = {} Ω", report.resistance_ohms);
        if let Some(l) = report.inductance_henries {
            components.push_str(&format!(", L = {} H", l));
        }
        if let Some(c) = report.capacitance_farads {
            components.push_str(&format!(", C = {} F", c));
        }
        lines.push(components);

        match report.quality_factor {
            Some(q) => {
                lines.push(format!("Center frequency: {:.2} Hz", report.corner_hz));
                lines.push(format!("Quality factor Q: {:.2}", q));
                if let Some(b) = report.bandwidth_rad {
                    lines.push(format!("Bandwidth B: {:.2} rad/s", b));
                }
                if let (Some(lo), Some(hi)) = (report.lower_edge_hz, report.upper_edge_hz) {
                    lines.push(format!("Band edges: {:.2} Hz - {:.2} Hz", lo, hi));
                }
            }
            None => {
                lines.push(format!("Cutoff frequency: {:.2} Hz", report.corner_hz));
            }
        }

        for probe in &report.probes {
            let db = probe
                .attenuation_db
                .map_or("-inf".to_string(), |db| format!("{:.2}", db));
            lines.push(format!(
                "{} @ {:.2} Hz: {} dB",
                probe.label, probe.frequency_hz, db
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_report;
    use super::*;

    #[test]
    fn test_text_report_lines() {
        let rendered = TextFormatter.format(&sample_report());
        assert!(rendered.contains("Filter: RC low-pass"));
        assert!(rendered.contains("R = 1000 Ω"));
        assert!(rendered.contains("Cutoff frequency: 159.15 Hz"));
        assert!(rendered.contains("Astop @ 1591.55 Hz: -20.04 dB"));
        // No Q line for a single-pole filter.
        assert!(!rendered.contains("Quality factor"));
    }
}
