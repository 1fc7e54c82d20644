use super::{FilterReport, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &FilterReport) -> String {
        // FilterReport contains only plain numbers and strings, so
        // serialization cannot fail in practice.
        serde_json::to_string(report).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_report;
    use super::*;

    #[test]
    fn test_json_round_trips_through_value() {
        let rendered = JsonFormatter.format(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["topology"], "RC low-pass");
        assert!(value["quality_factor"].is_null());
        assert_eq!(value["probes"].as_array().unwrap().len(), 2);
        assert_eq!(value["probes"][1]["label"], "Astop");
    }
}
