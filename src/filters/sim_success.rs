//! Simulation-success filter
//!
//! Keeps tax-report records whose sell simulation succeeded, i.e. whose
//! `simulationSuccess` field is the JSON literal `true`.
//!
//! Created: 2026-10-17

use super::RecordFilter;
use crate::config::FieldNames;
use crate::types::TokenTaxView;
use serde_json::Value;

pub struct TaxSuccessFilter {
    fields: FieldNames,
}

impl TaxSuccessFilter {
    pub fn new(fields: FieldNames) -> Self {
        Self { fields }
    }
}

impl Default for TaxSuccessFilter {
    fn default() -> Self {
        Self::new(FieldNames::default())
    }
}

impl RecordFilter for TaxSuccessFilter {
    fn name(&self) -> &str {
        "tax-success"
    }

    fn keep(&self, record: &Value) -> bool {
        TokenTaxView::new(record, &self.fields).simulation_succeeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonl::filter_reader;

    #[test]
    fn test_keeps_only_literal_true() {
        let data = r#"{"token":"0x1","simulationSuccess":true}
{"token":"0x2","simulationSuccess":false}
{"token":"0x3","simulationSuccess":1}
{"token":"0x4"}
{"token":"0x5","simulationSuccess":"true"}
{"token":
{"token":"0x6","simulationSuccess":true,"buyTax":3}
"#;
        let mut out = Vec::new();
        let stats = filter_reader(data.as_bytes(), &mut out, &TaxSuccessFilter::default()).unwrap();

        assert_eq!(stats.records_kept, 2);
        assert_eq!(stats.records_excluded, 4);
        assert_eq!(stats.malformed_lines, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"token\":\"0x1\",\"simulationSuccess\":true}\n\
             {\"token\":\"0x6\",\"simulationSuccess\":true,\"buyTax\":3}\n"
        );
    }

    #[test]
    fn test_custom_field_name() {
        let fields = FieldNames {
            simulation_success: "simOk".to_string(),
            ..FieldNames::default()
        };
        let filter = TaxSuccessFilter::new(fields);
        assert!(filter.keep(&serde_json::json!({"simOk": true})));
        assert!(!filter.keep(&serde_json::json!({"simulationSuccess": true})));
    }
}
