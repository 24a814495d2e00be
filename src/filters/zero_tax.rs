//! Zero-tax filter
//!
//! Keeps tax-report records with transfer, buy and sell tax all equal to
//! zero and `isHoneypot` equal to `false`. Comparison is numeric, so `false`
//! and `0` are interchangeable in all four fields. No tolerance is applied
//! to the tax values, and a record missing any of the four fields is
//! excluded.
//!
//! Created: 2026-10-17

use super::RecordFilter;
use crate::config::FieldNames;
use crate::types::TokenTaxView;
use serde_json::Value;

pub struct ZeroTaxFilter {
    fields: FieldNames,
}

impl ZeroTaxFilter {
    pub fn new(fields: FieldNames) -> Self {
        Self { fields }
    }
}

impl Default for ZeroTaxFilter {
    fn default() -> Self {
        Self::new(FieldNames::default())
    }
}

impl RecordFilter for ZeroTaxFilter {
    fn name(&self) -> &str {
        "zero-tax"
    }

    fn keep(&self, record: &Value) -> bool {
        let view = TokenTaxView::new(record, &self.fields);
        view.has_zero_taxes() && view.is_not_honeypot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn clean() -> Value {
        json!({
            "token": "0xA",
            "transferTax": 0,
            "buyTax": 0,
            "sellTax": 0,
            "isHoneypot": false
        })
    }

    #[test]
    fn test_clean_token_kept() {
        assert!(ZeroTaxFilter::default().keep(&clean()));
    }

    #[test]
    fn test_any_single_field_change_excludes() {
        let filter = ZeroTaxFilter::default();
        let changes = [
            ("transferTax", json!(1)),
            ("buyTax", json!(0.5)),
            ("sellTax", json!(10)),
            ("isHoneypot", json!(true)),
            ("isHoneypot", json!(null)),
            ("buyTax", json!("0")),
        ];
        for (field, value) in changes {
            let mut record = clean();
            record[field] = value;
            assert!(!filter.keep(&record), "{} should exclude", record);
        }
    }

    #[test]
    fn test_missing_field_excludes() {
        let filter = ZeroTaxFilter::default();
        for field in ["transferTax", "buyTax", "sellTax", "isHoneypot"] {
            let mut record = clean();
            record.as_object_mut().unwrap().remove(field);
            assert!(!filter.keep(&record), "missing {} should exclude", field);
        }
    }

    #[test]
    fn test_false_and_zero_interchangeable() {
        let filter = ZeroTaxFilter::default();
        let data = r#"{"token":"ok","transferTax":0,"buyTax":0,"sellTax":0,"isHoneypot":false}
{"token":"hp0","transferTax":0,"buyTax":0,"sellTax":0,"isHoneypot":0}
{"token":"tfalse","transferTax":false,"buyTax":0,"sellTax":0,"isHoneypot":false}
{"token":"hp1","transferTax":0,"buyTax":0,"sellTax":0,"isHoneypot":1}
{"token":"ttrue","transferTax":true,"buyTax":0,"sellTax":0,"isHoneypot":false}
"#;
        let mut out = Vec::new();
        let stats = crate::jsonl::filter_reader(data.as_bytes(), &mut out, &filter).unwrap();
        assert_eq!(stats.records_kept, 3);
        let kept: Vec<&str> = data.lines().take(3).collect();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", kept.join("\n")));
    }

    #[test]
    fn test_simulation_result_irrelevant() {
        let mut record = clean();
        record["simulationSuccess"] = json!(false);
        assert!(ZeroTaxFilter::default().keep(&record));
    }
}
