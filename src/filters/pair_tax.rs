//! Pair tax filter
//!
//! Keeps liquidity-pair records whose `token0` and `token1` are both in the
//! safe token set. Pool metadata beyond the two addresses is not inspected.
//!
//! Two phases: the set is built from the zero-tax token file first
//! ([`SafeTokenSet::load`]), then the pair file is scanned against it.
//!
//! Created: 2026-10-17

use super::{RecordFilter, SafeTokenSet};
use crate::config::FieldNames;
use crate::jsonl::filter_file;
use crate::types::{FilterReport, PairView, ScanStats};
use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

pub struct PairTaxFilter {
    safe_tokens: SafeTokenSet,
    fields: FieldNames,
}

impl PairTaxFilter {
    pub fn new(safe_tokens: SafeTokenSet, fields: FieldNames) -> Self {
        Self { safe_tokens, fields }
    }

    /// Phase 1: build the filter from a zero-tax token file
    pub fn from_token_file<P: AsRef<Path>>(path: P, fields: FieldNames) -> Result<(Self, ScanStats)> {
        let (safe_tokens, stats) = SafeTokenSet::load(path, &fields)?;
        if safe_tokens.is_empty() {
            warn!("Safe token set is empty; every pair will be excluded");
        }
        Ok((Self::new(safe_tokens, fields), stats))
    }

    /// Phase 2: filter the pair file
    pub fn run(&self, pairs: &Path, output: &Path) -> Result<FilterReport> {
        info!(
            "Filtering pairs in {} against {} safe tokens",
            pairs.display(),
            self.safe_tokens.len()
        );
        filter_file(pairs, output, self)
    }

    pub fn safe_tokens(&self) -> &SafeTokenSet {
        &self.safe_tokens
    }
}

impl RecordFilter for PairTaxFilter {
    fn name(&self) -> &str {
        "pair-tax"
    }

    fn keep(&self, record: &Value) -> bool {
        match PairView::new(record, &self.fields).tokens() {
            Some((token0, token1)) => {
                self.safe_tokens.contains(token0) && self.safe_tokens.contains(token1)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonl::filter_reader;
    use serde_json::json;

    fn filter() -> PairTaxFilter {
        let tokens = r#"{"token":"0xabc"}
{"token":"0xDEF"}
"#;
        let (set, _) = SafeTokenSet::from_reader(tokens.as_bytes(), &FieldNames::default()).unwrap();
        PairTaxFilter::new(set, FieldNames::default())
    }

    #[test]
    fn test_mixed_case_pair_matches() {
        let f = filter();
        assert!(f.keep(&json!({"token0": "0xABC", "token1": "0xdef"})));
    }

    #[test]
    fn test_one_unsafe_token_excludes() {
        let f = filter();
        assert!(!f.keep(&json!({"token0": "0xabc", "token1": "0x999"})));
        assert!(!f.keep(&json!({"token0": "0x999", "token1": "0xdef"})));
    }

    #[test]
    fn test_missing_or_empty_token_excludes() {
        let f = filter();
        assert!(!f.keep(&json!({"token0": "0xabc"})));
        assert!(!f.keep(&json!({"token0": "", "token1": "0xdef"})));
        assert!(!f.keep(&json!({"token0": "0xabc", "token1": null})));
    }

    #[test]
    fn test_pair_metadata_passes_through() {
        let pairs = r#"{"pair_address":"0xP1","token0":"0xAbc","token1":"0xdEf","dex_name":"PancakeSwap","reserve0":"12"}
{"pair_address":"0xP2","token0":"0xabc","token1":"0x777"}
not json at all
"#;
        let mut out = Vec::new();
        let stats = filter_reader(pairs.as_bytes(), &mut out, &filter()).unwrap();
        assert_eq!(stats.records_kept, 1);
        assert_eq!(stats.records_excluded, 1);
        assert_eq!(stats.malformed_lines, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"pair_address\":\"0xP1\",\"token0\":\"0xAbc\",\"token1\":\"0xdEf\",\"dex_name\":\"PancakeSwap\",\"reserve0\":\"12\"}\n"
        );
    }

    #[test]
    fn test_empty_set_excludes_everything() {
        let f = PairTaxFilter::new(SafeTokenSet::new(), FieldNames::default());
        assert!(!f.keep(&json!({"token0": "0xabc", "token1": "0xdef"})));
    }
}
