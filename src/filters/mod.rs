//! Record filters
//!
//! Per-record predicates over tax-report and liquidity-pair JSONL lines.
//! Each filter implements [`RecordFilter`] and runs on the shared scanner in
//! [`crate::jsonl`].
//!
//! Created: 2026-10-17

pub mod pair_tax;
pub mod safe_tokens;
pub mod sim_success;
pub mod zero_tax;

pub use pair_tax::PairTaxFilter;
pub use safe_tokens::{normalize_addr, SafeTokenSet};
pub use sim_success::TaxSuccessFilter;
pub use zero_tax::ZeroTaxFilter;

use serde_json::Value;

/// A keep/exclude decision over one parsed JSONL record
pub trait RecordFilter {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// Whether the record belongs in the output
    fn keep(&self, record: &Value) -> bool;
}
