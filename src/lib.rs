//! Token-tax JSONL filters
//!
//! Line-oriented filters over token tax-report and liquidity-pair datasets:
//! - `tax-success-filter`: tokens whose sell simulation succeeded
//! - `zero-tax-filter`: tokens with zero transfer/buy/sell tax, not honeypots
//! - `pair-tax-filter`: pairs whose both tokens passed the zero-tax screen
//!
//! Created: 2026-10-17

pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod jsonl;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, FieldNames, FilterConfig};
pub use error::FilterError;
pub use filters::{PairTaxFilter, RecordFilter, SafeTokenSet, TaxSuccessFilter, ZeroTaxFilter};
pub use jsonl::filter_file;
pub use types::{FilterReport, ScanStats};
