//! Zero-Tax Filter CLI
//!
//! Keeps tax-report records with zero transfer/buy/sell tax that are not
//! flagged as honeypots. Its output is the token input of `pair-tax-filter`.
//!
//! Usage:
//!   cargo run --bin zero-tax-filter
//!   cargo run --bin zero-tax-filter -- --config filters.toml --max-malformed 0
//!
//! Created: 2026-10-17

use anyhow::Result;
use pairtax_filters::cli::{finish_run, parse_args, resolve_path, ZeroTaxArgs};
use pairtax_filters::config::load_config;
use pairtax_filters::filters::ZeroTaxFilter;
use pairtax_filters::jsonl::filter_file;
use pairtax_filters::logging::init_logging;
use tracing::info;

fn main() -> Result<()> {
    init_logging();
    let args: ZeroTaxArgs = parse_args();

    let config = load_config(args.common.config.as_deref())?;
    let input = resolve_path(args.input, &config.paths.tax_report);
    let output = resolve_path(args.output, &config.paths.zero_tax_tokens);

    info!("Zero-tax filter: {} -> {}", input.display(), output.display());
    let filter = ZeroTaxFilter::new(config.fields);
    let report = filter_file(&input, &output, &filter)?;

    finish_run(&report, args.common.json, args.common.max_malformed.or(config.max_malformed))
}
