//! Simulation-Success Filter CLI
//!
//! Keeps tax-report records whose `simulationSuccess` is exactly `true`.
//!
//! Usage:
//!   cargo run --bin tax-success-filter
//!   cargo run --bin tax-success-filter -- --input report.jsonl --output ok.jsonl
//!
//! Created: 2026-10-17

use anyhow::Result;
use pairtax_filters::cli::{finish_run, parse_args, resolve_path, TaxSuccessArgs};
use pairtax_filters::config::load_config;
use pairtax_filters::filters::TaxSuccessFilter;
use pairtax_filters::jsonl::filter_file;
use pairtax_filters::logging::init_logging;
use tracing::info;

fn main() -> Result<()> {
    init_logging();
    let args: TaxSuccessArgs = parse_args();

    let config = load_config(args.common.config.as_deref())?;
    let input = resolve_path(args.input, &config.paths.tax_report);
    let output = resolve_path(args.output, &config.paths.sim_success_output);

    info!("Tax success filter: {} -> {}", input.display(), output.display());
    let filter = TaxSuccessFilter::new(config.fields);
    let report = filter_file(&input, &output, &filter)?;

    finish_run(&report, args.common.json, args.common.max_malformed.or(config.max_malformed))
}
