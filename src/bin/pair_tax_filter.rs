//! Pair Tax Filter CLI
//!
//! Keeps liquidity pairs whose token0 and token1 both appear in the
//! zero-tax token file (compared case-insensitively).
//!
//! Usage:
//!   cargo run --bin pair-tax-filter
//!   cargo run --bin pair-tax-filter -- --tokens zero_tax.jsonl --pairs pairs.jsonl --output safe_pairs.jsonl
//!
//! Notes:
//!   - Run zero-tax-filter first; its output is the default --tokens file
//!   - Pair records are copied through unchanged
//!
//! Created: 2026-10-17

use anyhow::Result;
use pairtax_filters::cli::{check_malformed, finish_run, parse_args, resolve_path, PairTaxArgs};
use pairtax_filters::config::load_config;
use pairtax_filters::filters::PairTaxFilter;
use pairtax_filters::jsonl::ensure_distinct;
use pairtax_filters::logging::init_logging;

fn main() -> Result<()> {
    init_logging();
    let args: PairTaxArgs = parse_args();

    let config = load_config(args.common.config.as_deref())?;
    let tokens = resolve_path(args.tokens, &config.paths.zero_tax_tokens);
    let pairs = resolve_path(args.pairs, &config.paths.liquid_pairs);
    let output = resolve_path(args.output, &config.paths.taxed_pairs_output);
    let limit = args.common.max_malformed.or(config.max_malformed);

    ensure_distinct(&tokens, &output)?;

    // Phase 1: safe token index
    let (filter, token_stats) = PairTaxFilter::from_token_file(&tokens, config.fields)?;
    check_malformed(&tokens, &token_stats, limit)?;

    // Phase 2: pair scan
    let report = filter.run(&pairs, &output)?;
    finish_run(&report, args.common.json, limit)
}
