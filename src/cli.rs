//! Command-line plumbing shared by the filter binaries
//!
//! Precedence for every path: flag / env var > config file > built-in default.
//!
//! Created: 2026-10-17

use crate::error::FilterError;
use crate::types::{FilterReport, ScanStats};
use anyhow::Result;
use clap::{Args, Parser};
use std::path::{Path, PathBuf};

/// Options every filter binary accepts
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// TOML config file with [paths] and [fields] tables
    #[arg(short, long, env = "FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fail the run if more than this many lines are malformed
    #[arg(long)]
    pub max_malformed: Option<usize>,

    /// Print the run report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Per-binary arguments
// ---------------------------------------------------------------------------

// Env var names. The zero-tax output and the pair filter's token input share
// one variable so the two ends of the chain cannot drift apart.
pub const TAX_REPORT_ENV: &str = "TAX_REPORT";
pub const SIM_SUCCESS_OUTPUT_ENV: &str = "SIM_SUCCESS_OUTPUT";
pub const ZERO_TAX_TOKENS_ENV: &str = "ZERO_TAX_TOKENS";
pub const LIQUID_PAIRS_ENV: &str = "LIQUID_PAIRS";
pub const TAXED_PAIRS_OUTPUT_ENV: &str = "TAXED_PAIRS_OUTPUT";

#[derive(Debug, Parser)]
#[command(name = "tax-success-filter", about = "Keep tokens whose tax simulation succeeded")]
pub struct TaxSuccessArgs {
    /// Tax report JSONL (default: data/token_tax_report.jsonl)
    #[arg(short, long, env = TAX_REPORT_ENV)]
    pub input: Option<PathBuf>,

    /// Output JSONL (default: data/token_tax_report_sim_success.jsonl)
    #[arg(short, long, env = SIM_SUCCESS_OUTPUT_ENV)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
#[command(name = "zero-tax-filter", about = "Keep zero-tax, non-honeypot tokens")]
pub struct ZeroTaxArgs {
    /// Tax report JSONL (default: data/token_tax_report.jsonl)
    #[arg(short, long, env = TAX_REPORT_ENV)]
    pub input: Option<PathBuf>,

    /// Output JSONL (default: data/token_zero_transfer_tax.jsonl)
    #[arg(short, long, env = ZERO_TAX_TOKENS_ENV)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
#[command(name = "pair-tax-filter", about = "Keep pairs whose both tokens are zero-tax")]
pub struct PairTaxArgs {
    /// Zero-tax token JSONL (default: data/token_zero_transfer_tax.jsonl)
    #[arg(short, long, env = ZERO_TAX_TOKENS_ENV)]
    pub tokens: Option<PathBuf>,

    /// Liquidity pair JSONL (default: data/liquid_pairs_v2_new.jsonl)
    #[arg(short, long, env = LIQUID_PAIRS_ENV)]
    pub pairs: Option<PathBuf>,

    /// Output JSONL (default: data/liquid_pairs_v2_accurate_taxed.jsonl)
    #[arg(short, long, env = TAXED_PAIRS_OUTPUT_ENV)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Load `.env` so `env = ...` arguments see it, then parse the command line.
pub fn parse_args<T: Parser>() -> T {
    dotenv::dotenv().ok();
    T::parse()
}

/// Flag value if given, else the configured one.
pub fn resolve_path(flag: Option<PathBuf>, configured: &Path) -> PathBuf {
    flag.unwrap_or_else(|| configured.to_path_buf())
}

/// Print the report and enforce the malformed-line limit.
/// `limit` comes from the flag, falling back to the config file.
pub fn finish_run(report: &FilterReport, json: bool, limit: Option<usize>) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("\n{}", report);
    }
    check_malformed(&report.input, &report.stats, limit)
}

/// Error out when a scan's malformed count exceeds `limit`.
pub fn check_malformed(input: &Path, stats: &ScanStats, limit: Option<usize>) -> Result<()> {
    match limit {
        Some(limit) if stats.malformed_lines > limit => Err(FilterError::TooManyMalformed {
            path: input.to_path_buf(),
            malformed: stats.malformed_lines,
            limit,
        }
        .into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn stats(malformed: usize) -> ScanStats {
        ScanStats {
            malformed_lines: malformed,
            ..ScanStats::default()
        }
    }

    #[test]
    fn test_no_limit_never_fails() {
        let path = Path::new("data/token_tax_report.jsonl");
        assert!(check_malformed(path, &stats(1_000), None).is_ok());
    }

    #[test]
    fn test_limit_is_inclusive() {
        let path = Path::new("data/token_tax_report.jsonl");
        assert!(check_malformed(path, &stats(3), Some(3)).is_ok());
        assert!(check_malformed(path, &stats(4), Some(3)).is_err());
        assert!(check_malformed(path, &stats(1), Some(0)).is_err());
    }

    #[test]
    fn test_limit_error_is_typed() {
        let path = Path::new("data/token_tax_report.jsonl");
        let err = check_malformed(path, &stats(4), Some(3)).unwrap_err();
        match err.downcast_ref::<FilterError>() {
            Some(FilterError::TooManyMalformed { malformed, limit, .. }) => {
                assert_eq!((*malformed, *limit), (4, 3));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_flag_overrides_configured_path() {
        let configured = PathBuf::from("data/a.jsonl");
        assert_eq!(resolve_path(None, &configured), configured);
        assert_eq!(
            resolve_path(Some(PathBuf::from("b.jsonl")), &configured),
            PathBuf::from("b.jsonl")
        );
    }

    fn env_of<C: CommandFactory>(arg: &str) -> Option<String> {
        C::command()
            .get_arguments()
            .find(|a| a.get_id() == arg)
            .and_then(|a| a.get_env())
            .map(|e| e.to_string_lossy().into_owned())
    }

    #[test]
    fn test_output_env_vars_are_distinct() {
        let outputs = [
            env_of::<TaxSuccessArgs>("output").unwrap(),
            env_of::<ZeroTaxArgs>("output").unwrap(),
            env_of::<PairTaxArgs>("output").unwrap(),
        ];
        assert_eq!(outputs, [SIM_SUCCESS_OUTPUT_ENV, ZERO_TAX_TOKENS_ENV, TAXED_PAIRS_OUTPUT_ENV]);
        assert_ne!(outputs[0], outputs[1]);
        assert_ne!(outputs[1], outputs[2]);
        assert_ne!(outputs[0], outputs[2]);
    }

    #[test]
    fn test_zero_tax_output_feeds_pair_tokens() {
        assert_eq!(
            env_of::<ZeroTaxArgs>("output"),
            env_of::<PairTaxArgs>("tokens")
        );
        assert_eq!(env_of::<PairTaxArgs>("pairs").as_deref(), Some(LIQUID_PAIRS_ENV));
    }

    #[test]
    fn test_pair_args_flags() {
        let args = PairTaxArgs::parse_from([
            "pair-tax-filter",
            "--tokens",
            "t.jsonl",
            "--pairs",
            "p.jsonl",
            "--output",
            "o.jsonl",
        ]);
        assert_eq!(args.tokens, Some(PathBuf::from("t.jsonl")));
        assert_eq!(args.pairs, Some(PathBuf::from("p.jsonl")));
        assert_eq!(args.output, Some(PathBuf::from("o.jsonl")));
    }

    #[test]
    fn test_common_args_parse() {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            common: CommonArgs,
        }

        let cli = TestCli::parse_from(["test", "--max-malformed", "7", "--json"]);
        assert_eq!(cli.common.max_malformed, Some(7));
        assert!(cli.common.json);
    }
}
