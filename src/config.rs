//! Filter configuration
//!
//! Optional TOML file with a `[paths]` table (dataset locations) and a
//! `[fields]` table (record field names). Every key has a default, so an
//! empty file, or no file at all, reproduces the stock data/ layout.
//!
//! Example:
//! ```toml
//! max_malformed = 100
//!
//! [paths]
//! tax_report = "data/token_tax_report.jsonl"
//!
//! [fields]
//! token = "tokenAddress"
//! ```
//!
//! Created: 2026-10-17

use crate::error::FilterError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

// ---------------------------------------------------------------------------
// Default dataset paths
// ---------------------------------------------------------------------------

pub const DEFAULT_TAX_REPORT: &str = "data/token_tax_report.jsonl";
pub const DEFAULT_SIM_SUCCESS_OUTPUT: &str = "data/token_tax_report_sim_success.jsonl";
pub const DEFAULT_ZERO_TAX_OUTPUT: &str = "data/token_zero_transfer_tax.jsonl";
pub const DEFAULT_LIQUID_PAIRS: &str = "data/liquid_pairs_v2_new.jsonl";
pub const DEFAULT_TAXED_PAIRS_OUTPUT: &str = "data/liquid_pairs_v2_accurate_taxed.jsonl";

// ---------------------------------------------------------------------------
// TOML structures
// ---------------------------------------------------------------------------

/// Top-level configuration file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub fields: FieldNames,
    /// Abort with an error when a scan sees more malformed lines than this
    #[serde(default)]
    pub max_malformed: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_tax_report")]
    pub tax_report: PathBuf,
    #[serde(default = "default_sim_success_output")]
    pub sim_success_output: PathBuf,
    /// Written by the zero-tax filter, read by the pair filter
    #[serde(default = "default_zero_tax_tokens")]
    pub zero_tax_tokens: PathBuf,
    #[serde(default = "default_liquid_pairs")]
    pub liquid_pairs: PathBuf,
    #[serde(default = "default_taxed_pairs_output")]
    pub taxed_pairs_output: PathBuf,
}

fn default_tax_report() -> PathBuf { PathBuf::from(DEFAULT_TAX_REPORT) }
fn default_sim_success_output() -> PathBuf { PathBuf::from(DEFAULT_SIM_SUCCESS_OUTPUT) }
fn default_zero_tax_tokens() -> PathBuf { PathBuf::from(DEFAULT_ZERO_TAX_OUTPUT) }
fn default_liquid_pairs() -> PathBuf { PathBuf::from(DEFAULT_LIQUID_PAIRS) }
fn default_taxed_pairs_output() -> PathBuf { PathBuf::from(DEFAULT_TAXED_PAIRS_OUTPUT) }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tax_report: default_tax_report(),
            sim_success_output: default_sim_success_output(),
            zero_tax_tokens: default_zero_tax_tokens(),
            liquid_pairs: default_liquid_pairs(),
            taxed_pairs_output: default_taxed_pairs_output(),
        }
    }
}

/// JSON field names read from tax-report and pair records.
/// Upstream datasets are not consistent about these, hence configurable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldNames {
    #[serde(default = "default_token")]
    pub token: String,
    #[serde(default = "default_token0")]
    pub token0: String,
    #[serde(default = "default_token1")]
    pub token1: String,
    #[serde(default = "default_transfer_tax")]
    pub transfer_tax: String,
    #[serde(default = "default_buy_tax")]
    pub buy_tax: String,
    #[serde(default = "default_sell_tax")]
    pub sell_tax: String,
    #[serde(default = "default_is_honeypot")]
    pub is_honeypot: String,
    #[serde(default = "default_simulation_success")]
    pub simulation_success: String,
}

fn default_token() -> String { "token".to_string() }
fn default_token0() -> String { "token0".to_string() }
fn default_token1() -> String { "token1".to_string() }
fn default_transfer_tax() -> String { "transferTax".to_string() }
fn default_buy_tax() -> String { "buyTax".to_string() }
fn default_sell_tax() -> String { "sellTax".to_string() }
fn default_is_honeypot() -> String { "isHoneypot".to_string() }
fn default_simulation_success() -> String { "simulationSuccess".to_string() }

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            token: default_token(),
            token0: default_token0(),
            token1: default_token1(),
            transfer_tax: default_transfer_tax(),
            buy_tax: default_buy_tax(),
            sell_tax: default_sell_tax(),
            is_honeypot: default_is_honeypot(),
            simulation_success: default_simulation_success(),
        }
    }
}

impl FieldNames {
    /// Reject empty names; an empty key would silently exclude every record.
    pub fn validate(&self) -> Result<(), FilterError> {
        let named = [
            ("token", &self.token),
            ("token0", &self.token0),
            ("token1", &self.token1),
            ("transfer_tax", &self.transfer_tax),
            ("buy_tax", &self.buy_tax),
            ("sell_tax", &self.sell_tax),
            ("is_honeypot", &self.is_honeypot),
            ("simulation_success", &self.simulation_success),
        ];
        for (key, value) in named {
            if value.trim().is_empty() {
                return Err(FilterError::EmptyFieldName(key));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl FilterConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).context("Failed to parse TOML filter configuration")?;
        config.fields.validate()?;
        Ok(config)
    }
}

/// Load configuration from a TOML file
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<FilterConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = FilterConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    info!("Configuration loaded from {}", path.display());
    Ok(config)
}

/// Load the config file if one was given, else built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<FilterConfig> {
    match path {
        Some(p) => load_config_from_file(p),
        None => Ok(FilterConfig::default()),
    }
}
