//! Record views and run reports
//!
//! Records stay as raw `serde_json::Value` so unknown pool metadata passes
//! through untouched. The views below borrow a record and read the
//! configured fields out of it. `simulationSuccess` must be the literal
//! `true`; the tax and honeypot fields compare numerically, so `false` and
//! `0` are interchangeable there.
//!
//! Created: 2026-10-17

use crate::config::FieldNames;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Tax-report records
// ---------------------------------------------------------------------------

/// Borrowed view over one tax-report line
pub struct TokenTaxView<'a> {
    record: &'a Value,
    fields: &'a FieldNames,
}

impl<'a> TokenTaxView<'a> {
    pub fn new(record: &'a Value, fields: &'a FieldNames) -> Self {
        Self { record, fields }
    }

    /// Token address as written in the record (non-empty strings only)
    pub fn token(&self) -> Option<&'a str> {
        non_empty_str(self.record.get(&self.fields.token))
    }

    /// `simulationSuccess` is the JSON literal `true` (not `1`, not `"true"`)
    pub fn simulation_succeeded(&self) -> bool {
        is_bool(self.record.get(&self.fields.simulation_success), true)
    }

    /// `isHoneypot` equals `false` (`0` also counts); absent is not clean
    pub fn is_not_honeypot(&self) -> bool {
        equals_zero(self.record.get(&self.fields.is_honeypot))
    }

    /// Transfer, buy and sell tax all equal zero (`false` also counts)
    pub fn has_zero_taxes(&self) -> bool {
        [
            &self.fields.transfer_tax,
            &self.fields.buy_tax,
            &self.fields.sell_tax,
        ]
        .iter()
        .all(|name| equals_zero(self.record.get(name.as_str())))
    }
}

// ---------------------------------------------------------------------------
// Liquidity-pair records
// ---------------------------------------------------------------------------

/// Borrowed view over one liquidity-pair line
pub struct PairView<'a> {
    record: &'a Value,
    fields: &'a FieldNames,
}

impl<'a> PairView<'a> {
    pub fn new(record: &'a Value, fields: &'a FieldNames) -> Self {
        Self { record, fields }
    }

    /// Both token addresses, or None if either is missing or empty
    pub fn tokens(&self) -> Option<(&'a str, &'a str)> {
        let token0 = non_empty_str(self.record.get(&self.fields.token0))?;
        let token1 = non_empty_str(self.record.get(&self.fields.token1))?;
        Some((token0, token1))
    }
}

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn is_bool(value: Option<&Value>, expected: bool) -> bool {
    matches!(value, Some(Value::Bool(b)) if *b == expected)
}

/// Numeric equality with zero, booleans counting as 0/1.
/// Strings and null never match.
fn equals_zero(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Bool(b)) => !*b,
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Line accounting for one scan of one input file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub malformed_lines: usize,
    pub records_kept: usize,
    pub records_excluded: usize,
}

impl ScanStats {
    /// Lines that parsed as JSON
    pub fn records_parsed(&self) -> usize {
        self.records_kept + self.records_excluded
    }
}

/// Summary of a filter run over one input file
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub filter: String,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub stats: ScanStats,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} @ {}", self.filter, self.started_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, "─────────────────────────────────────")?;
        writeln!(f, "Input:            {}", self.input.display())?;
        if let Some(ref output) = self.output {
            writeln!(f, "Output:           {}", output.display())?;
        }
        writeln!(f, "Lines read:       {}", self.stats.lines_read)?;
        writeln!(f, "Blank lines:      {}", self.stats.blank_lines)?;
        writeln!(f, "Malformed lines:  {}", self.stats.malformed_lines)?;
        writeln!(f, "Records kept:     {}", self.stats.records_kept)?;
        writeln!(f, "Records excluded: {}", self.stats.records_excluded)?;
        write!(f, "Elapsed:          {} ms", self.elapsed_ms)
    }
}
