//! Safe token set
//!
//! Lowercased token addresses that passed the zero-tax screen. Built in one
//! pass over the zero-tax JSONL file, held in memory for the pair scan, and
//! dropped at exit.
//!
//! Chain addresses are case-insensitive but arrive in mixed (checksummed)
//! case from different sources, so every address is lowercased on insert
//! and on lookup.
//!
//! Created: 2026-10-17

use crate::config::FieldNames;
use crate::jsonl::{scan_file, scan_reader, Verdict};
use crate::types::{ScanStats, TokenTaxView};
use anyhow::Result;
use serde_json::Value;
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default, Clone)]
pub struct SafeTokenSet {
    addrs: HashSet<String>,
}

impl SafeTokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Build from a zero-tax token file. Returns the set and the scan stats;
    /// `records_kept` counts lines that contributed an address.
    pub fn load<P: AsRef<Path>>(path: P, fields: &FieldNames) -> Result<(Self, ScanStats)> {
        let path = path.as_ref();
        let mut set = Self::new();
        let stats = scan_file(path, |_, _, record| Ok(set.insert_record(record, fields)))?;

        info!(
            "Safe token set loaded from {}: {} addresses from {} lines",
            path.display(),
            set.len(),
            stats.lines_read,
        );
        if stats.malformed_lines > 0 {
            warn!(
                "Safe token set: skipped {} malformed lines in {}",
                stats.malformed_lines,
                path.display()
            );
        }
        Ok((set, stats))
    }

    /// Build from any JSONL stream
    pub fn from_reader<R: BufRead>(reader: R, fields: &FieldNames) -> Result<(Self, ScanStats)> {
        let mut set = Self::new();
        let stats = scan_reader(reader, |_, _, record| Ok(set.insert_record(record, fields)))?;
        Ok((set, stats))
    }

    /// Insert the record's token address if it has a non-empty one
    fn insert_record(&mut self, record: &Value, fields: &FieldNames) -> Verdict {
        match TokenTaxView::new(record, fields).token() {
            Some(addr) => {
                self.insert(addr);
                Verdict::Keep
            }
            None => Verdict::Exclude,
        }
    }

    pub fn insert(&mut self, addr: &str) -> bool {
        self.addrs.insert(normalize_addr(addr))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn contains(&self, addr: &str) -> bool {
        self.addrs.contains(&normalize_addr(addr))
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SafeTokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for addr in iter {
            set.insert(addr.as_ref());
        }
        set
    }
}

/// Normalize an address for set membership (lowercase, nothing else).
pub fn normalize_addr(s: &str) -> String {
    s.to_lowercase()
}
