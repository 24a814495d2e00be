//! Streaming JSONL scanner
//!
//! One linear pass per file: read a line, parse it, hand the record to a
//! visitor. Lines that are not valid UTF-8 or not valid JSON are counted
//! and skipped; they never abort the scan. IO errors do.
//!
//! Retained records are written back as their original line text (minus
//! surrounding ASCII whitespace), so a filter's output fed back into the same
//! filter reproduces itself byte for byte.
//!
//! Created: 2026-10-17

use crate::error::FilterError;
use crate::filters::RecordFilter;
use crate::types::{FilterReport, ScanStats};
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// BufReader/BufWriter capacity
const BUFFER_SIZE: usize = 64 * 1024;

/// Verdict returned by a scan visitor for each parsed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Exclude,
}

impl From<bool> for Verdict {
    fn from(keep: bool) -> Self {
        if keep {
            Verdict::Keep
        } else {
            Verdict::Exclude
        }
    }
}

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Scan a JSONL stream, calling `visit(line_number, line_text, record)` for
/// every line that parses. Line numbers are 1-based.
pub fn scan_reader<R, F>(mut reader: R, mut visit: F) -> Result<ScanStats>
where
    R: BufRead,
    F: FnMut(usize, &str, &Value) -> Result<Verdict>,
{
    let mut stats = ScanStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read JSONL line")?;
        if n == 0 {
            break;
        }
        stats.lines_read += 1;
        let line_number = stats.lines_read;

        let text = match std::str::from_utf8(&buf) {
            Ok(s) => s.trim_matches(|c: char| c.is_ascii_whitespace()),
            Err(e) => {
                debug!("Line {}: invalid UTF-8 ({}), skipped", line_number, e);
                stats.malformed_lines += 1;
                continue;
            }
        };

        if text.is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        let record: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                debug!("Line {}: malformed JSON ({}), skipped", line_number, e);
                stats.malformed_lines += 1;
                continue;
            }
        };

        match visit(line_number, text, &record)? {
            Verdict::Keep => stats.records_kept += 1,
            Verdict::Exclude => stats.records_excluded += 1,
        }
    }

    Ok(stats)
}

/// Open `path` and scan it. Fails if the file cannot be opened.
pub fn scan_file<P, F>(path: P, visit: F) -> Result<ScanStats>
where
    P: AsRef<Path>,
    F: FnMut(usize, &str, &Value) -> Result<Verdict>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let reader = BufReader::with_capacity(BUFFER_SIZE, file);
    scan_reader(reader, visit).with_context(|| format!("Failed while scanning {}", path.display()))
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Copy every record `filter` keeps from `reader` to `writer`, one per line.
pub fn filter_reader<R, W>(reader: R, writer: &mut W, filter: &dyn RecordFilter) -> Result<ScanStats>
where
    R: BufRead,
    W: Write,
{
    scan_reader(reader, |_, text, record| {
        let keep = filter.keep(record);
        if keep {
            writeln!(writer, "{}", text).context("Failed to write output record")?;
        }
        Ok(keep.into())
    })
}

/// Run `filter` over the JSONL file at `input`, writing kept records to
/// `output`. The output is truncated first; its parent directory is created
/// if missing.
pub fn filter_file(input: &Path, output: &Path, filter: &dyn RecordFilter) -> Result<FilterReport> {
    ensure_distinct(input, output)?;

    let started_at = Utc::now();
    let timer = Instant::now();

    let source = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let reader = BufReader::with_capacity(BUFFER_SIZE, source);

    let mut writer = BufWriter::with_capacity(BUFFER_SIZE, create_output(output)?);
    let stats = filter_reader(reader, &mut writer, filter)
        .with_context(|| format!("{} failed on {}", filter.name(), input.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", output.display()))?;

    let report = FilterReport {
        filter: filter.name().to_string(),
        input: input.to_path_buf(),
        output: Some(output.to_path_buf()),
        started_at,
        elapsed_ms: timer.elapsed().as_millis() as u64,
        stats,
    };
    log_report(&report);
    Ok(report)
}

/// Create (or truncate) an output file, creating its parent directory.
pub fn create_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }
    File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))
}

/// Refuse to truncate an input we are about to read.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    if !output.exists() {
        return Ok(());
    }
    // A missing input is reported by the open that follows, not here.
    let (Ok(a), Ok(b)) = (input.canonicalize(), output.canonicalize()) else {
        return Ok(());
    };
    if a == b {
        return Err(FilterError::OutputIsInput {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Log the end-of-run summary; malformed lines are surfaced at warn level.
pub fn log_report(report: &FilterReport) {
    let stats = &report.stats;
    info!(
        "{}: {} lines read, {} kept, {} excluded ({} ms)",
        report.filter, stats.lines_read, stats.records_kept, stats.records_excluded, report.elapsed_ms
    );
    if stats.malformed_lines > 0 {
        warn!(
            "{}: skipped {} malformed lines in {}",
            report.filter,
            stats.malformed_lines,
            report.input.display()
        );
    }
}
