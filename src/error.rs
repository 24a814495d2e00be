//! Filter error types
//!
//! Scan and IO failures travel as `anyhow` errors with path context. The
//! typed variants here cover unusable settings, runs that would overwrite
//! their own input, and scans over the malformed-line limit.
//!
//! Created: 2026-10-17

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("field name for `{0}` must not be empty")]
    EmptyFieldName(&'static str),

    #[error("output {output:?} is the same file as input {input:?}")]
    OutputIsInput { input: PathBuf, output: PathBuf },

    #[error("{malformed} malformed lines in {path:?} (limit {limit})")]
    TooManyMalformed {
        path: PathBuf,
        malformed: usize,
        limit: usize,
    },
}
