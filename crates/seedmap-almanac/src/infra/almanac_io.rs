//! Almanac file I/O operations
//!
//! This module provides functions for reading almanac input from files and readers.

use crate::domain::almanac::Almanac;
use crate::infra::almanac_parse::{ParseError, parse_almanac};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Almanac loading errors
#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    /// Input could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Input was read but is not a valid almanac
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Load an almanac from a file
pub fn load_almanac(path: impl AsRef<Path>) -> Result<Almanac, AlmanacError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read almanac file");
    Ok(parse_almanac(&text)?)
}

/// Load an almanac from any reader (e.g. stdin)
pub fn read_almanac(mut reader: impl Read) -> Result<Almanac, AlmanacError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    debug!(bytes = text.len(), "read almanac stream");
    Ok(parse_almanac(&text)?)
}
