//! Almanac loading and operator-facing error messages shared by the binaries.

use std::io;
use std::path::Path;

use seedmap_almanac::{Almanac, AlmanacError, ParseError, load_almanac, read_almanac};
use tracing::info;

/// Path value that selects stdin instead of a file
pub const STDIN_PATH: &str = "-";

pub fn format_almanac_error(path: &Path, err: &AlmanacError) -> String {
    match err {
        AlmanacError::Io(e) if e.kind() == io::ErrorKind::NotFound => {
            format!("Almanac file not found: '{}'.", path.display())
        }
        AlmanacError::Io(e) => format!("Could not read '{}': {}", path.display(), e),
        AlmanacError::Parse(ParseError::MissingSeedsLine) => format!(
            "'{}' does not start with a seeds line.\nThe first line must look like: seeds: 79 14 55 13",
            path.display()
        ),
        AlmanacError::Parse(e) => format!("Invalid almanac '{}': {}", path.display(), e),
    }
}

/// Load the almanac from a file, or from stdin for `-`
pub fn load_input(path: &Path) -> Result<Almanac, AlmanacError> {
    let almanac = if path.as_os_str() == STDIN_PATH {
        read_almanac(io::stdin().lock())?
    } else {
        load_almanac(path)?
    };

    info!(
        seeds = almanac.seeds.len(),
        tables = almanac.pipeline.len(),
        "loaded almanac"
    );
    Ok(almanac)
}

/// Load the almanac, printing a diagnostic and exiting on failure
pub fn load_input_or_exit(path: &Path) -> Almanac {
    match load_input(path) {
        Ok(almanac) => almanac,
        Err(e) => {
            eprintln!("Error: {}", format_almanac_error(path, &e));
            std::process::exit(1);
        }
    }
}
