//! Almanac related constants

// =============================================================================
// Input format
// =============================================================================

/// Prefix of the first input line carrying the seed numbers
pub const SEEDS_PREFIX: &str = "seeds:";

/// Marker identifying a table header line (e.g. `seed-to-soil map:`)
pub const MAP_HEADER_MARKER: &str = "map:";

/// Separator between the source and destination category in a table name
pub const CATEGORY_SEPARATOR: &str = "-to-";

/// Number of integers on a rule line (`<dest_start> <source_start> <length>`)
pub const RULE_FIELD_COUNT: usize = 3;

// =============================================================================
// Logging
// =============================================================================

/// Log filter used when neither `RUST_LOG` nor `--log-filter` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
