//! Infrastructure layer - I/O and input decoding
//!
//! This module handles reading almanac files and turning their text into domain types.

pub mod almanac_io;
pub mod almanac_parse;
