//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod almanac;
pub mod interval;
pub mod pipeline;
pub mod rule;
pub mod seeds;
pub mod table;
