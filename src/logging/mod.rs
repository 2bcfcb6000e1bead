//! Logging module for the dataset reorganizer
//!
//! This module provides:
//! - Custom log formatting with bracketed output
//! - Dual logging (stdout + optional file)
//! - Log file management with timestamps

#[cfg(test)]
pub(crate) mod capture;
mod formatter;
mod setup;

pub use setup::setup_logging;
