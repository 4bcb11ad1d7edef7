//! Build-time log parsing.
//!
//! This module handles:
//! - Parsing single readout lines into records
//! - Loading whole logs while skipping malformed lines
//! - Defining the record type shared by every other module

pub mod loader;
pub mod readout;
pub mod record;

// Re-export main types
pub use loader::{load_log_file, parse_log, LoadReport, SkippedLine};
pub use readout::parse_readout;
pub use record::BuildTimeRecord;
