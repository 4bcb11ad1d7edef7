//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod models;
pub mod reveal;
pub mod utils;

// Re-export main command functions
pub use inspect::{execute_inspect, validate_args as validate_inspect_args, InspectOutcome};
pub use models::{InspectArgs, RevealArgs};
pub use reveal::{execute_reveal, validate_args as validate_reveal_args};
pub use utils::{display_format, display_version, validate_report_file};
