//! Reveal command implementation.
//!
//! Loads a log, sorts it the way `inspect` printed it, and opens the source
//! location of one display row in the editor.

use super::models::RevealArgs;
use crate::parser::load_log_file;
use crate::view::{CommandRevealer, PrintRevealer, RevealTarget, Revealer, ViewState};
use anyhow::{Context, Result};
use log::{info, warn};

/// Execute the reveal command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The location that was revealed
///
/// # Errors
/// * Log file missing or unreadable
/// * Row past the end of the view
/// * Editor could not be launched or exited unsuccessfully
pub fn execute_reveal(args: RevealArgs) -> Result<RevealTarget> {
    info!("Loading {} to reveal row {}", args.log_file.display(), args.row);

    let load_report = load_log_file(&args.log_file).context("Failed to load build-time log")?;
    if load_report.has_skipped() {
        warn!("Skipped {} malformed lines", load_report.skipped.len());
    }

    let revealer: Box<dyn Revealer> = if args.dry_run {
        Box::new(PrintRevealer)
    } else {
        Box::new(CommandRevealer::new(args.editor_command.clone()))
    };

    let mut view = ViewState::new(revealer);
    view.load(load_report.records);
    view.set_sort_order(args.sort_order.clone());

    let target = view
        .reveal(args.row)
        .with_context(|| format!("Failed to reveal row {}", args.row))?;

    info!("✓ Revealed {}", target);
    Ok(target)
}

/// Validate reveal arguments
///
/// **Public** - can be called before execute_reveal for early validation
pub fn validate_args(args: &RevealArgs) -> Result<()> {
    if args.log_file.as_os_str().is_empty() {
        anyhow::bail!("Log file path cannot be empty");
    }

    if !args.dry_run && args.editor_command.trim().is_empty() {
        anyhow::bail!("Editor command cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn write_log(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_dry_run_reveals_sorted_row() {
        let log = write_log("1.0ms\t/a.swift:1:2\tfast()\n9.0ms\t/b.swift:7:3\tslow()\n");
        let args = RevealArgs {
            log_file: log.path().to_path_buf(),
            row: 0,
            dry_run: true,
            ..Default::default()
        };

        let target = execute_reveal(args).unwrap();
        assert_eq!(target, RevealTarget::new("/b.swift", 7));
    }

    #[test]
    fn test_row_out_of_range() {
        let log = write_log("1.0ms\t/a.swift:1:2\tfast()\n");
        let args = RevealArgs {
            log_file: log.path().to_path_buf(),
            row: 3,
            dry_run: true,
            ..Default::default()
        };

        assert!(execute_reveal(args).is_err());
    }

    #[test]
    fn test_validate_args_empty_editor() {
        let args = RevealArgs {
            log_file: PathBuf::from("build.log"),
            editor_command: "  ".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());

        let dry = RevealArgs {
            dry_run: true,
            ..args
        };
        assert!(validate_args(&dry).is_ok());
    }
}
