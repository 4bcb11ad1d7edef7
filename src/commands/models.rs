use crate::histogram::HistogramConfig;
use crate::sort::{SortDescriptor, SortKey};
use crate::utils::config::DEFAULT_EDITOR_COMMAND;
use std::path::PathBuf;

/// Arguments for the inspect command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Build-time log to load
    pub log_file: PathBuf,

    /// Sort order, highest priority first
    pub sort_order: Vec<SortDescriptor>,

    /// Display rows to select (after sorting)
    pub select_rows: Vec<usize>,

    /// Select every row
    pub select_all: bool,

    /// Maximum rows printed in the table or text histogram
    pub limit: usize,

    /// Print a text histogram instead of the table
    pub histogram: bool,

    /// Histogram rendering options (text and SVG)
    pub histogram_config: HistogramConfig,

    /// Output path for SVG histogram (optional)
    pub output_svg: Option<PathBuf>,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            log_file: PathBuf::new(),
            sort_order: vec![SortDescriptor::descending(SortKey::Duration)],
            select_rows: Vec::new(),
            select_all: false,
            limit: 50,
            histogram: false,
            histogram_config: HistogramConfig::default(),
            output_svg: None,
            output_json: None,
        }
    }
}

/// Arguments for the reveal command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RevealArgs {
    /// Build-time log to load
    pub log_file: PathBuf,

    /// Sort order the row number refers to
    pub sort_order: Vec<SortDescriptor>,

    /// Display row to reveal
    pub row: usize,

    /// Editor command template with `{path}` and `{line}` placeholders
    pub editor_command: String,

    /// Print the location instead of launching the editor
    pub dry_run: bool,
}

impl Default for RevealArgs {
    fn default() -> Self {
        Self {
            log_file: PathBuf::new(),
            sort_order: vec![SortDescriptor::descending(SortKey::Duration)],
            row: 0,
            editor_command: DEFAULT_EDITOR_COMMAND.to_string(),
            dry_run: false,
        }
    }
}
