//! Build-Time Inspector CLI
//!
//! Sorts, selects and summarizes the per-function build times Xcode
//! prints for Swift sources, and opens slow functions in the editor.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use buildtime_inspector::commands::{
    display_format, display_version, execute_inspect, execute_reveal, validate_inspect_args,
    validate_report_file, validate_reveal_args, InspectArgs, RevealArgs,
};
use buildtime_inspector::histogram::HistogramConfig;
use buildtime_inspector::sort::parse_sort_order;
use buildtime_inspector::utils::config::{
    DEFAULT_BAR_WIDTH, DEFAULT_EDITOR_COMMAND, DEFAULT_SVG_BAR_WIDTH,
};

/// Build-Time Inspector - Swift function build times, sorted and summarized
#[derive(Parser, Debug)]
#[command(name = "buildtime-inspector")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a build-time log and print sorted rows with statistics
    Inspect {
        /// Build-time log file
        #[arg(short, long)]
        file: PathBuf,

        /// Sort order, e.g. "duration:desc,path"
        #[arg(short, long, default_value = "duration:desc")]
        sort: String,

        /// Display rows to select, comma separated
        #[arg(long, value_delimiter = ',', conflicts_with = "select_all")]
        select: Vec<usize>,

        /// Select every row
        #[arg(long)]
        select_all: bool,

        /// Maximum rows to print
        #[arg(short, long, default_value = "50")]
        limit: usize,

        /// Print a text histogram instead of the table
        #[arg(long)]
        histogram: bool,

        /// Text histogram bar width in characters
        #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
        bar_width: usize,

        /// Color text histogram bars by duration
        #[arg(long)]
        color: bool,

        /// Output path for SVG histogram (optional)
        #[arg(long)]
        svg: Option<PathBuf>,

        /// SVG bar width in pixels
        #[arg(long, default_value_t = DEFAULT_SVG_BAR_WIDTH)]
        svg_bar_width: usize,

        /// Output path for JSON report (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Histogram title
        #[arg(long)]
        title: Option<String>,
    },

    /// Open the source location of a row in the editor
    Reveal {
        /// Build-time log file
        #[arg(short, long)]
        file: PathBuf,

        /// Display row to reveal (as printed by inspect)
        #[arg(short, long)]
        row: usize,

        /// Sort order the row refers to
        #[arg(short, long, default_value = "duration:desc")]
        sort: String,

        /// Editor command with {path} and {line} placeholders
        #[arg(long, env = "BUILDTIME_EDITOR", default_value = DEFAULT_EDITOR_COMMAND)]
        editor: String,

        /// Print the location instead of launching the editor
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display the log format and report schema
    Format {
        /// Show full report schema
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Inspect {
            file,
            sort,
            select,
            select_all,
            limit,
            histogram,
            bar_width,
            color,
            svg,
            svg_bar_width,
            json,
            title,
        } => {
            let mut histogram_config = HistogramConfig::new()
                .with_text_width(bar_width)
                .with_color(color);
            histogram_config.bar_width = svg_bar_width;
            if let Some(title) = title {
                histogram_config = histogram_config.with_title(title);
            }

            let args = InspectArgs {
                log_file: file,
                sort_order: parse_sort_order(&sort)?,
                select_rows: select,
                select_all,
                limit,
                histogram,
                histogram_config,
                output_svg: svg,
                output_json: json,
            };

            // Validate args first
            validate_inspect_args(&args)?;

            execute_inspect(args)?;
        }

        Commands::Reveal {
            file,
            row,
            sort,
            editor,
            dry_run,
        } => {
            let args = RevealArgs {
                log_file: file,
                sort_order: parse_sort_order(&sort)?,
                row,
                editor_command: editor,
                dry_run,
            };

            validate_reveal_args(&args)?;

            execute_reveal(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Format { show } => {
            display_format(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
