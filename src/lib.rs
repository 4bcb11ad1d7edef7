//! Build-Time Inspector
//!
//! Parsing, sorting, selection and summary statistics for Swift
//! function build-time logs (`-Xfrontend -debug-time-function-bodies`).
//!
//! This crate provides the core implementation for the
//! `buildtime-inspector` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! xcodebuild OTHER_SWIFT_FLAGS="-Xfrontend -debug-time-function-bodies" \
//!     | grep -E '^[0-9.]+ms' > build.log
//! buildtime-inspector inspect --file build.log --sort duration:desc
//! ```
//!
//! Library users start from [`parser::load_log_file`] and
//! [`view::ViewState`].

pub mod aggregator;
pub mod commands;
pub mod histogram;
pub mod output;
pub mod parser;
pub mod sort;
pub mod utils;
pub mod view;
