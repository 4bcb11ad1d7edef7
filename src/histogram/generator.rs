//! Histogram rendering of build-time records.
//!
//! Each record becomes one bar whose height is its duration relative to the
//! longest record. Two renderings are provided:
//! - SVG, with a hover tooltip per bar
//! - Text, one row per record, for the terminal

use crate::aggregator::{bar_fraction, longest_duration};
use crate::parser::BuildTimeRecord;
use crate::utils::config::{DEFAULT_BAR_WIDTH, DEFAULT_SVG_BAR_WIDTH, DEFAULT_SVG_HEIGHT};
use crate::utils::error::HistogramError;
use log::info;

/// Histogram configuration
#[derive(Debug, Clone)]
pub struct HistogramConfig {
    pub title: String,

    /// SVG: width of one bar in pixels
    pub bar_width: usize,

    /// SVG: height of the plot area in pixels
    pub height: usize,

    /// Text: width of a full-height bar in characters
    pub text_width: usize,

    /// Text: colour bars with ANSI escapes
    pub color: bool,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            title: "Function Build Times".to_string(),
            bar_width: DEFAULT_SVG_BAR_WIDTH,
            height: DEFAULT_SVG_HEIGHT,
            text_width: DEFAULT_BAR_WIDTH,
            color: false,
        }
    }
}

impl HistogramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_text_width(mut self, width: usize) -> Self {
        self.text_width = width;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

const TITLE_HEIGHT: usize = 40;
const AXIS_HEIGHT: usize = 30;
const MARGIN: usize = 10;
const MIN_WIDTH: usize = 400;

/// Generate an SVG histogram, one bar per record in the given order
///
/// **Public** - main entry point for SVG output
///
/// # Errors
/// * `HistogramError::EmptyRecords` - Nothing to draw
pub fn generate_histogram_svg(
    records: &[&BuildTimeRecord],
    config: Option<&HistogramConfig>,
) -> Result<String, HistogramError> {
    if records.is_empty() {
        return Err(HistogramError::EmptyRecords);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Generating histogram with {} bars", records.len());

    let longest = longest_duration(records.iter().copied()).unwrap_or(0.0);
    let plot_width = records.len() * config.bar_width;
    let width = (plot_width + 2 * MARGIN).max(MIN_WIDTH);
    let total_height = TITLE_HEIGHT + config.height + AXIS_HEIGHT;
    let baseline = TITLE_HEIGHT + config.height;

    let mut svg_content = String::new();

    svg_content.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, total_height, width, total_height
    ));

    svg_content.push_str(
        r#"<style>.bar:hover { stroke: black; stroke-width: 1; cursor: pointer; opacity: 0.9; }</style>"#,
    );

    svg_content.push_str(&format!(
        r#"<text x="{}" y="24" font-size="16" text-anchor="middle" font-weight="bold" font-family="sans-serif">{}</text>"#,
        width / 2,
        escape_xml(&config.title)
    ));

    for (i, record) in records.iter().enumerate() {
        let fraction = bar_fraction(record.duration_seconds(), longest);
        let bar_height = fraction * config.height as f64;
        let x = MARGIN + i * config.bar_width;
        let y = baseline as f64 - bar_height;

        svg_content.push_str(&format!(
            r#"<rect x="{}" y="{:.2}" width="{}" height="{:.2}" fill="{}" class="bar"><title>{}</title></rect>"#,
            x,
            y,
            config.bar_width.saturating_sub(1).max(1),
            bar_height,
            heat_color(fraction),
            escape_xml(&bar_tooltip(record))
        ));
    }

    // Baseline and scale
    svg_content.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
        MARGIN,
        baseline,
        MARGIN + plot_width,
        baseline
    ));
    svg_content.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="12" font-family="sans-serif">longest: {:.3}s, {} functions</text>"#,
        MARGIN,
        baseline + 20,
        longest,
        records.len()
    ));

    svg_content.push_str("</svg>");

    info!("Histogram generated successfully ({} bytes)", svg_content.len());
    Ok(svg_content)
}

/// Render a text histogram, one line per record
///
/// **Public** - used by the CLI `--histogram` view
///
/// # Arguments
/// * `records` - Records in display order
/// * `max_lines` - Stop after this many bars
/// * `config` - Bar width and colouring
pub fn generate_text_histogram(
    records: &[&BuildTimeRecord],
    max_lines: usize,
    config: &HistogramConfig,
) -> String {
    let longest = longest_duration(records.iter().copied()).unwrap_or(0.0);
    let mut lines = Vec::new();

    lines.push(format!("  {}", config.title));

    for record in records.iter().take(max_lines) {
        let fraction = bar_fraction(record.duration_seconds(), longest);
        let filled = (fraction * config.text_width as f64).round() as usize;
        // Non-zero durations always show at least one cell
        let filled = if fraction > 0.0 { filled.max(1) } else { 0 };
        let bar = "█".repeat(filled);

        let (color, reset) = if config.color {
            (ansi_color(fraction), "\x1b[0m")
        } else {
            ("", "")
        };

        lines.push(format!(
            "  {}{:<width$}{} {:>9.3}s  {}:{}  {}",
            color,
            bar,
            reset,
            record.duration_seconds(),
            record.path(),
            record.line_number(),
            record.function_name(),
            width = config.text_width
        ));
    }

    if records.len() > max_lines {
        lines.push(format!(
            "  (Showing {} of {} functions)",
            max_lines,
            records.len()
        ));
    }

    lines.join("\n")
}

/// Hover text for one bar
fn bar_tooltip(record: &BuildTimeRecord) -> String {
    format!(
        "{:.3}s {}:{} {}",
        record.duration_seconds(),
        record.path(),
        record.line_number(),
        record.function_name()
    )
}

fn heat_color(fraction: f64) -> &'static str {
    if fraction >= 0.75 {
        "rgb(220, 20, 60)" // Crimson
    } else if fraction >= 0.5 {
        "rgb(255, 140, 0)" // Dark Orange
    } else if fraction >= 0.25 {
        "rgb(255, 215, 0)" // Gold
    } else {
        "rgb(70, 130, 180)" // Steel Blue
    }
}

fn ansi_color(fraction: f64) -> &'static str {
    if fraction >= 0.75 {
        "\x1b[31;1m" // Red
    } else if fraction >= 0.5 {
        "\x1b[33m" // Yellow/Orange
    } else if fraction >= 0.25 {
        "\x1b[93m" // Bright yellow
    } else {
        "\x1b[34m" // Blue
    }
}

/// Swift signatures are full of `<`, `>` and `&`
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("func f<T>(a: T) -> Array<T> & \"x\""),
            "func f&lt;T&gt;(a: T) -&gt; Array&lt;T&gt; &amp; &quot;x&quot;"
        );
    }

    #[test]
    fn test_heat_color_bands() {
        assert_eq!(heat_color(1.0), "rgb(220, 20, 60)");
        assert_eq!(heat_color(0.1), "rgb(70, 130, 180)");
    }

    #[test]
    fn test_text_histogram_zero_duration_has_no_bar() {
        let slow = BuildTimeRecord::new(2.0, "/a.swift", "a()", 1);
        let instant = BuildTimeRecord::new(0.0, "/b.swift", "b()", 2);
        let tiny = BuildTimeRecord::new(0.001, "/c.swift", "c()", 3);
        let config = HistogramConfig::new().with_text_width(10);

        let text = generate_text_histogram(&[&slow, &instant, &tiny], 10, &config);
        let lines: Vec<&str> = text.lines().collect();

        assert!(!lines[2].contains('█'));
        assert_eq!(lines[3].matches('█').count(), 1);
    }

    #[test]
    fn test_svg_rejects_empty() {
        assert!(matches!(
            generate_histogram_svg(&[], None),
            Err(HistogramError::EmptyRecords)
        ));
    }

    #[test]
    fn test_text_histogram_bar_lengths() {
        let a = BuildTimeRecord::new(2.0, "/a.swift", "a()", 1);
        let b = BuildTimeRecord::new(1.0, "/b.swift", "b()", 2);
        let config = HistogramConfig::new().with_text_width(10);

        let text = generate_text_histogram(&[&a, &b], 10, &config);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains(&"█".repeat(10)));
        assert!(lines[2].contains(&format!("{} ", "█".repeat(5))));
        assert!(!lines[2].contains(&"█".repeat(6)));
    }
}
