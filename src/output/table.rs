//! Text table view of the records, for the terminal.

use crate::view::ViewState;

/// Longest path shown before it is shortened from the left
const MAX_PATH_CHARS: usize = 60;

/// Format the view's rows as a table
///
/// **Public** - used by the inspect command
///
/// Selected rows are marked with `*`. At most `limit` rows are printed.
pub fn format_table(view: &ViewState, limit: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "   {:>5}  {:>10}  {:<width$}  {:>6}  {}",
        "#",
        "Time",
        "Path",
        "Line",
        "Function",
        width = MAX_PATH_CHARS
    ));
    lines.push(format!("   {}", "-".repeat(MAX_PATH_CHARS + 40)));

    for (row, record) in view.rows().enumerate().take(limit) {
        let marker = if view.is_selected(row) { '*' } else { ' ' };
        lines.push(format!(
            " {} {:>5}  {:>9.3}s  {:<width$}  {:>6}  {}",
            marker,
            row,
            record.duration_seconds(),
            shorten_path(record.path()),
            record.line_number(),
            record.function_name(),
            width = MAX_PATH_CHARS
        ));
    }

    if view.len() > limit {
        lines.push(format!("   (Showing {} of {} rows)", limit, view.len()));
    }

    lines.join("\n")
}

/// Keep the end of long paths, where the file name is
fn shorten_path(path: &str) -> String {
    let chars = path.chars().count();
    if chars <= MAX_PATH_CHARS {
        return path.to_string();
    }

    let tail: String = path.chars().skip(chars - (MAX_PATH_CHARS - 3)).collect();
    format!("...{}", tail)
}
