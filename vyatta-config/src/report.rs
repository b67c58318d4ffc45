use colored::Colorize;
use vyatta_config_core::{format_summary, format_text, DiffEntry};

/// Render diff entries for terminal output.
pub fn render_text(entries: &[DiffEntry]) -> String {
    if entries.is_empty() {
        return "no differences".dimmed().to_string();
    }

    format_text(entries)
        .lines()
        .map(|line| {
            if line.starts_with('+') {
                line.green().to_string()
            } else if line.starts_with('-') {
                line.red().to_string()
            } else if line.starts_with('~') {
                line.yellow().to_string()
            } else if line.starts_with('!') {
                line.magenta().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(entries: &[DiffEntry]) -> String {
    format_summary(entries).cyan().to_string()
}

/// Count entries that represent an actual difference.
pub fn count_changes(entries: &[DiffEntry]) -> usize {
    entries
        .iter()
        .filter(|entry| !matches!(entry, DiffEntry::Identical { .. }))
        .count()
}
