//! Output formatting utilities

use console::style;

use relnote_notes::CommitRecord;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Render a parsed commit as indented text lines
pub fn record_lines(record: &CommitRecord) -> Vec<String> {
    let kind = record
        .commit_type
        .map(|t| style(t.as_str()).cyan().to_string())
        .unwrap_or_else(|| style("untyped").dim().to_string());

    let mut lines = vec![format!("{} {}", kind, header(&record.subject))];

    if record.original_subject.trim() != record.subject {
        lines.push(key_value("original subject", &record.original_subject));
    }
    if let Some(pr) = &record.pr {
        let branch = pr
            .branch
            .as_deref()
            .map(|b| format!(" from {}", b))
            .unwrap_or_default();
        lines.push(key_value("pr", &format!("{}{}", pr, branch)));
    }
    if let Some(original) = &record.original_pr {
        if record.pr.as_ref() != Some(original) {
            lines.push(key_value("original pr", &original.to_string()));
        }
    }
    if let Some(issue) = record.issue_number {
        lines.push(key_value("issue", &format!("#{}", issue)));
    }
    if let Some(hash) = &record.revert_hash {
        lines.push(key_value("reverts", hash));
    }
    if let Some(note) = &record.note {
        for (i, line) in note.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let key = if i == 0 { "note" } else { "    " };
            lines.push(key_value(key, line));
        }
    }

    lines
}
