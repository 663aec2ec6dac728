//! Pull request comment rendering

/// Heading placed above quoted release notes
pub const NOTES_LEAD: &str = "**Release Notes Persisted**";

/// Comment body used when a PR has no release notes
pub const NO_NOTES_BODY: &str = "**No Release Notes**";

/// Note values that mean "nothing to show". Compared case-sensitively.
pub const OMIT_FROM_RELEASE_NOTES_KEYS: [&str; 8] = [
    "blank",
    "empty",
    "no notes",
    "no",
    "no-notes",
    "no_notes",
    "none",
    "nothing",
];

/// Render a note as the text of a PR comment.
///
/// Non-empty lines are block-quoted under [`NOTES_LEAD`]. Missing notes,
/// omission keywords and notes made only of empty lines render as
/// [`NO_NOTES_BODY`].
pub fn format_note_comment(note: Option<&str>) -> String {
    let Some(note) = note.filter(|n| !n.is_empty() && !is_omitted(n)) else {
        return NO_NOTES_BODY.to_string();
    };

    let quoted: Vec<String> = note
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| format!("> {}", line))
        .collect();

    if quoted.is_empty() {
        return NO_NOTES_BODY.to_string();
    }

    format!("{}\n\n{}", NOTES_LEAD, quoted.join("\n"))
}

/// Check whether a note is one of the omission keywords
pub(crate) fn is_omitted(note: &str) -> bool {
    OMIT_FROM_RELEASE_NOTES_KEYS.contains(&note)
}
