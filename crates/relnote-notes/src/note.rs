//! Release note extraction
//!
//! A note is introduced by a `Notes:` label, either inline
//! (`Notes: Fixed a crash.`) or followed by a bulleted block:
//!
//! ```text
//! Notes:
//! * Fixed a crash.
//! * Added an API.
//! ```
//!
//! PR bodies and commit bodies are matched slightly differently, see
//! [`extract_note`] and [`find_note_in_commit_body`].

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// `Notes: text` on any line of a PR body
static PR_ONELINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?imR)^notes: (.+?)$").expect("Invalid regex"));

/// `Notes:` alone on a line, followed by `*` bullets
static PR_MULTILINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?imR)^notes:((?:\r?\n\*.+$)+)").expect("Invalid regex"));

/// `Notes: text` at the start of the body or right after a line break
static COMMIT_ONELINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\r?\n|^)notes: ([^\r\n]+?)(?:\r?\n|$)").expect("Invalid regex")
});

/// Bulleted block after a `Notes:` line that follows a line break
static COMMIT_MULTILINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\r?\nNotes:\r?\n((?:\*[^\r\n]+(?:\r?\n|$))+)").expect("Invalid regex")
});

/// HTML comments left behind by PR templates
static HTML_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?R)<!--.*?-->").expect("Invalid regex"));

/// Extract the release note from a pull request body.
///
/// The inline form wins over the bulleted form. Template comments are
/// removed and the result is trimmed; an empty result counts as no note.
pub fn extract_note(body: &str) -> Option<String> {
    let captured = capture(body, &PR_ONELINE_REGEX, &PR_MULTILINE_REGEX)?;
    let note = strip_html_comments(captured).trim().to_string();

    if note.is_empty() {
        trace!("note label present but empty after stripping comments");
        None
    } else {
        Some(note)
    }
}

/// Extract the release note embedded in a commit body.
///
/// Unlike [`extract_note`] the result is returned untrimmed, and may be
/// empty when the captured text was nothing but a template comment.
pub fn find_note_in_commit_body(body: &str) -> Option<String> {
    let captured = capture(body, &COMMIT_ONELINE_REGEX, &COMMIT_MULTILINE_REGEX)?;
    Some(strip_html_comments(captured))
}

fn capture<'a>(text: &'a str, oneline: &Regex, multiline: &Regex) -> Option<&'a str> {
    let first_group = |re: &Regex| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
    };

    first_group(oneline).or_else(|| first_group(multiline))
}

fn strip_html_comments(text: &str) -> String {
    HTML_COMMENT_REGEX.replace_all(text, "").into_owned()
}
