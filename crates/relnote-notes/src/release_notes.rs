//! Grouping parsed commits into release note sections

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::comment::is_omitted;
use crate::types::{CommitRecord, PullRequestRef, TypeCategory};

/// Title used for commits whose type could not be determined
pub const UNCATEGORIZED_TITLE: &str = "Unclassified";

/// Parsed commits grouped by type category
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReleaseNotes {
    /// Non-empty sections, breaking changes first
    pub sections: Vec<Section>,
    /// Commits left out because their note was an omission keyword
    pub omitted: usize,
}

/// A section of release notes
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Category, `None` for commits without a type
    pub category: Option<TypeCategory>,
    /// Entries in commit order
    pub entries: Vec<NoteEntry>,
}

/// A single line of release notes
#[derive(Debug, Clone, Serialize)]
pub struct NoteEntry {
    /// Release note when present, otherwise the stripped subject
    pub text: String,
    /// Pull request the change came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr: Option<PullRequestRef>,
}

impl ReleaseNotes {
    /// Group records by category.
    ///
    /// Records whose note is an omission keyword are skipped. When several
    /// commits share a pull request only the first one is listed.
    #[instrument(skip_all)]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CommitRecord>,
    {
        let mut groups: BTreeMap<Option<TypeCategory>, Vec<NoteEntry>> = BTreeMap::new();
        let mut seen_prs = HashSet::new();
        let mut omitted = 0;

        for record in records {
            if record.note.as_deref().is_some_and(|n| is_omitted(n.trim())) {
                omitted += 1;
                continue;
            }

            if let Some(pr) = &record.pr {
                if !seen_prs.insert((pr.owner.clone(), pr.repo.clone(), pr.number)) {
                    continue;
                }
            }

            let text = record
                .note
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(&record.subject)
                .to_string();

            groups.entry(record.category()).or_default().push(NoteEntry {
                text,
                pr: record.pr.clone(),
            });
        }

        // BTreeMap orders `None` first; uncategorized commits go last
        let uncategorized = groups.remove(&None);
        let mut sections: Vec<Section> = groups
            .into_iter()
            .map(|(category, entries)| Section {
                title: category
                    .map(|c| c.section_title())
                    .unwrap_or(UNCATEGORIZED_TITLE)
                    .to_string(),
                category,
                entries,
            })
            .collect();

        if let Some(entries) = uncategorized {
            sections.push(Section {
                title: UNCATEGORIZED_TITLE.to_string(),
                category: None,
                entries,
            });
        }

        debug!(sections = sections.len(), omitted, "release notes grouped");
        Self { sections, omitted }
    }

    /// Check if there is anything to show
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Format as markdown
    pub fn format_markdown(&self) -> String {
        let mut output = String::new();

        for section in &self.sections {
            output.push_str(&format!("## {}\n\n", section.title));
            for entry in &section.entries {
                // One bullet per note line; the PR goes on the first
                for (i, line) in entry_lines(&entry.text).into_iter().enumerate() {
                    match &entry.pr {
                        Some(pr) if i == 0 => output.push_str(&format!("- {} ({})\n", line, pr)),
                        _ => output.push_str(&format!("- {}\n", line)),
                    }
                }
            }
            output.push('\n');
        }

        output
    }
}

/// Split entry text into bullet lines, dropping a leading `* ` from each
fn entry_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix("* ").map(str::trim_start).unwrap_or(line))
        .collect();

    if lines.is_empty() {
        vec![text]
    } else {
        lines
    }
}
