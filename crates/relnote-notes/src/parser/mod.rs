//! Commit message parsing
//!
//! Recognized conventions:
//!
//! - `semantic: some description` sets the type and strips the prefix
//! - `some description (#99999)` sets the pull request and strips the suffix
//! - `Fixes #3333` in the subject sets the issue number
//! - `Merge pull request #99999 from branch` sets the pull request and branch
//! - `Backport of #99999` anywhere sets the pull request
//! - `This reverts commit <sha>.` in the body sets the revert hash
//! - a line starting with `BREAKING CHANGE` makes the type `breaking-change`

mod rules;

use std::sync::LazyLock;

pub use relnote_core::config::ParserConfig;
use tracing::trace;

use crate::types::CommitRecord;
use rules::{RuleContext, RULES};

static DEFAULT_PARSER: LazyLock<CommitParser> = LazyLock::new(CommitParser::new);

/// Parse a commit message with the built-in follow-set.
///
/// `default_owner` and `default_repo` name the repository that bare `#1234`
/// references point at.
///
/// # Panics
///
/// Panics if a pull request reference is found while `default_owner` or
/// `default_repo` is empty.
pub fn parse_commit(message: &str, default_owner: &str, default_repo: &str) -> CommitRecord {
    DEFAULT_PARSER.parse(message, default_owner, default_repo)
}

/// Rule-based commit message parser
#[derive(Debug, Clone, Default)]
pub struct CommitParser {
    config: ParserConfig,
}

impl CommitParser {
    /// Create a new parser with default configuration
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a commit message into a [`CommitRecord`]
    pub fn parse(&self, message: &str, default_owner: &str, default_repo: &str) -> CommitRecord {
        let (subject, body) = split_message(message);

        let mut record = CommitRecord::new(subject);
        if !body.is_empty() {
            record.body = Some(body.to_string());
        }

        let ctx = RuleContext {
            message,
            body,
            default_owner,
            default_repo,
            config: &self.config,
        };

        let mut record = RULES.iter().fold(record, |record, rule| {
            trace!(rule = rule.name, "applying rule");
            (rule.apply)(record, &ctx)
        });

        record.subject = record.subject.trim().to_string();
        record
    }
}

/// Split into subject and trimmed body.
///
/// The subject is only trimmed when the message has more than one line.
fn split_message(message: &str) -> (&str, &str) {
    match message.split_once('\n') {
        Some((subject, body)) => (subject.trim(), body.trim()),
        None => (message, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CommitType, PullRequestRef};

    fn parse(message: &str) -> CommitRecord {
        parse_commit(message, "electron", "electron")
    }

    fn electron_pr(number: u64) -> PullRequestRef {
        PullRequestRef::new("electron", "electron", number)
    }

    #[test]
    fn test_split_message() {
        assert_eq!(split_message("subject"), ("subject", ""));
        assert_eq!(split_message("  subject  "), ("  subject  ", ""));
        assert_eq!(
            split_message(" subject \n\n body line \n"),
            ("subject", "body line")
        );
        assert_eq!(split_message("subject\r\nbody"), ("subject", "body"));
    }

    #[test]
    fn test_parses_type_from_title() {
        let record = parse("fix: foo");
        assert_eq!(
            record,
            CommitRecord {
                original_subject: "fix: foo".to_string(),
                subject: "foo".to_string(),
                commit_type: Some(CommitType::Fix),
                ..Default::default()
            }
        );

        let record = parse("chore: foo");
        assert_eq!(record.commit_type, Some(CommitType::Chore));
        assert_eq!(record.subject, "foo");
        assert!(record.pr.is_none());
    }

    #[test]
    fn test_unknown_prefix_is_kept() {
        let record = parse("wip: foo");
        assert_eq!(record.subject, "wip: foo");
        assert_eq!(record.commit_type, None);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let record = parse("Feat: shiny");
        assert_eq!(record.commit_type, Some(CommitType::Feat));
        assert_eq!(record.subject, "shiny");
    }

    #[test]
    fn test_breaking_change_overrides_prefix() {
        let record = parse("chore: foo\nBREAKING CHANGE\n");
        assert_eq!(
            record,
            CommitRecord {
                original_subject: "chore: foo".to_string(),
                subject: "foo".to_string(),
                body: Some("BREAKING CHANGE".to_string()),
                commit_type: Some(CommitType::BreakingChange),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_breaking_change_is_case_sensitive() {
        let record = parse("feat: foo\n\nbreaking change: lowercase");
        assert_eq!(record.commit_type, Some(CommitType::Feat));
    }

    #[test]
    fn test_sets_pr_from_title() {
        let record = parse("fix: foo (#1234)");
        assert_eq!(
            record,
            CommitRecord {
                original_subject: "fix: foo (#1234)".to_string(),
                subject: "foo".to_string(),
                commit_type: Some(CommitType::Fix),
                pr: Some(electron_pr(1234)),
                original_pr: Some(electron_pr(1234)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_pr_number_zero_is_ignored() {
        let record = parse("fix: foo (#0)");
        assert!(record.pr.is_none());
        assert_eq!(record.subject, "foo (#0)");
    }

    #[test]
    fn test_merge_commit() {
        let record = parse("Merge pull request #42 from someone/feature-branch \n\nfeat: add thing");
        assert_eq!(record.pr.as_ref().map(|p| p.number), Some(42));
        assert_eq!(
            record.pr.as_ref().and_then(|p| p.branch.as_deref()),
            Some("someone/feature-branch")
        );
        // First reference, so the original carries the branch too
        assert_eq!(record.original_pr, record.pr);
    }

    #[test]
    fn test_merge_commit_after_suffix_keeps_original() {
        let record = parse("Merge pull request #42 from someone/branch (#7)");
        assert_eq!(record.pr.as_ref().map(|p| p.number), Some(42));
        assert_eq!(record.original_pr, Some(electron_pr(7)));
    }

    #[test]
    fn test_backport_of() {
        let record = parse("fix: crash on exit (#200)\n\nBackport of #100\n\nSee that PR for details.");
        assert_eq!(record.pr, Some(electron_pr(100)));
        assert_eq!(record.original_pr, Some(electron_pr(200)));
        assert_eq!(record.subject, "crash on exit");
    }

    #[test]
    fn test_closing_keyword_sets_issue_and_type() {
        let record = parse("Update the thing, fixes #55");
        assert_eq!(record.issue_number, Some(55));
        assert_eq!(record.commit_type, Some(CommitType::Fix));
    }

    #[test]
    fn test_closing_keyword_keeps_existing_type() {
        let record = parse("feat: add option for #55 (#60)");
        assert_eq!(record.issue_number, Some(55));
        assert_eq!(record.commit_type, Some(CommitType::Feat));
        assert_eq!(record.pr, Some(electron_pr(60)));
    }

    #[test]
    fn test_closing_keyword_is_case_sensitive() {
        let record = parse("feat: thing Closes #55");
        assert_eq!(record.issue_number, None);
    }

    #[test]
    fn test_references_end_at_ascii_word_boundary() {
        let record = parse("Update the thing, close #55ü");
        assert_eq!(record.issue_number, Some(55));
        assert_eq!(record.commit_type, Some(CommitType::Fix));

        let record = parse("feat: close #55ü");
        assert_eq!(record.issue_number, Some(55));
        assert_eq!(record.commit_type, Some(CommitType::Feat));

        let record = parse("feat: x\n\nBackport of #123é");
        assert_eq!(record.pr, Some(electron_pr(123)));

        let record = parse("fix: thing\n\nManual backport of electron/node#321ñ");
        assert_eq!(
            record.pr,
            Some(PullRequestRef::new("electron", "node", 321))
        );
    }

    #[test]
    fn test_markdown_issue_link_disambiguates_pr() {
        let record = parse(
            "Fix menu (#8952)\n\nFixes [#8952](https://github.com/electron/electron/issues/8952)",
        );
        assert_eq!(record.issue_number, Some(8952));
        assert_eq!(record.pr, None);
        assert_eq!(record.original_pr, None);
        assert_eq!(record.commit_type, Some(CommitType::Fix));
    }

    #[test]
    fn test_markdown_issue_link_keeps_different_pr() {
        let record = parse(
            "docs: menu (#9000)\n\nFixes [#8952](https://github.com/electron/electron/issues/8952)",
        );
        assert_eq!(record.issue_number, Some(8952));
        assert_eq!(record.pr, Some(electron_pr(9000)));
        assert_eq!(record.commit_type, Some(CommitType::Docs));
    }

    #[test]
    fn test_revert_hash() {
        let sha = "0123456789abcdef0123456789abcdef01234567";
        let record = parse(&format!(
            "Revert \"feat: foo\"\n\nThis reverts commit {}.",
            sha
        ));
        assert_eq!(record.revert_hash.as_deref(), Some(sha));
    }

    #[test]
    fn test_revert_requires_full_hash() {
        let record = parse("Revert \"feat: foo\"\n\nThis reverts commit 0123abc.");
        assert!(record.revert_hash.is_none());
    }

    #[test]
    fn test_backport_shorthand_followed_repo() {
        let record = parse("fix: thing\n\nManual backport of electron/node#321");
        assert_eq!(
            record.pr,
            Some(PullRequestRef::new("electron", "node", 321))
        );
        assert_eq!(record.original_pr, record.pr);
    }

    #[test]
    fn test_backport_shorthand_unfollowed_repo() {
        let record = parse("fix: thing\n\nBackport of nodejs/node#321");
        assert!(record.pr.is_none());
        assert!(record.original_pr.is_none());
    }

    #[test]
    fn test_shorthand_without_backport_word() {
        let record = parse("fix: thing\n\nSee electron/node#321");
        assert!(record.pr.is_none());
    }

    #[test]
    fn test_backport_url() {
        let record = parse(
            "fix: thing (#10)\n\nBACKPORT from https://github.com/electron/libchromiumcontent/pull/77",
        );
        assert_eq!(
            record.pr,
            Some(PullRequestRef::new("electron", "libchromiumcontent", 77))
        );
        assert_eq!(record.original_pr, Some(electron_pr(10)));
    }

    #[test]
    fn test_custom_follow_set() {
        let parser = CommitParser::with_config(
            ParserConfig::default().with_follow_repos(["nodejs/node"]),
        );
        let record = parser.parse("fix: thing\n\nBackport of nodejs/node#321", "acme", "app");
        assert_eq!(record.pr, Some(PullRequestRef::new("nodejs", "node", 321)));

        let record = parser.parse("fix: thing\n\nbackport electron/node#1", "acme", "app");
        assert!(record.pr.is_none());
    }

    #[test]
    fn test_legacy_chore_scope() {
        assert_eq!(
            parse("Chore(docs): update readme").commit_type,
            Some(CommitType::Docs)
        );
        assert_eq!(
            parse("chore(deps): bump").commit_type,
            Some(CommitType::Deps)
        );
        assert_eq!(
            parse("chore(release): 1.0").commit_type,
            Some(CommitType::Chore)
        );
    }

    #[test]
    fn test_legacy_fix_word() {
        assert_eq!(
            parse("Fixed a crash in the menu").commit_type,
            Some(CommitType::Fix)
        );
        assert_eq!(parse("Add fixture").commit_type, None);
    }

    #[test]
    fn test_legacy_heuristics_override_chore() {
        assert_eq!(
            parse("chore: fix typo").commit_type,
            Some(CommitType::Fix)
        );
        // Not applied once a more specific type is set
        assert_eq!(
            parse("feat: fix everything").commit_type,
            Some(CommitType::Feat)
        );
    }

    #[test]
    fn test_legacy_docs_tag() {
        assert_eq!(
            parse("[docs] clarify the api").commit_type,
            Some(CommitType::Doc)
        );
    }

    #[test]
    fn test_embedded_note() {
        let record = parse("feat: add API (#12)\n\nAdds the API.\nNotes: Added `app.foo()`.");
        assert_eq!(record.note.as_deref(), Some("Added `app.foo()`."));
    }

    #[test]
    fn test_embedded_note_only_comment_is_dropped() {
        let record = parse("feat: add API\n\nnotes: <!-- describe -->");
        assert!(record.note.is_none());
    }

    #[test]
    fn test_single_line_subject_is_not_pre_trimmed() {
        let record = parse("  plain subject  ");
        assert_eq!(record.original_subject, "  plain subject  ");
        assert_eq!(record.subject, "plain subject");
        assert!(record.body.is_none());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let message = "fix: foo (#1)\n\nBackport of #2\nNotes: bar";
        assert_eq!(parse(message), parse(message));
    }
}
