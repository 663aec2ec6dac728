//! Commit message rules
//!
//! Each rule takes the record built so far and returns the next one. Rules
//! run in [`RULES`] order; later rules may override earlier ones.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use relnote_core::config::ParserConfig;

use crate::note::find_note_in_commit_body;
use crate::types::{CommitRecord, CommitType, PullRequestRef};

/// `some description (#1234)`
static PR_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\s\(#([0-9]+)\)$").expect("Invalid regex"));

/// `type: description`; the hyphen admits `breaking-change:`
static SEMANTIC_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_-]+):\s(.*)$").expect("Invalid regex"));

/// GitHub merge commit subject
static MERGE_PR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge pull request #([0-9]+) from (.*)$").expect("Invalid regex")
});

// Reference patterns use ASCII word boundaries.

/// Backport bot annotation
static BACKPORT_OF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)Backport of #([0-9]+)(?-u:\b)").expect("Invalid regex")
});

/// https://help.github.com/articles/closing-issues-using-keywords/
static CLOSING_KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u:\b)(?:close|closes|closed|fix|fixes|fixed|resolve|resolves|resolved|for)\s#([0-9]+)(?-u:\b)",
    )
    .expect("Invalid regex")
});

/// `Fixes [#8952](https://github.com/electron/electron/issues/8952)`
static MARKDOWN_ISSUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Fixes \[#([0-9]+)\]\(https://github\.com/[A-Za-z0-9_]+/[A-Za-z0-9_]+/issues/[0-9]+\)",
    )
    .expect("Invalid regex")
});

/// https://www.conventionalcommits.org/
static BREAKING_CHANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*BREAKING CHANGE").expect("Invalid regex"));

/// Body written by `git revert`
static REVERT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)This reverts commit ([a-f0-9]{40})\.").expect("Invalid regex")
});

/// `owner/repo#1234`
static SHORTHAND_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([A-Za-z0-9_]+)/([A-Za-z0-9_]+)#([0-9]+)(?-u:\b)").expect("Invalid regex")
});

/// `https://github.com/owner/repo/pull/1234`
static PULL_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://github\.com/([A-Za-z0-9_]+)/([A-Za-z0-9_]+)/pull/([0-9]+)")
        .expect("Invalid regex")
});

/// `chore(scope):`, matched against the lowercased message
static LEGACY_CHORE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)chore\(([a-z0-9_]+)\):").expect("Invalid regex"));

static LEGACY_FIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:fix|fixes|fixed)\b").expect("Invalid regex"));

static LEGACY_DOCS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:docs|doc)\]").expect("Invalid regex"));

/// Inputs shared by every rule for one message
pub(crate) struct RuleContext<'a> {
    /// The full, unmodified commit message
    pub message: &'a str,
    /// Trimmed text after the first line; empty when there is none
    pub body: &'a str,
    pub default_owner: &'a str,
    pub default_repo: &'a str,
    pub config: &'a ParserConfig,
}

impl RuleContext<'_> {
    fn default_pr(&self, number: u64) -> PullRequestRef {
        PullRequestRef::new(self.default_owner, self.default_repo, number)
    }
}

/// A single named transformation of the record
pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: fn(CommitRecord, &RuleContext<'_>) -> CommitRecord,
}

/// All rules, in application order
pub(crate) const RULES: &[Rule] = &[
    Rule { name: "embedded-note", apply: embedded_note },
    Rule { name: "pr-suffix", apply: pr_suffix },
    Rule { name: "semantic-prefix", apply: semantic_prefix },
    Rule { name: "merge-commit", apply: merge_commit },
    Rule { name: "backport-of", apply: backport_of },
    Rule { name: "closing-keyword", apply: closing_keyword },
    Rule { name: "markdown-issue-link", apply: markdown_issue_link },
    Rule { name: "breaking-change", apply: breaking_change },
    Rule { name: "revert", apply: revert },
    Rule { name: "backport-shorthand", apply: backport_shorthand },
    Rule { name: "backport-url", apply: backport_url },
    Rule { name: "legacy-type", apply: legacy_type },
];

/// Point `record.pr` at a new pull request.
///
/// `original_pr` is pinned to the first reference ever assigned. When it was
/// cleared after `pr` had been set, it picks up the current `pr` rather than
/// the new one.
///
/// # Panics
///
/// Panics if owner or repo is empty or the number is zero. Rules only pass
/// caller-supplied defaults or non-empty regex captures with non-zero numbers.
pub(crate) fn set_pull_request(mut record: CommitRecord, pr: PullRequestRef) -> CommitRecord {
    assert!(
        !pr.owner.is_empty() && !pr.repo.is_empty() && pr.number != 0,
        "pull request reference requires owner, repo and number: {:?}",
        pr
    );

    if record.original_pr.is_none() {
        record.original_pr = record.pr.clone();
    }

    record.pr = Some(pr);

    if record.original_pr.is_none() {
        record.original_pr = record.pr.clone();
    }

    record
}

/// Digits captured from a reference; zero and overflow are not references
fn parse_number(digits: &str) -> Option<u64> {
    digits.parse().ok().filter(|n| *n != 0)
}

fn embedded_note(mut record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    if ctx.body.is_empty() {
        return record;
    }

    if let Some(note) = find_note_in_commit_body(ctx.body).filter(|n| !n.is_empty()) {
        debug!(rule = "embedded-note", "found note in commit body");
        record.note = Some(note);
    }
    record
}

fn pr_suffix(mut record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    let Some((rest, number)) = PR_SUFFIX_REGEX.captures(&record.subject).and_then(|caps| {
        Some((caps[1].to_string(), parse_number(&caps[2])?))
    }) else {
        return record;
    };

    debug!(rule = "pr-suffix", number, "subject ends with pull request number");
    record = set_pull_request(record, ctx.default_pr(number));
    record.subject = rest;
    record
}

fn semantic_prefix(mut record: CommitRecord, _ctx: &RuleContext<'_>) -> CommitRecord {
    let Some((commit_type, rest)) = SEMANTIC_PREFIX_REGEX
        .captures(&record.subject)
        .and_then(|caps| {
            let commit_type = caps[1].to_lowercase().parse::<CommitType>().ok()?;
            Some((commit_type, caps[2].to_string()))
        })
    else {
        return record;
    };

    debug!(rule = "semantic-prefix", %commit_type, "semantic commit prefix");
    record.commit_type = Some(commit_type);
    record.subject = rest;
    record
}

fn merge_commit(mut record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    let Some((number, branch)) = MERGE_PR_REGEX.captures(&record.subject).and_then(|caps| {
        Some((parse_number(&caps[1])?, caps[2].trim().to_string()))
    }) else {
        return record;
    };

    debug!(rule = "merge-commit", number, branch = %branch, "merge commit subject");

    // The first reference ever set is the merged PR itself, branch included.
    let first_reference = record.pr.is_none() && record.original_pr.is_none();

    record = set_pull_request(record, ctx.default_pr(number));
    if let Some(pr) = record.pr.as_mut() {
        pr.branch = Some(branch.clone());
    }
    if first_reference {
        if let Some(original) = record.original_pr.as_mut() {
            original.branch = Some(branch);
        }
    }
    record
}

fn backport_of(record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    let Some(number) = BACKPORT_OF_REGEX
        .captures(ctx.message)
        .and_then(|caps| parse_number(&caps[1]))
    else {
        return record;
    };

    debug!(rule = "backport-of", number, "backport annotation");
    set_pull_request(record, ctx.default_pr(number))
}

fn closing_keyword(mut record: CommitRecord, _ctx: &RuleContext<'_>) -> CommitRecord {
    let Some(number) = CLOSING_KEYWORD_REGEX
        .captures(&record.subject)
        .and_then(|caps| parse_number(&caps[1]))
    else {
        return record;
    };

    debug!(rule = "closing-keyword", number, "subject closes an issue");
    record.issue_number = Some(number);
    record.commit_type.get_or_insert(CommitType::Fix);
    record
}

fn markdown_issue_link(mut record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    if record.issue_number.is_some() {
        return record;
    }

    let Some(number) = MARKDOWN_ISSUE_REGEX
        .captures(ctx.message)
        .and_then(|caps| parse_number(&caps[1]))
    else {
        return record;
    };

    debug!(rule = "markdown-issue-link", number, "markdown issue link");
    record.issue_number = Some(number);

    // Same number as the PR means the reference was really the issue
    if record.pr.as_ref().is_some_and(|pr| pr.number == number) {
        record.pr = None;
    }
    if record.original_pr.as_ref().is_some_and(|pr| pr.number == number) {
        record.original_pr = None;
    }

    record.commit_type.get_or_insert(CommitType::Fix);
    record
}

fn breaking_change(mut record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    if BREAKING_CHANGE_REGEX.is_match(ctx.message) {
        debug!(rule = "breaking-change", "breaking change trailer");
        record.commit_type = Some(CommitType::BreakingChange);
    }
    record
}

fn revert(mut record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    if let Some(caps) = REVERT_REGEX.captures(ctx.body) {
        debug!(rule = "revert", hash = &caps[1], "revert commit");
        record.revert_hash = Some(caps[1].to_string());
    }
    record
}

fn backport_shorthand(record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    follow_backport(record, ctx, &SHORTHAND_REF_REGEX, "backport-shorthand")
}

fn backport_url(record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    follow_backport(record, ctx, &PULL_URL_REGEX, "backport-url")
}

/// Manual backports that name the original PR by owner, repo and number.
/// Only the first reference in the message is considered.
fn follow_backport(
    record: CommitRecord,
    ctx: &RuleContext<'_>,
    reference: &Regex,
    rule: &'static str,
) -> CommitRecord {
    if !ctx.message.to_lowercase().contains("backport") {
        return record;
    }

    let Some(caps) = reference.captures(ctx.message) else {
        return record;
    };
    let (owner, repo) = (&caps[1], &caps[2]);

    if !ctx.config.follows(owner, repo) {
        debug!(rule, owner, repo, "ignoring backport from unfollowed repository");
        return record;
    }

    let Some(number) = parse_number(&caps[3]) else {
        return record;
    };

    debug!(rule, owner, repo, number, "cross-repository backport");
    set_pull_request(record, PullRequestRef::new(owner, repo, number))
}

/// Pre-semantic commits: guess a type from the wording
fn legacy_type(mut record: CommitRecord, ctx: &RuleContext<'_>) -> CommitRecord {
    if !matches!(record.commit_type, None | Some(CommitType::Chore)) {
        return record;
    }

    let message = ctx.message.to_lowercase();

    let guessed = if let Some(caps) = LEGACY_CHORE_REGEX.captures(&message) {
        // e.g. 'Chore(docs): description'
        Some(caps[1].parse().unwrap_or(CommitType::Chore))
    } else if LEGACY_FIX_REGEX.is_match(&message) {
        Some(CommitType::Fix)
    } else if LEGACY_DOCS_REGEX.is_match(&message) {
        Some(CommitType::Doc)
    } else {
        None
    };

    if let Some(commit_type) = guessed {
        debug!(rule = "legacy-type", %commit_type, "legacy type heuristic");
        record.commit_type = Some(commit_type);
    }
    record
}
