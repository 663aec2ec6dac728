use relnote_notes::{
    extract_note, format_note_comment, parse_commit, CommitRecord, CommitType, PullRequestRef,
    NOTES_LEAD, NO_NOTES_BODY,
};

const PR_BODY_WITH_EMBEDDED_COMMENT: &str = "Backport of #16875

See that PR for details.


Notes: <!-- Please add a one-line description for app developers to read in the release notes, or `no-notes` if no notes relevant to app developers. Examples and help on special cases: https://github.com/electron/clerk/blob/master/README.md#examples -->no-notes
";

const PR_BODY_WITH_BULLETS: &str = "#### Description of Change

Reworks the menu code.

#### Release Notes

Notes:
* Fixed a crash when closing a menu.
* Added `menu.popup({ positioningItem })`.
";

fn parse(message: &str) -> CommitRecord {
    parse_commit(message, "electron", "electron")
}

#[test]
fn comment_from_extracted_note_is_stable() {
    for body in [PR_BODY_WITH_EMBEDDED_COMMENT, PR_BODY_WITH_BULLETS, "", "no label"] {
        let first = format_note_comment(extract_note(body).as_deref());
        let second = format_note_comment(extract_note(body).as_deref());
        assert_eq!(first, second);
    }
}

#[test]
fn stripped_template_comment_renders_no_notes() {
    let note = extract_note(PR_BODY_WITH_EMBEDDED_COMMENT);
    assert_eq!(note.as_deref(), Some("no-notes"));
    assert_eq!(format_note_comment(note.as_deref()), NO_NOTES_BODY);
}

#[test]
fn bulleted_note_is_quoted_line_by_line() {
    let comment = format_note_comment(extract_note(PR_BODY_WITH_BULLETS).as_deref());
    assert_eq!(
        comment,
        format!(
            "{}\n\n> * Fixed a crash when closing a menu.\n> * Added `menu.popup({{ positioningItem }})`.",
            NOTES_LEAD
        )
    );
}

#[test]
fn every_known_prefix_sets_type_and_strips_subject() {
    for commit_type in CommitType::ALL {
        let message = format!("{}: subject", commit_type);
        let record = parse(&message);
        assert_eq!(record.commit_type, Some(commit_type), "{}", message);
        assert_eq!(record.subject, "subject", "{}", message);
        assert_eq!(record.original_subject, message);
    }
}

#[test]
fn semantic_fix_without_pr() {
    let record = parse("fix: foo");
    assert_eq!(record.original_subject, "fix: foo");
    assert_eq!(record.subject, "foo");
    assert_eq!(record.commit_type, Some(CommitType::Fix));
    assert!(record.pr.is_none());
    assert!(record.original_pr.is_none());
}

#[test]
fn breaking_change_trailer_wins() {
    let record = parse("chore: foo\nBREAKING CHANGE\n");
    assert_eq!(record.commit_type, Some(CommitType::BreakingChange));
    assert_eq!(record.body.as_deref(), Some("BREAKING CHANGE"));
}

#[test]
fn trailing_pr_number_sets_both_references() {
    let record = parse("fix: foo (#1234)");
    let expected = PullRequestRef::new("electron", "electron", 1234);
    assert_eq!(record.pr, Some(expected.clone()));
    assert_eq!(record.original_pr, Some(expected));
}

#[test]
fn unfollowed_shorthand_backport_is_ignored() {
    for slug in ["nodejs/node", "owner/repo", "electron/website"] {
        let record = parse(&format!("fix: thing\n\nBackport of {}#123", slug));
        assert!(record.pr.is_none(), "{}", slug);
        assert!(record.original_pr.is_none(), "{}", slug);
    }
}

#[test]
fn record_serializes_like_the_fixture() {
    let json = serde_json::to_value(parse("fix: foo (#1234)")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "originalSubject": "fix: foo (#1234)",
            "subject": "foo",
            "type": "fix",
            "originalPr": {"number": 1234, "owner": "electron", "repo": "electron"},
            "pr": {"number": 1234, "owner": "electron", "repo": "electron"},
        })
    );
}

#[test]
fn backport_after_issue_link_becomes_the_original_pr() {
    let record = parse(
        "fix: a (#5)\n\nFixes [#5](https://github.com/electron/electron/issues/5)\nbackport electron/node#9",
    );
    let node_pr = PullRequestRef::new("electron", "node", 9);
    assert_eq!(record.issue_number, Some(5));
    assert_eq!(record.commit_type, Some(CommitType::Fix));
    assert_eq!(record.subject, "a");
    assert_eq!(record.pr, Some(node_pr.clone()));
    assert_eq!(record.original_pr, Some(node_pr));
}
