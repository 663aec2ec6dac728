//! relnote Notes - Commit message parsing for release note tooling
//!
//! This crate turns free-form commit messages into structured records and
//! pulls release-note annotations out of pull request bodies.

pub mod comment;
pub mod note;
pub mod parser;
pub mod release_notes;
pub mod types;

pub use comment::{format_note_comment, NOTES_LEAD, NO_NOTES_BODY, OMIT_FROM_RELEASE_NOTES_KEYS};
pub use note::{extract_note, find_note_in_commit_body};
pub use parser::{parse_commit, CommitParser};
pub use release_notes::{ReleaseNotes, Section};
pub use types::{CommitRecord, CommitType, PullRequestRef, TypeCategory};
