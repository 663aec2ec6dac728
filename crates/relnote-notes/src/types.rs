//! Commit record types

use serde::{Deserialize, Serialize};

/// Structured metadata extracted from a single commit message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    /// First line of the message, before any rule touched it
    pub original_subject: String,
    /// First line with recognized prefixes and suffixes stripped
    pub subject: String,
    /// Everything after the first line, trimmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Release note embedded in the body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Change type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub commit_type: Option<CommitType>,
    /// Pull request this commit belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr: Option<PullRequestRef>,
    /// First pull request reference ever assigned to `pr`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_pr: Option<PullRequestRef>,
    /// Issue closed by this commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<u64>,
    /// Hash of the commit this one reverts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revert_hash: Option<String>,
}

impl CommitRecord {
    /// Start a record from the raw first line
    pub fn new(original_subject: impl Into<String>) -> Self {
        let original_subject = original_subject.into();
        Self {
            subject: original_subject.clone(),
            original_subject,
            ..Default::default()
        }
    }

    /// Category of the commit type, if a type was detected
    pub fn category(&self) -> Option<TypeCategory> {
        self.commit_type.map(|t| t.category())
    }
}

/// Reference to a pull request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub number: u64,
    /// Source branch, known only for merge commits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl PullRequestRef {
    /// Create a reference without a branch
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
            branch: None,
        }
    }
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Change type vocabulary
///
/// The set is closed: semantic prefixes outside it are left in the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitType {
    /// Breaking change
    BreakingChange,
    /// Documentation (short form)
    Doc,
    /// Documentation
    Docs,
    /// New feature (short form)
    Feat,
    /// New feature
    Feature,
    /// Bug fix
    Fix,
    Spec,
    Build,
    Test,
    Chore,
    Deps,
    Refactor,
    Tools,
    Vendor,
    Perf,
    Style,
    Ci,
}

impl CommitType {
    /// Every known type, in vocabulary order
    pub const ALL: [CommitType; 17] = [
        Self::BreakingChange,
        Self::Doc,
        Self::Docs,
        Self::Feat,
        Self::Feature,
        Self::Fix,
        Self::Spec,
        Self::Build,
        Self::Test,
        Self::Chore,
        Self::Deps,
        Self::Refactor,
        Self::Tools,
        Self::Vendor,
        Self::Perf,
        Self::Style,
        Self::Ci,
    ];

    /// The lowercase tag as written in commit messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BreakingChange => "breaking-change",
            Self::Doc => "doc",
            Self::Docs => "docs",
            Self::Feat => "feat",
            Self::Feature => "feature",
            Self::Fix => "fix",
            Self::Spec => "spec",
            Self::Build => "build",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Deps => "deps",
            Self::Refactor => "refactor",
            Self::Tools => "tools",
            Self::Vendor => "vendor",
            Self::Perf => "perf",
            Self::Style => "style",
            Self::Ci => "ci",
        }
    }

    /// Release-note category this type belongs to
    pub fn category(&self) -> TypeCategory {
        match self {
            Self::BreakingChange => TypeCategory::Breaking,
            Self::Doc | Self::Docs => TypeCategory::Documentation,
            Self::Feat | Self::Feature => TypeCategory::Feature,
            Self::Fix => TypeCategory::Fix,
            _ => TypeCategory::Other,
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    /// Exact match against the lowercase vocabulary; callers lowercase first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

/// Grouping of commit types used when rendering release notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Breaking,
    Feature,
    Fix,
    Documentation,
    Other,
}

impl TypeCategory {
    /// Section heading for this category
    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Breaking => "Breaking Changes",
            Self::Feature => "Features",
            Self::Fix => "Fixes",
            Self::Documentation => "Documentation",
            Self::Other => "Other Changes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_type_from_str() {
        assert_eq!("feat".parse::<CommitType>().unwrap(), CommitType::Feat);
        assert_eq!(
            "breaking-change".parse::<CommitType>().unwrap(),
            CommitType::BreakingChange
        );
        assert!("unknown".parse::<CommitType>().is_err());
        // Lowercasing is the caller's job
        assert!("Fix".parse::<CommitType>().is_err());
    }

    #[test]
    fn test_vocabulary_round_trips_through_as_str() {
        for t in CommitType::ALL {
            assert_eq!(t.as_str().parse::<CommitType>(), Ok(t));
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(CommitType::Docs.category(), TypeCategory::Documentation);
        assert_eq!(CommitType::Feature.category(), TypeCategory::Feature);
        assert_eq!(CommitType::Vendor.category(), TypeCategory::Other);
        assert_eq!(
            CommitType::BreakingChange.category(),
            TypeCategory::Breaking
        );
    }

    #[test]
    fn test_record_serializes_camel_case_without_unset_fields() {
        let mut record = CommitRecord::new("fix: foo (#1234)");
        record.subject = "foo".to_string();
        record.commit_type = Some(CommitType::Fix);
        record.pr = Some(PullRequestRef::new("electron", "electron", 1234));
        record.original_pr = record.pr.clone();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "originalSubject": "fix: foo (#1234)",
                "subject": "foo",
                "type": "fix",
                "pr": {"owner": "electron", "repo": "electron", "number": 1234},
                "originalPr": {"owner": "electron", "repo": "electron", "number": 1234},
            })
        );
    }

    #[test]
    fn test_pull_request_display() {
        let pr = PullRequestRef::new("electron", "node", 42);
        assert_eq!(pr.to_string(), "electron/node#42");
    }
}
