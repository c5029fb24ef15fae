#[derive(Debug, Clone, PartialEq, Eq)]
/// Label attached to an issue.
pub struct IssueLabel {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Open issue normalized from the forge response. A missing body is stored
/// as an empty string.
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub labels: Vec<IssueLabel>,
}

impl Issue {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a normalized commit returned from any forge
pub struct ForgeCommit {
    pub sha: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to post a comment on an issue.
pub struct CommentRequest {
    pub issue_number: u64,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to remove a single label from an issue.
pub struct RemoveLabelRequest {
    pub issue_number: u64,
    pub label: String,
}
