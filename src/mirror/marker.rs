use log::*;

use crate::{
    forge::{
        manager::ForgeManager,
        request::{CommentRequest, RemoveLabelRequest},
    },
    result::Result,
};

/// Request for [`mark_issue_as_translated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkIssueRequest {
    pub issue_number: u64,
    pub translation_commit_hash: String,
    /// Tracking label removed once the comment is posted.
    pub label: String,
}

/// Comment body recorded on a translated issue.
pub fn translation_comment(translation_commit_hash: &str) -> String {
    format!("Translation commit hash: `{translation_commit_hash}`")
}

/// Post the translation commit hash on the issue, then remove its tracking
/// label. A failing label removal leaves the comment in place.
pub async fn mark_issue_as_translated(
    forge: &ForgeManager,
    req: MarkIssueRequest,
) -> Result<()> {
    forge
        .create_issue_comment(CommentRequest {
            issue_number: req.issue_number,
            body: translation_comment(&req.translation_commit_hash),
        })
        .await?;

    forge
        .remove_issue_label(RemoveLabelRequest {
            issue_number: req.issue_number,
            label: req.label.clone(),
        })
        .await?;

    info!(
        "marked issue #{} as translated by {}: removed label {}",
        req.issue_number, req.translation_commit_hash, req.label
    );

    Ok(())
}
