//! Traits related to remote git forges
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    forge::{
        config::RemoteConfig,
        request::{CommentRequest, ForgeCommit, Issue, RemoveLabelRequest},
    },
    result::Result,
};

/// Remote operations the translation pipeline relies on. Every list call
/// returns a single page in the order the platform sends it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    async fn list_open_issues(&self, per_page: u8) -> Result<Vec<Issue>>;
    async fn list_branches(&self) -> Result<Vec<String>>;
    /// Returns `None` when the platform has no commit for `sha`.
    async fn get_commit(&self, sha: &str) -> Result<Option<ForgeCommit>>;
    /// Commit history reachable from `branch`, most recent first.
    async fn list_branch_commits(
        &self,
        branch: &str,
    ) -> Result<Vec<ForgeCommit>>;
    async fn create_issue_comment(&self, req: CommentRequest) -> Result<()>;
    async fn remove_issue_label(&self, req: RemoveLabelRequest) -> Result<()>;
}
