//! Manager that wraps forge implementations
use log::*;

use crate::{
    Result,
    forge::{
        config::RemoteConfig,
        request::{CommentRequest, ForgeCommit, Issue, RemoveLabelRequest},
        traits::Forge,
    },
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
        }
    }

    pub fn remote_config(&self) -> &RemoteConfig {
        &self.remote_config
    }

    pub fn owner(&self) -> &str {
        &self.remote_config.owner
    }

    pub fn repo(&self) -> &str {
        &self.remote_config.repo
    }

    pub async fn list_open_issues(&self, per_page: u8) -> Result<Vec<Issue>> {
        debug!(
            "listing open issues for {}/{}: per_page: {per_page}",
            self.owner(),
            self.repo()
        );
        self.forge.list_open_issues(per_page).await
    }

    pub async fn list_branches(&self) -> Result<Vec<String>> {
        self.forge.list_branches().await
    }

    pub async fn get_commit(&self, sha: &str) -> Result<Option<ForgeCommit>> {
        debug!("getting commit: {sha}");
        self.forge.get_commit(sha).await
    }

    pub async fn list_branch_commits(
        &self,
        branch: &str,
    ) -> Result<Vec<ForgeCommit>> {
        debug!("getting commits for branch: {branch}");
        self.forge.list_branch_commits(branch).await
    }

    pub async fn create_issue_comment(&self, req: CommentRequest) -> Result<()> {
        if self.remote_config.dry_run {
            warn!("dry_run: would create issue comment: req: {:#?}", req);
            return Ok(());
        }
        self.forge.create_issue_comment(req).await
    }

    pub async fn remove_issue_label(&self, req: RemoveLabelRequest) -> Result<()> {
        if self.remote_config.dry_run {
            warn!("dry_run: would remove issue label: req: {:#?}", req);
            return Ok(());
        }
        self.forge.remove_issue_label(req).await
    }
}
