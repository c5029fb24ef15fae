//! Implements the Forge trait for Github
use async_trait::async_trait;
use color_eyre::eyre::eyre;
use log::*;
use octocrab::{Octocrab, params};
use reqwest::StatusCode;

use crate::{
    error::MirrorError,
    forge::{
        config::RemoteConfig,
        request::{
            CommentRequest, ForgeCommit, Issue, IssueLabel, RemoveLabelRequest,
        },
        traits::Forge,
    },
    result::Result,
};

/// GitHub forge implementation using Octocrab. Reads go through an
/// anonymous client; comments and label removal use the configured token.
pub struct Github {
    config: RemoteConfig,
    reader: Octocrab,
    writer: Option<Octocrab>,
}

impl Github {
    /// Create GitHub clients for the API base URL derived from the remote
    /// host. The authenticated client is only built when a token is set.
    pub async fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = format!("{}://api.{}", config.scheme, config.host);

        let reader = Octocrab::builder().base_uri(base_uri.clone())?.build()?;

        let writer = if config.has_token() {
            let instance = Octocrab::builder()
                .personal_token(config.token.clone())
                .base_uri(base_uri)?
                .build()?;
            Some(instance)
        } else {
            None
        };

        Ok(Self {
            config,
            reader,
            writer,
        })
    }

    fn writer(&self, action: &str) -> Result<&Octocrab> {
        self.writer
            .as_ref()
            .ok_or_else(|| MirrorError::TokenRequired(action.into()).into())
    }
}

/// Normalize an issue from the API: a missing body becomes empty and label
/// names keep their order.
fn to_issue(
    number: u64,
    title: String,
    body: Option<String>,
    labels: Vec<String>,
) -> Issue {
    Issue {
        number,
        title,
        body: body.unwrap_or_default(),
        labels: labels.into_iter().map(|name| IssueLabel { name }).collect(),
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn list_open_issues(&self, per_page: u8) -> Result<Vec<Issue>> {
        let page = self
            .reader
            .issues(&self.config.owner, &self.config.repo)
            .list()
            .state(params::State::Open)
            .per_page(per_page)
            .send()
            .await?;

        let issues = page
            .items
            .into_iter()
            .map(|issue| {
                to_issue(
                    issue.number,
                    issue.title,
                    issue.body,
                    issue.labels.into_iter().map(|l| l.name).collect(),
                )
            })
            .collect::<Vec<Issue>>();

        debug!("fetched {} open issues", issues.len());

        Ok(issues)
    }

    async fn list_branches(&self) -> Result<Vec<String>> {
        let page = self
            .reader
            .repos(&self.config.owner, &self.config.repo)
            .list_branches()
            .send()
            .await?;

        Ok(page.items.into_iter().map(|b| b.name).collect())
    }

    async fn get_commit(&self, sha: &str) -> Result<Option<ForgeCommit>> {
        let result = self
            .reader
            .commits(&self.config.owner, &self.config.repo)
            .get(sha)
            .await;

        match result {
            Ok(commit) => Ok(Some(ForgeCommit {
                sha: commit.sha,
                message: commit.commit.message,
            })),
            // github answers 422 for shas that do not resolve to a commit
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND
                    || source.status_code
                        == StatusCode::UNPROCESSABLE_ENTITY =>
            {
                info!("no commit found for sha: {sha}");
                Ok(None)
            }
            Err(err) => {
                let msg = format!(
                    "encountered error getting commit for sha: {sha}: {err}"
                );
                error!("{msg}");
                Err(eyre!(msg))
            }
        }
    }

    async fn list_branch_commits(
        &self,
        branch: &str,
    ) -> Result<Vec<ForgeCommit>> {
        let page = self
            .reader
            .repos(&self.config.owner, &self.config.repo)
            .list_commits()
            .sha(branch)
            .send()
            .await?;

        let commits = page
            .items
            .into_iter()
            .map(|c| ForgeCommit {
                sha: c.sha,
                message: c.commit.message,
            })
            .collect::<Vec<ForgeCommit>>();

        debug!("fetched {} commits from branch {branch}", commits.len());

        Ok(commits)
    }

    async fn create_issue_comment(&self, req: CommentRequest) -> Result<()> {
        self.writer("comment on issues")?
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(req.issue_number, req.body)
            .await?;

        Ok(())
    }

    async fn remove_issue_label(&self, req: RemoveLabelRequest) -> Result<()> {
        self.writer("remove issue labels")?
            .issues(&self.config.owner, &self.config.repo)
            .remove_label(req.issue_number, req.label)
            .await?;

        Ok(())
    }
}
