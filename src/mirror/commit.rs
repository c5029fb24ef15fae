use log::*;

use crate::{
    error::MirrorError,
    forge::{config::DEFAULT_BRANCH, manager::ForgeManager},
    result::Result,
};

/// Request for [`find_translation_commit_hash`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCommitRequest {
    pub translation_branch: String,
    pub original_commit_hash: String,
    /// Branch that carries the original commits. Defaults to `main`.
    pub default_branch: String,
}

impl TranslationCommitRequest {
    pub fn new(
        translation_branch: impl Into<String>,
        original_commit_hash: impl Into<String>,
    ) -> Self {
        Self {
            translation_branch: translation_branch.into(),
            original_commit_hash: original_commit_hash.into(),
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }

    pub fn with_default_branch(
        mut self,
        default_branch: impl Into<String>,
    ) -> Self {
        self.default_branch = default_branch.into();
        self
    }
}

/// Find the commit on the translation branch that translates the original
/// commit.
///
/// When the translation branch is the default branch the original hash is
/// returned without contacting the forge. Otherwise the first commit of the
/// branch history whose message starts with the original commit's message
/// wins. `Ok(None)` means no translation commit exists yet; a missing
/// original commit is an [`MirrorError::OriginCommitNotFound`] error.
pub async fn find_translation_commit_hash(
    forge: &ForgeManager,
    req: TranslationCommitRequest,
) -> Result<Option<String>> {
    if req.translation_branch == req.default_branch {
        debug!(
            "translation branch {} is the default branch: using original commit",
            req.translation_branch
        );
        return Ok(Some(req.original_commit_hash));
    }

    let original = forge
        .get_commit(&req.original_commit_hash)
        .await?
        .ok_or_else(|| {
            MirrorError::OriginCommitNotFound(req.original_commit_hash.clone())
        })?;

    let commits = forge.list_branch_commits(&req.translation_branch).await?;

    let found = commits
        .into_iter()
        .find(|c| c.message.starts_with(&original.message))
        .map(|c| c.sha);

    match &found {
        Some(sha) => info!(
            "found translation commit {sha} for {} on {}",
            req.original_commit_hash, req.translation_branch
        ),
        None => info!(
            "no translation commit for {} on {} yet",
            req.original_commit_hash, req.translation_branch
        ),
    }

    Ok(found)
}
