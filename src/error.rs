//! Typed failures raised while matching translation commits.

use thiserror::Error;

/// Not-found conditions that abort the operation that hit them.
///
/// A translation commit that simply does not exist yet is not one of these;
/// the matcher reports that case as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MirrorError {
    #[error("commit hash not found in issue body")]
    CommitHashNotFound,

    #[error("translation branch not found")]
    TranslationBranchNotFound,

    #[error("origin commit not found: {0}")]
    OriginCommitNotFound(String),

    #[error("a token is required to {0}")]
    TokenRequired(String),
}
