use regex::Regex;

use crate::{error::MirrorError, result::Result};

const GITHUB_LINK_BASE_URL: &str = "https://github.com";

/// Extract the commit hash from the first
/// `https://github.com/<owner>/<repo>/commit/<hash>` link in `body`.
///
/// Owner and repo are substituted into the pattern verbatim and matched
/// case-sensitively. Fails with [`MirrorError::CommitHashNotFound`] when the
/// body has no such link.
pub fn find_commit_hash_from_issue_body(
    body: &str,
    owner: &str,
    repo: &str,
) -> Result<String> {
    find_commit_hash_for_host(body, GITHUB_LINK_BASE_URL, owner, repo)
}

/// Same as [`find_commit_hash_from_issue_body`] for repositories served
/// from another base URL, e.g. a GitHub Enterprise host.
pub fn find_commit_hash_for_host(
    body: &str,
    link_base_url: &str,
    owner: &str,
    repo: &str,
) -> Result<String> {
    let commit_re = Regex::new(&format!(
        r"{link_base_url}/{owner}/{repo}/commit/(?<hash>[a-zA-Z0-9]+)"
    ))?;

    match commit_re.captures(body) {
        Some(captures) => Ok(captures["hash"].to_string()),
        None => Err(MirrorError::CommitHashNotFound.into()),
    }
}
