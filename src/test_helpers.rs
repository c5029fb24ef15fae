//! Common test helper functions shared across test modules.
//!
//! This module provides reusable utilities for creating test fixtures and mock objects,
//! reducing code duplication across different test suites.
use secrecy::SecretString;

use crate::forge::{
    config::RemoteConfig,
    manager::ForgeManager,
    request::{ForgeCommit, Issue, IssueLabel},
    traits::MockForge,
};

pub const TEST_OWNER: &str = "Gumball12";
pub const TEST_REPO: &str = "commit-mirror";

/// Creates a test RemoteConfig pointing at the fixture repository.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        host: "github.com".to_string(),
        scheme: "https".to_string(),
        owner: TEST_OWNER.to_string(),
        repo: TEST_REPO.to_string(),
        token: SecretString::from("test-token".to_string()),
        dry_run: false,
    }
}

/// Wraps a mock forge in a manager, registering the config expectation the
/// manager needs on construction.
///
/// # Example
/// ```ignore
/// let mut mock_forge = MockForge::new();
/// mock_forge.expect_list_branches().returning(|| Ok(vec![]));
/// let manager = create_test_manager(mock_forge);
/// ```
pub fn create_test_manager(mock_forge: MockForge) -> ForgeManager {
    create_test_manager_with_remote(mock_forge, create_test_remote_config())
}

/// Like [`create_test_manager`] but with a custom remote, e.g. for dry runs.
pub fn create_test_manager_with_remote(
    mut mock_forge: MockForge,
    remote: RemoteConfig,
) -> ForgeManager {
    mock_forge
        .expect_remote_config()
        .returning(move || remote.clone());
    ForgeManager::new(Box::new(mock_forge))
}

/// Creates an issue with the given body and label names.
pub fn create_test_issue(number: u64, body: &str, labels: &[&str]) -> Issue {
    Issue {
        number,
        title: format!("issue {number}"),
        body: body.to_string(),
        labels: labels
            .iter()
            .map(|name| IssueLabel {
                name: name.to_string(),
            })
            .collect(),
    }
}

pub fn create_test_commit(sha: &str, message: &str) -> ForgeCommit {
    ForgeCommit {
        sha: sha.to_string(),
        message: message.to_string(),
    }
}

/// Issue body the way the upstream sync bot writes it.
pub fn commit_issue_body(sha: &str) -> String {
    format!(
        "New updates on head repo.\n  https://github.com/{TEST_OWNER}/{TEST_REPO}/commit/{sha}"
    )
}
