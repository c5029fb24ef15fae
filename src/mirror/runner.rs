use color_eyre::Report;
use log::*;
use std::cell::Cell;

use crate::{
    config::MirrorConfig,
    forge::manager::ForgeManager,
    mirror::{
        branch::find_translation_branch,
        commit::{TranslationCommitRequest, find_translation_commit_hash},
        issues::{ProcessIssuesOptions, process_issues},
        marker::{MarkIssueRequest, mark_issue_as_translated},
        reference::find_commit_hash_for_host,
    },
    result::Result,
};

/// Outcome of a [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSummary {
    pub translation_branch: String,
    /// Issues commented on and unlabeled, or that would have been in a dry
    /// run.
    pub marked: usize,
    /// Labeled issues whose translation commit does not exist yet.
    pub pending: usize,
    /// No comment or label change was sent.
    pub dry_run: bool,
}

/// Mark every labeled open issue whose original commit already has a
/// translation commit.
///
/// The translation branch is located once. Issues without `config.label`
/// are ignored. Any failure aborts the remaining issues.
pub async fn run(
    forge: &ForgeManager,
    config: &MirrorConfig,
) -> Result<MirrorSummary> {
    let prefix = config.translation_branch_prefix.as_str();
    let translation_branch =
        find_translation_branch(forge, |name| name.starts_with(prefix)).await?;

    let remote = forge.remote_config();
    let dry_run = remote.dry_run;
    let link_base_url = remote.link_base_url();
    let marked = Cell::new(0);
    let pending = Cell::new(0);

    let branch = translation_branch.as_str();
    let link_base_url = link_base_url.as_str();
    let (marked_ref, pending_ref) = (&marked, &pending);

    process_issues(
        forge,
        ProcessIssuesOptions {
            per_page: config.per_page,
        },
        |issue| !issue.has_label(&config.label),
        move |issue| async move {
            let original_commit_hash = find_commit_hash_for_host(
                &issue.body,
                link_base_url,
                &remote.owner,
                &remote.repo,
            )?;

            let req =
                TranslationCommitRequest::new(branch, original_commit_hash)
                    .with_default_branch(config.default_branch.as_str());

            let Some(translation_commit_hash) =
                find_translation_commit_hash(forge, req).await?
            else {
                info!("issue #{} is not translated yet", issue.number);
                pending_ref.set(pending_ref.get() + 1);
                return Ok(());
            };

            mark_issue_as_translated(
                forge,
                MarkIssueRequest {
                    issue_number: issue.number,
                    translation_commit_hash,
                    label: config.label.clone(),
                },
            )
            .await?;

            marked_ref.set(marked_ref.get() + 1);

            Ok::<(), Report>(())
        },
    )
    .await?;

    Ok(MirrorSummary {
        translation_branch,
        marked: marked.get(),
        pending: pending.get(),
        dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::MirrorError,
        forge::{
            config::RemoteConfig,
            request::{CommentRequest, RemoveLabelRequest},
            traits::MockForge,
        },
        test_helpers::*,
    };
    use mockall::predicate::eq;

    const ORIGINAL_HASH: &str = "68895092db80a0c8e335f75d6fa2f1073ad6c4dd";
    const TRANSLATION_HASH: &str = "6863f101fdd1f336f9bb01901a632d1e0a9c4db3";

    fn config() -> MirrorConfig {
        MirrorConfig {
            translation_branch_prefix: "for-test".into(),
            label: "test".into(),
            ..Default::default()
        }
    }

    fn expect_branches(mock_forge: &mut MockForge) {
        mock_forge
            .expect_list_branches()
            .times(1)
            .returning(|| Ok(vec!["main".into(), "for-test".into()]));
    }

    #[tokio::test]
    #[test_log::test]
    async fn marks_labeled_issue_with_translation_commit() {
        let mut mock_forge = MockForge::new();
        expect_branches(&mut mock_forge);
        mock_forge.expect_list_open_issues().returning(|_| {
            Ok(vec![
                create_test_issue(1, &commit_issue_body("ffff"), &["docs"]),
                create_test_issue(2, &commit_issue_body(ORIGINAL_HASH), &["test"]),
            ])
        });
        mock_forge
            .expect_get_commit()
            .with(eq(ORIGINAL_HASH))
            .times(1)
            .returning(|_| {
                Ok(Some(create_test_commit(ORIGINAL_HASH, "docs: add guide")))
            });
        mock_forge
            .expect_list_branch_commits()
            .with(eq("for-test"))
            .returning(|_| {
                Ok(vec![create_test_commit(
                    TRANSLATION_HASH,
                    "docs: add guide (ko)",
                )])
            });
        mock_forge
            .expect_create_issue_comment()
            .with(eq(CommentRequest {
                issue_number: 2,
                body: format!("Translation commit hash: `{TRANSLATION_HASH}`"),
            }))
            .times(1)
            .returning(|_| Ok(()));
        mock_forge
            .expect_remove_issue_label()
            .with(eq(RemoveLabelRequest {
                issue_number: 2,
                label: "test".into(),
            }))
            .times(1)
            .returning(|_| Ok(()));
        let forge = create_test_manager(mock_forge);

        let summary = run(&forge, &config()).await.unwrap();

        assert_eq!(
            summary,
            MirrorSummary {
                translation_branch: "for-test".into(),
                marked: 1,
                pending: 0,
                dry_run: false,
            }
        );
    }

    fn expect_translated_issue(mock_forge: &mut MockForge) {
        mock_forge.expect_list_open_issues().returning(|_| {
            Ok(vec![create_test_issue(
                2,
                &commit_issue_body(ORIGINAL_HASH),
                &["test"],
            )])
        });
        mock_forge.expect_get_commit().returning(|_| {
            Ok(Some(create_test_commit(ORIGINAL_HASH, "docs: add guide")))
        });
        mock_forge.expect_list_branch_commits().returning(|_| {
            Ok(vec![create_test_commit(
                TRANSLATION_HASH,
                "docs: add guide (ko)",
            )])
        });
    }

    #[tokio::test]
    #[test_log::test]
    async fn dry_run_reports_issues_without_writing() {
        let mut mock_forge = MockForge::new();
        expect_branches(&mut mock_forge);
        expect_translated_issue(&mut mock_forge);
        mock_forge.expect_create_issue_comment().never();
        mock_forge.expect_remove_issue_label().never();
        let remote = RemoteConfig {
            dry_run: true,
            ..create_test_remote_config()
        };
        let forge = create_test_manager_with_remote(mock_forge, remote);

        let summary = run(&forge, &config()).await.unwrap();

        assert_eq!(
            summary,
            MirrorSummary {
                translation_branch: "for-test".into(),
                marked: 1,
                pending: 0,
                dry_run: true,
            }
        );
    }

    #[tokio::test]
    async fn matches_https_links_for_http_remote() {
        let mut mock_forge = MockForge::new();
        expect_branches(&mut mock_forge);
        expect_translated_issue(&mut mock_forge);
        mock_forge
            .expect_create_issue_comment()
            .times(1)
            .returning(|_| Ok(()));
        mock_forge
            .expect_remove_issue_label()
            .times(1)
            .returning(|_| Ok(()));
        let remote = RemoteConfig {
            scheme: "http".into(),
            ..create_test_remote_config()
        };
        let forge = create_test_manager_with_remote(mock_forge, remote);

        let summary = run(&forge, &config()).await.unwrap();

        assert_eq!(summary.marked, 1);
    }

    #[tokio::test]
    async fn leaves_issue_untouched_without_translation_commit() {
        let mut mock_forge = MockForge::new();
        expect_branches(&mut mock_forge);
        mock_forge.expect_list_open_issues().returning(|_| {
            Ok(vec![create_test_issue(
                5,
                &commit_issue_body(ORIGINAL_HASH),
                &["test"],
            )])
        });
        mock_forge.expect_get_commit().returning(|_| {
            Ok(Some(create_test_commit(ORIGINAL_HASH, "docs: add guide")))
        });
        mock_forge
            .expect_list_branch_commits()
            .returning(|_| Ok(vec![create_test_commit("abc", "chore: bump")]));
        mock_forge.expect_create_issue_comment().never();
        mock_forge.expect_remove_issue_label().never();
        let forge = create_test_manager(mock_forge);

        let summary = run(&forge, &config()).await.unwrap();

        assert_eq!(summary.marked, 0);
        assert_eq!(summary.pending, 1);
    }

    #[tokio::test]
    async fn default_branch_marks_with_original_hash() {
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_list_branches()
            .returning(|| Ok(vec!["main".into()]));
        mock_forge.expect_list_open_issues().returning(|_| {
            Ok(vec![create_test_issue(
                9,
                &commit_issue_body(ORIGINAL_HASH),
                &["test"],
            )])
        });
        mock_forge.expect_get_commit().never();
        mock_forge
            .expect_create_issue_comment()
            .with(eq(CommentRequest {
                issue_number: 9,
                body: format!("Translation commit hash: `{ORIGINAL_HASH}`"),
            }))
            .returning(|_| Ok(()));
        mock_forge.expect_remove_issue_label().returning(|_| Ok(()));
        let forge = create_test_manager(mock_forge);

        let config = MirrorConfig {
            translation_branch_prefix: "main".into(),
            ..config()
        };
        let summary = run(&forge, &config).await.unwrap();

        assert_eq!(summary.marked, 1);
    }

    #[tokio::test]
    async fn fails_without_translation_branch() {
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_list_branches()
            .returning(|| Ok(vec!["main".into()]));
        mock_forge.expect_list_open_issues().never();
        let forge = create_test_manager(mock_forge);

        let err = run(&forge, &config()).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<MirrorError>(),
            Some(&MirrorError::TranslationBranchNotFound)
        );
    }

    #[tokio::test]
    async fn aborts_on_issue_without_commit_link() {
        let mut mock_forge = MockForge::new();
        expect_branches(&mut mock_forge);
        mock_forge.expect_list_open_issues().returning(|_| {
            Ok(vec![
                create_test_issue(1, "no link here", &["test"]),
                create_test_issue(2, &commit_issue_body(ORIGINAL_HASH), &["test"]),
            ])
        });
        mock_forge.expect_get_commit().never();
        let forge = create_test_manager(mock_forge);

        let err = run(&forge, &config()).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<MirrorError>(),
            Some(&MirrorError::CommitHashNotFound)
        );
    }
}
