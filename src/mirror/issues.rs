//! Walks open issues and hands the ones that are not ignored to an action.
use log::*;

use crate::{
    forge::{config::DEFAULT_PAGE_SIZE, manager::ForgeManager, request::Issue},
    result::Result,
};

/// Options for [`process_issues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessIssuesOptions {
    /// Number of open issues fetched. Only this single page is processed.
    pub per_page: u8,
}

impl Default for ProcessIssuesOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Fetch one page of open issues and run `action` on each issue for which
/// `is_ignored` returns false.
///
/// Issues are visited in the order the forge returns them. `is_ignored` is
/// evaluated exactly once per issue and each action is awaited before the
/// next issue is looked at. The first error, from the fetch or from an
/// action, stops processing and is returned.
pub async fn process_issues<I, A, Fut>(
    forge: &ForgeManager,
    options: ProcessIssuesOptions,
    mut is_ignored: I,
    mut action: A,
) -> Result<()>
where
    I: FnMut(&Issue) -> bool,
    A: FnMut(Issue) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let issues = forge.list_open_issues(options.per_page).await?;

    for issue in issues {
        if is_ignored(&issue) {
            debug!("ignoring issue #{}", issue.number);
            continue;
        }

        debug!("processing issue #{}: {}", issue.number, issue.title);
        action(issue).await?;
    }

    Ok(())
}
