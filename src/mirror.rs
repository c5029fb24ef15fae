//! Translation tracking pipeline.
//!
//! Each step depends only on the forge and can be composed by callers:
//!
//! - **issues**: walk one page of open issues, skipping ignored ones
//! - **reference**: pull the original commit hash out of an issue body
//! - **branch**: pick the translation branch with a caller predicate
//! - **commit**: match the translation commit by message prefix
//! - **marker**: comment on the issue and drop its tracking label
//! - **runner**: the full wiring used by the binary

/// Locates the translation branch.
pub mod branch;

/// Finds the translation commit matching an original commit.
pub mod commit;

/// Sequential iteration over open issues.
pub mod issues;

/// Marks issues as translated.
pub mod marker;

/// Extracts commit references from issue text.
pub mod reference;

/// End-to-end pipeline run.
pub mod runner;

pub use branch::find_translation_branch;
pub use commit::{TranslationCommitRequest, find_translation_commit_hash};
pub use issues::{ProcessIssuesOptions, process_issues};
pub use marker::{MarkIssueRequest, mark_issue_as_translated};
pub use reference::{find_commit_hash_for_host, find_commit_hash_from_issue_body};
pub use runner::{MirrorSummary, run};
