//! Interface to the repository-hosting platform.
//!
//! Provides token-based authentication, issue listing and annotation, and
//! branch and commit lookups through a common trait.

/// Connection settings for the hosting platform.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Dry-run aware wrapper around a forge implementation.
pub mod manager;

/// Normalized records and requests exchanged with a forge.
pub mod request;

/// Common trait for forge platform abstraction.
pub mod traits;
