//! Configuration loading and parsing for `commit-mirror.toml` files.
//!
//! Every field has a default, so a missing file or a partial file is valid.
//! Values given on the command line take precedence over the file.
use color_eyre::eyre::{WrapErr, eyre};
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{
    forge::config::{DEFAULT_BRANCH, DEFAULT_PAGE_SIZE},
    result::Result,
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "commit-mirror.toml";
/// Default tracking label removed from translated issues.
pub const DEFAULT_LABEL: &str = "translation";

/// Root configuration structure for `commit-mirror.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// The first branch whose name starts with this prefix is the
    /// translation branch. Required.
    pub translation_branch_prefix: String,
    /// Issues without this label are ignored; it is removed once the issue
    /// is marked translated.
    pub label: String,
    /// Branch that carries the original commits (default: "main").
    pub default_branch: String,
    /// Number of open issues processed per run (default: 100).
    pub per_page: u8,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            translation_branch_prefix: "".into(),
            label: DEFAULT_LABEL.into(),
            default_branch: DEFAULT_BRANCH.into(),
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MirrorConfig {
    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in the
    /// working directory when no path is given. Only an explicit path is
    /// required to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            debug!("no configuration found: using default");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).wrap_err_with(|| {
            format!("failed to read config file: {}", path.display())
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: MirrorConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Ensure the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.translation_branch_prefix.is_empty() {
            return Err(eyre!("must set a translation branch prefix"));
        }

        if self.label.is_empty() {
            return Err(eyre!("must set an issue label"));
        }

        if self.per_page == 0 {
            return Err(eyre!("per_page must be greater than 0"));
        }

        Ok(())
    }
}
