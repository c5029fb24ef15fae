//! CLI argument parsing and forge platform configuration.
use clap::Parser;
use color_eyre::eyre::eyre;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::{env, path::PathBuf};

use crate::{config::MirrorConfig, forge::config::RemoteConfig, result::Result};

/// Marks translation issues as done once their translation commit lands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long)]
    /// GitHub repository URL (https://github.com/owner/repo).
    pub github_repo: String,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long)]
    /// Path to a commit-mirror.toml file.
    pub config: Option<PathBuf>,

    #[arg(long)]
    /// Translation branch name prefix.
    pub branch_prefix: Option<String>,

    #[arg(long)]
    /// Label that marks issues awaiting translation.
    pub label: Option<String>,

    #[arg(long)]
    /// Branch carrying the original commits.
    pub default_branch: Option<String>,

    #[arg(long)]
    /// Number of open issues to process.
    pub per_page: Option<u8>,

    #[arg(long, default_value_t = false)]
    /// Log comment and label changes instead of applying them.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        get_github_remote(&self.github_repo, &self.github_token, self.dry_run)
    }

    /// Load the configuration file and apply command line overrides.
    pub fn get_config(&self) -> Result<MirrorConfig> {
        let mut config = MirrorConfig::load(self.config.as_deref())?;

        if let Some(prefix) = &self.branch_prefix {
            config.translation_branch_prefix = prefix.clone();
        }

        if let Some(label) = &self.label {
            config.label = label.clone();
        }

        if let Some(default_branch) = &self.default_branch {
            config.default_branch = default_branch.clone();
        }

        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }

        config.validate()?;

        Ok(config)
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(eyre!(
            "only http and https schemes are supported for repo urls"
        )),
    }
}

/// Configure GitHub remote, falling back to the GITHUB_TOKEN env var.
fn get_github_remote(
    github_repo: &str,
    github_token: &str,
    dry_run: bool,
) -> Result<RemoteConfig> {
    resolve_github_remote(
        github_repo,
        github_token,
        env::var("GITHUB_TOKEN").ok(),
        dry_run,
    )
}

/// Configure GitHub remote with URL parsing and token resolution. The token
/// comes from the flag, then the repo URL, then `env_token`. A token is only
/// mandatory when changes will actually be written.
fn resolve_github_remote(
    github_repo: &str,
    github_token: &str,
    env_token: Option<String>,
    dry_run: bool,
) -> Result<RemoteConfig> {
    let parsed = GitUrl::parse(github_repo)?;

    validate_scheme(parsed.scheme)?;

    let mut token = github_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Some(env_var_token) = env_token
    {
        token = env_var_token;
    }

    if token.is_empty() && !dry_run {
        return Err(eyre!("must set github token"));
    }

    let host = parsed
        .host
        .ok_or(eyre!("unable to parse host from github repo"))?;

    let owner = parsed
        .owner
        .ok_or(eyre!("unable to parse owner from github repo"))?;

    Ok(RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        token: SecretString::from(token),
        dry_run,
    })
}
