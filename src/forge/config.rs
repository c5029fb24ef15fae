//! Configuration for forge platform connections.
use secrecy::{ExposeSecret, SecretString};

/// Default page size for paginated list queries.
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Branch that carries the original commits directly.
pub const DEFAULT_BRANCH: &str = "main";
/// Host whose commit links are recognized when none is configured.
pub const DEFAULT_HOST: &str = "github.com";

/// Remote repository connection configuration for authenticating and
/// interacting with forge platforms.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https) used for API calls.
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for comment and label calls. Empty when reading only.
    pub token: SecretString,
    /// Log write operations instead of sending them.
    pub dry_run: bool,
}

impl RemoteConfig {
    /// Base URL of repository pages, e.g. `https://github.com`. Commit links
    /// in issue bodies are always https, whatever scheme the repo URL used.
    pub fn link_base_url(&self) -> String {
        format!("https://{}", self.host)
    }

    pub fn has_token(&self) -> bool {
        !self.token.expose_secret().is_empty()
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            scheme: "https".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
            dry_run: false,
        }
    }
}
