use std::env;

/// Runtime configuration for registry API clients.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Config {
    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - REGISTRY_URL [required], e.g. https://registry.example/apis/registry/v2
    /// - REGISTRY_TOKEN (optional bearer token)
    /// - REGISTRY_HTTP_TIMEOUT_SECS (default: 30)
    /// - REGISTRY_USER_AGENT (default: registry-client/<version>)
    /// - REGISTRY_MAX_RETRIES (default: 5)
    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("REGISTRY_URL").map_err(|_| "Missing REGISTRY_URL".to_string())?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let token = env::var("REGISTRY_TOKEN").ok().filter(|t| !t.is_empty());
        let timeout_secs = env::var("REGISTRY_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        let max_retries = env::var("REGISTRY_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(5);
        let user_agent = env::var("REGISTRY_USER_AGENT")
            .unwrap_or_else(|_| format!("registry-client/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            base_url,
            token,
            user_agent,
            timeout_secs,
            max_retries,
        })
    }

    /// Configuration for a plain unauthenticated client against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
            user_agent: format!("registry-client/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            max_retries: 5,
        }
    }
}
