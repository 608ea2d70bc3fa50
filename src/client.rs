use crate::config::Config;
use crate::error::ClientError;
use crate::http::HttpAdapter;
use crate::system::SystemRequestBuilder;
use std::sync::Arc;

/// Root of the SDK. Owns the request adapter and hands out per-resource
/// builders that share it. Cheap to clone; safe to use from multiple
/// tasks concurrently.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    adapter: Arc<HttpAdapter>,
}

impl RegistryClient {
    /// Client against `base_url` with default settings and no auth.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(Config::with_base_url(base_url))
    }

    pub fn from_config(cfg: Config) -> Result<Self, ClientError> {
        Ok(Self {
            adapter: Arc::new(HttpAdapter::new(cfg)?),
        })
    }

    pub fn adapter(&self) -> &Arc<HttpAdapter> {
        &self.adapter
    }

    /// Builders for the `/system` endpoints.
    pub fn system(&self) -> SystemRequestBuilder {
        SystemRequestBuilder::new(Arc::clone(&self.adapter))
    }
}
