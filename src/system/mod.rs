//! Request builders for the registry's `/system` surface: instance
//! information and the resource limits applied to it.

mod info;
mod limits;

pub use info::InfoRequestBuilder;
pub use limits::{GetRequestConfiguration, LimitsRequestBuilder};

use crate::http::{HttpAdapter, BASE_URL_KEY, RAW_URL_KEY};
use std::collections::HashMap;
use std::sync::Arc;

/// Shared state of every request builder: the URL template for its
/// endpoint, the parameters substituted into it, and the adapter that
/// sends the requests. Builders embed this by composition and stay
/// immutable after construction.
#[derive(Debug, Clone)]
pub struct BaseRequestBuilder {
    url_template: String,
    path_parameters: HashMap<String, String>,
    adapter: Arc<HttpAdapter>,
}

impl BaseRequestBuilder {
    pub fn new(
        adapter: Arc<HttpAdapter>,
        url_template: impl Into<String>,
        path_parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            url_template: url_template.into(),
            path_parameters,
            adapter,
        }
    }

    /// Parameters for a builder rooted at the adapter's configured base URL.
    pub fn base_parameters(adapter: &HttpAdapter) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert(BASE_URL_KEY.to_string(), adapter.base_url().to_string());
        params
    }

    /// Parameters pinning the builder to an arbitrary absolute URL,
    /// bypassing the template.
    pub fn raw_url_parameters(raw_url: impl Into<String>) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert(RAW_URL_KEY.to_string(), raw_url.into());
        params
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn path_parameters(&self) -> &HashMap<String, String> {
        &self.path_parameters
    }

    pub fn adapter(&self) -> &Arc<HttpAdapter> {
        &self.adapter
    }
}

/// Builds requests for the `/system` path; a parent handing out the
/// per-endpoint builders.
#[derive(Debug, Clone)]
pub struct SystemRequestBuilder {
    base: BaseRequestBuilder,
}

impl SystemRequestBuilder {
    pub fn new(adapter: Arc<HttpAdapter>) -> Self {
        let params = BaseRequestBuilder::base_parameters(&adapter);
        Self {
            base: BaseRequestBuilder::new(adapter, "{+baseurl}/system", params),
        }
    }

    /// The resource-limits endpoint of this registry instance.
    pub fn limits(&self) -> LimitsRequestBuilder {
        LimitsRequestBuilder::new(
            self.base.path_parameters().clone(),
            Arc::clone(self.base.adapter()),
        )
    }

    /// The instance-information endpoint.
    pub fn info(&self) -> InfoRequestBuilder {
        InfoRequestBuilder::new(
            self.base.path_parameters().clone(),
            Arc::clone(self.base.adapter()),
        )
    }
}
