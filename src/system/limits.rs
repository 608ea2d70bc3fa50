use super::BaseRequestBuilder;
use crate::error::ClientError;
use crate::http::{ErrorMappings, HttpAdapter, RequestInformation};
use crate::models::{ApiError, Limits};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds requests for `{+baseurl}/system/limits`: the limitations on
/// used resources applied to the current registry instance.
#[derive(Debug, Clone)]
pub struct LimitsRequestBuilder {
    base: BaseRequestBuilder,
}

/// Configuration for the request such as headers and adapter options.
#[derive(Debug, Clone, Default)]
pub struct GetRequestConfiguration {
    pub headers: HeaderMap,
    pub options: Vec<crate::http::RequestOption>,
}

impl LimitsRequestBuilder {
    pub fn new(path_parameters: HashMap<String, String>, adapter: Arc<HttpAdapter>) -> Self {
        Self {
            base: BaseRequestBuilder::new(adapter, "{+baseurl}/system/limits", path_parameters),
        }
    }

    /// Instantiate a builder pinned to a caller-supplied absolute URL.
    pub fn new_with_raw_url(raw_url: impl Into<String>, adapter: Arc<HttpAdapter>) -> Self {
        Self::new(BaseRequestBuilder::raw_url_parameters(raw_url), adapter)
    }

    /// Retrieve the list of limitations on used resources that apply to
    /// the current registry instance.
    ///
    /// Returns `Ok(None)` when the service answers with no content. A
    /// 500 status carries the registry's declared error model and is
    /// surfaced as [`ClientError::Api`].
    pub async fn get(
        &self,
        request_configuration: Option<&GetRequestConfiguration>,
    ) -> Result<Option<Limits>, ClientError> {
        let request_info = self.to_get_request_information(request_configuration)?;
        let error_mappings =
            ErrorMappings::new().with(StatusCode::INTERNAL_SERVER_ERROR, |status, body| {
                ClientError::Api(ApiError::from_body(status, body))
            });
        self.base.adapter().send(request_info, &error_mappings).await
    }

    /// Prepare the GET request without sending it.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&GetRequestConfiguration>,
    ) -> Result<RequestInformation, ClientError> {
        let mut request_info = RequestInformation::new(
            Method::GET,
            self.base.url_template(),
            self.base.path_parameters().clone(),
        );
        if let Some(config) = request_configuration {
            request_info.add_headers(&config.headers);
            request_info.add_options(&config.options);
        }
        request_info.try_add_header(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(request_info)
    }

    /// An equivalent builder targeting the provided arbitrary URL. Any
    /// templated path parameters are ignored from then on.
    pub fn with_url(&self, raw_url: impl Into<String>) -> LimitsRequestBuilder {
        Self::new_with_raw_url(raw_url, Arc::clone(self.base.adapter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::http::RequestOption;

    fn builder_for(base_url: &str) -> LimitsRequestBuilder {
        let adapter =
            Arc::new(HttpAdapter::new(Config::with_base_url(base_url)).expect("client builds"));
        let params = BaseRequestBuilder::base_parameters(&adapter);
        LimitsRequestBuilder::new(params, adapter)
    }

    #[test]
    fn get_targets_system_limits_with_json_accept() {
        let b = builder_for("https://reg.example/apis/registry/v2");
        let info = b.to_get_request_information(None).unwrap();
        assert_eq!(info.method, Method::GET);
        assert_eq!(
            info.url().unwrap().as_str(),
            "https://reg.example/apis/registry/v2/system/limits"
        );
        assert_eq!(info.headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn caller_headers_merge_without_replacing_defaults() {
        let b = builder_for("https://reg.example");
        let mut config = GetRequestConfiguration::default();
        config
            .headers
            .insert("x-request-id", HeaderValue::from_static("abc-123"));
        config.options.push(RequestOption::NoRetry);
        let info = b.to_get_request_information(Some(&config)).unwrap();
        assert_eq!(info.headers.get("x-request-id").unwrap(), "abc-123");
        assert_eq!(info.headers.get(ACCEPT).unwrap(), "application/json");
        assert!(info.options.contains(&RequestOption::NoRetry));
    }

    #[test]
    fn caller_accept_wins_over_default() {
        let b = builder_for("https://reg.example");
        let mut config = GetRequestConfiguration::default();
        config
            .headers
            .insert(ACCEPT, HeaderValue::from_static("application/xml"));
        let info = b.to_get_request_information(Some(&config)).unwrap();
        assert_eq!(info.headers.get(ACCEPT).unwrap(), "application/xml");
    }

    #[test]
    fn with_url_ignores_original_template() {
        let b = builder_for("https://reg.example/apis/registry/v2");
        let pinned = b.with_url("https://other.example/x");
        let info = pinned.to_get_request_information(None).unwrap();
        assert_eq!(info.url().unwrap().as_str(), "https://other.example/x");
    }
}
