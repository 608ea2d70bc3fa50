use super::limits::GetRequestConfiguration;
use super::BaseRequestBuilder;
use crate::error::ClientError;
use crate::http::{ErrorMappings, HttpAdapter, RequestInformation};
use crate::models::{ApiError, SystemInfo};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds requests for `{+baseurl}/system/info`: name, description and
/// version of the running registry.
#[derive(Debug, Clone)]
pub struct InfoRequestBuilder {
    base: BaseRequestBuilder,
}

impl InfoRequestBuilder {
    pub fn new(path_parameters: HashMap<String, String>, adapter: Arc<HttpAdapter>) -> Self {
        Self {
            base: BaseRequestBuilder::new(adapter, "{+baseurl}/system/info", path_parameters),
        }
    }

    pub fn new_with_raw_url(raw_url: impl Into<String>, adapter: Arc<HttpAdapter>) -> Self {
        Self::new(BaseRequestBuilder::raw_url_parameters(raw_url), adapter)
    }

    /// Retrieve information about the running registry instance.
    pub async fn get(
        &self,
        request_configuration: Option<&GetRequestConfiguration>,
    ) -> Result<Option<SystemInfo>, ClientError> {
        let request_info = self.to_get_request_information(request_configuration)?;
        let error_mappings =
            ErrorMappings::new().with(StatusCode::INTERNAL_SERVER_ERROR, |status, body| {
                ClientError::Api(ApiError::from_body(status, body))
            });
        self.base.adapter().send(request_info, &error_mappings).await
    }

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

    pub fn with_url(&self, raw_url: impl Into<String>) -> InfoRequestBuilder {
        Self::new_with_raw_url(raw_url, Arc::clone(self.base.adapter()))
    }
}
