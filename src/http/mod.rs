use crate::config::Config;
use crate::error::ClientError;
use log::warn;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Path-parameter key carrying the base URL substituted into templates.
pub const BASE_URL_KEY: &str = "baseurl";
/// Path-parameter key that, when present, overrides the template with a
/// caller-supplied absolute URL (the `with_url` escape hatch).
pub const RAW_URL_KEY: &str = "request-raw-url";

pub fn build_client(cfg: &Config) -> Result<Client, ClientError> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(USER_AGENT, HeaderValue::from_str(&cfg.user_agent)?);
    // Authorization header is injected per request to allow token rotation later.
    let client = Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()?;
    Ok(client)
}

/// Per-request adapter options supplied through a request configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOption {
    /// Fail fast: no backoff/retry for transient failures on this call.
    NoRetry,
    /// Override the client-wide timeout for this call.
    Timeout(Duration),
}

/// One prepared request: method, URL template with its parameters,
/// headers, and adapter options. Builders produce these; the adapter
/// consumes them.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    pub method: Method,
    url_template: String,
    path_parameters: HashMap<String, String>,
    pub headers: HeaderMap,
    pub options: Vec<RequestOption>,
}

impl RequestInformation {
    pub fn new(
        method: Method,
        url_template: impl Into<String>,
        path_parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            method,
            url_template: url_template.into(),
            path_parameters,
            headers: HeaderMap::new(),
            options: Vec::new(),
        }
    }

    /// Resolve the final URL. A raw-URL parameter wins outright; otherwise
    /// `{+name}` / `{name}` placeholders are substituted from the map.
    pub fn url(&self) -> Result<Url, ClientError> {
        if let Some(raw) = self.path_parameters.get(RAW_URL_KEY) {
            return Ok(Url::parse(raw)?);
        }
        let mut rendered = self.url_template.clone();
        for (name, value) in &self.path_parameters {
            rendered = rendered
                .replace(&format!("{{+{name}}}"), value)
                .replace(&format!("{{{name}}}"), value);
        }
        Ok(Url::parse(&rendered)?)
    }

    /// Merge caller headers in; caller values overwrite existing ones.
    pub fn add_headers(&mut self, headers: &HeaderMap) {
        let mut last: Option<HeaderName> = None;
        for (name, value) in headers {
            // Iterating a &HeaderMap yields the same name once per value of a
            // multi-valued header; only the first value may clear what is there.
            if last.as_ref() == Some(name) {
                self.headers.append(name.clone(), value.clone());
            } else {
                self.headers.insert(name.clone(), value.clone());
            }
            last = Some(name.clone());
        }
    }

    /// Set a header only when the caller has not already supplied it.
    pub fn try_add_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.entry(name).or_insert(value);
    }

    pub fn add_options(&mut self, options: &[RequestOption]) {
        self.options.extend_from_slice(options);
    }

    fn retry_disabled(&self) -> bool {
        self.options.contains(&RequestOption::NoRetry)
    }

    fn timeout_override(&self) -> Option<Duration> {
        self.options.iter().find_map(|o| match o {
            RequestOption::Timeout(d) => Some(*d),
            _ => None,
        })
    }
}

/// Factory producing a typed error from a declared error response.
pub type ErrorFactory = fn(StatusCode, &str) -> ClientError;

/// Status-code keyed error deserializers: the declared error surface of
/// an endpoint. Statuses without a mapping fall through to the adapter's
/// generic handling.
#[derive(Debug, Default, Clone)]
pub struct ErrorMappings {
    map: HashMap<u16, ErrorFactory>,
}

impl ErrorMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, status: StatusCode, factory: ErrorFactory) -> Self {
        self.map.insert(status.as_u16(), factory);
        self
    }

    pub fn get(&self, status: StatusCode) -> Option<ErrorFactory> {
        self.map.get(&status.as_u16()).copied()
    }
}

fn compute_backoff(attempt: u32, retry_after: Option<Duration>) -> Duration {
    if let Some(d) = retry_after {
        return d;
    }
    // Exponential backoff with jitter: base 200ms * 2^attempt, max 5s.
    let base = 200u64.saturating_mul(1u64 << attempt.min(5));
    let max = 5_000u64.min(base);
    let jitter = fastrand::u64(0..=max / 2);
    Duration::from_millis(max / 2 + jitter)
}

/// The request adapter: owns the HTTP client and turns prepared request
/// information into a deserialized model or a `ClientError`.
#[derive(Debug, Clone)]
pub struct HttpAdapter {
    client: Client,
    cfg: Config,
    auth: Option<HeaderValue>,
}

impl HttpAdapter {
    /// Fails when the configured user agent or token cannot be carried
    /// in a header; a bad credential is a construction error, never a
    /// silently unauthenticated request.
    pub fn new(cfg: Config) -> Result<Self, ClientError> {
        let client = build_client(&cfg)?;
        Self::from_parts(client, cfg)
    }

    pub fn from_parts(client: Client, cfg: Config) -> Result<Self, ClientError> {
        let auth = match &cfg.token {
            Some(token) => Some(HeaderValue::from_str(&format!("Bearer {token}"))?),
            None => None,
        };
        Ok(Self { client, cfg, auth })
    }

    pub fn base_url(&self) -> &str {
        &self.cfg.base_url
    }

    /// Execute one prepared request and deserialize the JSON response.
    ///
    /// Returns `Ok(None)` for a success with an empty body. A status
    /// with a declared mapping returns that typed error immediately;
    /// unmapped 429/5xx and transport failures are retried with backoff
    /// up to the configured cap (unless `NoRetry` is set), then surface
    /// as generic errors.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request_info: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<Option<T>, ClientError> {
        let url = request_info.url()?;
        let max_retries = if request_info.retry_disabled() {
            0
        } else {
            self.cfg.max_retries
        };
        let mut attempt: u32 = 0;
        loop {
            let mut req = self
                .client
                .request(request_info.method.clone(), url.clone())
                .headers(request_info.headers.clone());
            if let Some(timeout) = request_info.timeout_override() {
                req = req.timeout(timeout);
            }
            if let Some(auth) = &self.auth {
                req = req.header(AUTHORIZATION, auth.clone());
            }

            let res = match req.send().await {
                Ok(r) => r,
                Err(e) => {
                    if attempt < max_retries {
                        warn!("{} {} transport error, retrying: {}", request_info.method, url, e);
                        tokio::time::sleep(compute_backoff(attempt, None)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(ClientError::Transport(e));
                }
            };

            let status = res.status();
            if status.is_success() {
                let body = res.bytes().await?;
                if body.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(serde_json::from_slice(&body)?));
            }

            let retry_after = res
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs);
            let text = res.text().await.unwrap_or_default();

            // Declared errors are part of the endpoint contract, never transient.
            if let Some(factory) = error_mappings.get(status) {
                return Err(factory(status, &text));
            }

            if (status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error())
                && attempt < max_retries
            {
                let backoff = compute_backoff(attempt, retry_after);
                warn!(
                    "{} {} retrying (status {}), backoff {:?}",
                    request_info.method, url, status, backoff
                );
                tokio::time::sleep(backoff).await;
                attempt += 1;
                continue;
            }

            return Err(ClientError::Status {
                status,
                message: text,
            });
        }
    }
}
