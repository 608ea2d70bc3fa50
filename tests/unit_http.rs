use registry_client::http::{ErrorMappings, RequestOption};
use registry_client::models::ApiError;
use registry_client::{ClientError, Config, RegistryClient};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;

#[test]
fn limits_request_shape_through_public_api() {
    let client = RegistryClient::new("https://reg.example/apis/registry/v2").unwrap();
    let info = client
        .system()
        .limits()
        .to_get_request_information(None)
        .unwrap();
    assert_eq!(info.method, reqwest::Method::GET);
    assert_eq!(
        info.url().unwrap().as_str(),
        "https://reg.example/apis/registry/v2/system/limits"
    );
    assert_eq!(info.headers.get(ACCEPT).unwrap(), "application/json");
}

#[test]
fn config_base_url_trailing_slash_is_trimmed() {
    let cfg = Config::with_base_url("https://reg.example/v2/");
    assert_eq!(cfg.base_url, "https://reg.example/v2");
}

#[test]
fn declared_error_mapping_produces_typed_error() {
    let mappings = ErrorMappings::new().with(StatusCode::INTERNAL_SERVER_ERROR, |s, body| {
        ClientError::Api(ApiError::from_body(s, body))
    });
    let factory = mappings.get(StatusCode::INTERNAL_SERVER_ERROR).unwrap();
    let err = factory(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"message":"boom","error_code":500}"#,
    );
    let api = err.as_api().expect("typed error");
    assert_eq!(api.message, "boom");
    assert_eq!(api.error_code, 500);
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn non_http_error_codes_carry_no_status() {
    // error_code on the wire is an arbitrary i32; values outside the
    // status-code range must not alias onto a valid status.
    let overflowing = ClientError::Api(ApiError {
        message: "boom".into(),
        error_code: 65736, // & 0xFFFF == 200
        detail: None,
        name: None,
    });
    assert_eq!(overflowing.status(), None);
    let negative = ClientError::Api(ApiError {
        message: "boom".into(),
        error_code: -1,
        detail: None,
        name: None,
    });
    assert_eq!(negative.status(), None);
}

#[test]
fn request_options_compare_by_value() {
    assert_eq!(RequestOption::NoRetry, RequestOption::NoRetry);
    assert_eq!(
        RequestOption::Timeout(Duration::from_secs(2)),
        RequestOption::Timeout(Duration::from_secs(2))
    );
    assert_ne!(
        RequestOption::NoRetry,
        RequestOption::Timeout(Duration::from_secs(2))
    );
}
