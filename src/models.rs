use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Resource limits applied to the current registry instance.
///
/// Every field is optional on the wire; a registry without quota
/// enforcement returns an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Limits {
    pub max_total_schemas_count: Option<i64>,
    pub max_schema_size_bytes: Option<i64>,
    pub max_artifacts_count: Option<i64>,
    pub max_versions_per_artifact_count: Option<i64>,
    pub max_artifact_properties_count: Option<i64>,
    pub max_property_key_size_bytes: Option<i64>,
    pub max_property_value_size_bytes: Option<i64>,
    pub max_artifact_labels_count: Option<i64>,
    pub max_label_size_bytes: Option<i64>,
    pub max_artifact_name_length_chars: Option<i64>,
    pub max_artifact_description_length_chars: Option<i64>,
    pub max_requests_per_second_count: Option<i64>,
}

/// Identity of the running registry, from `/system/info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub built_on: Option<String>,
}

/// The registry's declared error payload, returned alongside 5xx
/// statuses the API documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiError {
    pub message: String,
    pub error_code: i32,
    pub detail: Option<String>,
    pub name: Option<String>,
}

impl ApiError {
    /// Deserialize a declared error body. Bodies that do not match the
    /// declared shape are wrapped into a synthesized error carrying the
    /// raw text, so the caller still gets the status and the payload.
    pub fn from_body(status: StatusCode, body: &str) -> ApiError {
        match serde_json::from_str::<ApiError>(body) {
            Ok(mut e) => {
                if e.error_code == 0 {
                    e.error_code = status.as_u16() as i32;
                }
                e
            }
            Err(_) => ApiError {
                message: if body.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("server error")
                        .to_string()
                } else {
                    body.to_string()
                },
                error_code: status.as_u16() as i32,
                detail: None,
                name: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_deserializes_partial_object() {
        let l: Limits =
            serde_json::from_str(r#"{"maxTotalSchemasCount": 100, "maxSchemaSizeBytes": 65536}"#)
                .unwrap();
        assert_eq!(l.max_total_schemas_count, Some(100));
        assert_eq!(l.max_schema_size_bytes, Some(65536));
        assert_eq!(l.max_artifacts_count, None);
    }

    #[test]
    fn limits_deserializes_empty_object() {
        let l: Limits = serde_json::from_str("{}").unwrap();
        assert_eq!(l, Limits::default());
    }

    #[test]
    fn api_error_from_declared_body() {
        let e = ApiError::from_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"boom","error_code":500,"detail":"stack","name":"ServerError"}"#,
        );
        assert_eq!(e.message, "boom");
        assert_eq!(e.error_code, 500);
        assert_eq!(e.detail.as_deref(), Some("stack"));
        assert_eq!(e.name.as_deref(), Some("ServerError"));
    }

    #[test]
    fn api_error_from_undeclared_body_keeps_text() {
        let e = ApiError::from_body(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(e.message, "<html>oops</html>");
        assert_eq!(e.error_code, 500);
    }

    #[test]
    fn api_error_from_empty_body_uses_reason() {
        let e = ApiError::from_body(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(e.message, "Internal Server Error");
        assert_eq!(e.error_code, 500);
    }
}
