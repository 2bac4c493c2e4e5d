//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs derive `validator::Validate`; [`validate`] turns rule
//! violations into the standard error envelope. Extractor configs route body
//! and query decoding failures through the same envelope.

use actix_web::{HttpRequest, error::JsonPayloadError, error::QueryPayloadError, web};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::Error;

const JSON_LIMIT_BYTES: usize = 256 * 1024;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    ValidationFailed,
    InvalidJson,
    InvalidQuery,
    InvalidUuid,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "validation_failed",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::InvalidQuery => "invalid_query",
            ErrorCode::InvalidUuid => "invalid_uuid",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Run the payload's declared rules.
///
/// Every violated rule is reported as `{field, code}` under
/// `details.fields`, with field names in their camelCase wire form.
pub(crate) fn validate<T: Validate>(payload: &T) -> Result<(), Error> {
    payload.validate().map_err(|errors| validation_error(&errors))
}

fn validation_error(errors: &ValidationErrors) -> Error {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, violations)| {
            let field = camel_case(&field.to_string());
            violations
                .iter()
                .map(move |violation| (field.clone(), violation.code.to_string()))
        })
        .collect();
    fields.sort();
    let fields: Vec<_> = fields
        .into_iter()
        .map(|(field, code)| json!({ "field": field, "code": code }))
        .collect();
    Error::invalid_request("Validation failed").with_details(json!({
        "code": ErrorCode::ValidationFailed.as_str(),
        "fields": fields,
    }))
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn json_error(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %error, "rejected request body");
    Error::invalid_request("Invalid request body")
        .with_details(json!({
            "code": ErrorCode::InvalidJson.as_str(),
            "reason": error.to_string(),
        }))
        .into()
}

fn query_error(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("Invalid query string")
        .with_details(json!({
            "code": ErrorCode::InvalidQuery.as_str(),
            "reason": error.to_string(),
        }))
        .into()
}

/// JSON extractor settings shared by every handler.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error)
}

/// Query extractor settings shared by every handler.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

/// Deserialise a nullable patch field: absent stays `None` (with
/// `#[serde(default)]`), `null` becomes `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}
