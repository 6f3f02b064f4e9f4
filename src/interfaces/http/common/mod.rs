//! Response envelope and transport error mapping shared by all handlers

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, ErrorKind};

/// Standard API response envelope.
///
/// Success: `{"success": true, "data": ...}`,
/// failure: `{"success": false, "data": null, "errors": ["..."]}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    /// Failure reasons. Omitted on success, never empty on failure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::failure(vec![message.into()])
    }

    pub fn failure(errors: Vec<String>) -> Self {
        let errors = if errors.is_empty() {
            vec!["Request failed".to_string()]
        } else {
            errors
        };
        Self {
            success: false,
            data: None,
            errors,
        }
    }
}

/// Error half of every handler result.
pub type ApiFailure = (StatusCode, Json<ApiResponse<()>>);

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidArgument | ErrorKind::PersistenceConflict => StatusCode::BAD_REQUEST,
        ErrorKind::Unhandled => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn domain_failure(error: &DomainError) -> ApiFailure {
    (
        status_for(error.kind()),
        Json(ApiResponse::failure(error.reasons())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InvalidArgument;

    #[test]
    fn success_envelope_omits_errors() {
        let json = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 7}));
    }

    #[test]
    fn failure_envelope_is_never_empty() {
        let body = ApiResponse::<()>::failure(Vec::new());
        assert!(!body.success);
        assert_eq!(body.errors.len(), 1);
    }

    #[test]
    fn domain_errors_map_to_statuses() {
        let invalid = DomainError::from(InvalidArgument::new("email", "Invalid email address."));
        assert_eq!(domain_failure(&invalid).0, StatusCode::BAD_REQUEST);
        assert_eq!(
            domain_failure(&DomainError::PersistenceConflict("taken".into())).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_failure(&DomainError::Unhandled("boom".into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            domain_failure(&DomainError::Cancelled).0,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn failure_body_carries_reasons() {
        let (_, Json(body)) = domain_failure(&DomainError::PersistenceConflict(
            "Customer email is already registered".into(),
        ));
        assert!(body.errors[0].contains("Customer email is already registered"));
    }
}
