//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. Malformed
//! JSON (syntax or missing/mistyped fields) is answered with 400; a
//! request that parses but breaks a shape rule is answered with 422 and one
//! reason per offending field, nested fields included.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use super::ApiResponse;

/// An extractor that deserializes JSON and validates it.
///
/// ```ignore
/// async fn handler(ValidatedJson(body): ValidatedJson<CreateCustomerRequest>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
pub enum ValidatedJsonRejection {
    JsonError(JsonRejection),
    ValidationError(ValidationErrors),
}

/// Flatten validator output into `path: message` lines.
fn collect_reasons(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", path, msg)
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_reasons(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_reasons(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection.body_text()));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::ValidationError(errors) => {
                let mut reasons = Vec::new();
                collect_reasons("", &errors, &mut reasons);
                reasons.sort();
                let body = ApiResponse::<()>::failure(reasons);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::CreateCustomerRequest;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;

    async fn handler(ValidatedJson(_body): ValidatedJson<CreateCustomerRequest>) -> &'static str {
        "ok"
    }

    fn body() -> serde_json::Value {
        serde_json::json!({
            "name": "Lee Industries Ltda",
            "commercial_name": "Lee Tools",
            "email": "contact@lee.example",
            "company_identity": "12345678000195",
            "contact_person": {
                "first_name": "Ann",
                "full_name": "Ann Lee",
                "email": "ann@example.com",
                "phone_number": "+55 11 99999-0000"
            }
        })
    }

    async fn send(payload: Body) -> Response {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(payload)
            .unwrap();
        Router::new()
            .route("/test", post(handler))
            .oneshot(req)
            .await
            .unwrap()
    }

    async fn errors_of(resp: Response) -> Vec<String> {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiResponse<()> = serde_json::from_slice(&bytes).unwrap();
        body.errors
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let resp = send(Body::from(body().to_string())).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let resp = send(Body::from("not json")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_field_returns_400() {
        let mut payload = body();
        payload.as_object_mut().unwrap().remove("email");
        let resp = send(Body::from(payload.to_string())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn overlong_field_returns_422() {
        let mut payload = body();
        payload["name"] = serde_json::json!("x".repeat(51));
        let resp = send(Body::from(payload.to_string())).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let errors = errors_of(resp).await;
        assert!(errors[0].starts_with("name:"));
    }

    #[tokio::test]
    async fn nested_field_errors_carry_their_path() {
        let mut payload = body();
        payload["contact_person"]["phone_number"] = serde_json::json!("9".repeat(21));
        let resp = send(Body::from(payload.to_string())).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let errors = errors_of(resp).await;
        assert!(errors
            .iter()
            .any(|e| e.starts_with("contact_person.phone_number:")));
    }
}
