//! Customer API handlers
//!
//! Creation goes through the command bus; lookup reads the repository
//! directly.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::application::dto::{CreateCustomerRequest, CustomerDto};
use crate::application::{CreateCustomerCommand, SharedCommandBus};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{domain_failure, ApiFailure, ApiResponse, ValidatedJson};
use crate::shared::shutdown::ShutdownSignal;

#[derive(Clone)]
pub struct CustomerHandlerState {
    pub bus: SharedCommandBus,
    pub repos: Arc<dyn RepositoryProvider>,
    pub cancel: ShutdownSignal,
}

fn creation_failed(error: DomainError) -> ApiFailure {
    metrics::counter!("customer_create_failures_total", "kind" => error.kind().as_str())
        .increment(1);
    domain_failure(&error)
}

#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "Customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer created; data is the new identity", body = ApiResponse<i32>),
        (status = 400, description = "Invalid email/company identity, or a unique value is taken", body = ApiResponse<String>),
        (status = 422, description = "Request shape validation failed", body = ApiResponse<String>),
        (status = 500, description = "Unexpected storage failure", body = ApiResponse<String>),
        (status = 503, description = "Server is shutting down", body = ApiResponse<String>)
    )
)]
pub async fn create_customer(
    State(state): State<CustomerHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<i32>>, ApiFailure> {
    let command = CreateCustomerCommand::try_from(request)
        .map_err(|e| creation_failed(DomainError::from(e)))?;

    let id = state
        .bus
        .send(command, &state.cancel)
        .await
        .map_err(creation_failed)?;

    Ok(Json(ApiResponse::success(id)))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer identity")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_customer(
    State(state): State<CustomerHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CustomerDto>>, ApiFailure> {
    match state.repos.customers().find_by_id(id).await {
        Ok(Some(customer)) => Ok(Json(ApiResponse::success(CustomerDto::from(&customer)))),
        Ok(None) => {
            debug!(customer_id = id, "Customer not found");
            Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Customer '{}' not found", id))),
            ))
        }
        Err(e) => Err(domain_failure(&e)),
    }
}
