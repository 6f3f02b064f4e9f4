//! Pix charge handler

use axum::{extract::State, Json};

use crate::application::dto::{ChargeDto, CreateChargeRequest};
use crate::application::SharedCommandBus;
use crate::domain::CreateChargeCommand;
use crate::interfaces::http::common::{domain_failure, ApiFailure, ApiResponse, ValidatedJson};
use crate::shared::shutdown::ShutdownSignal;

#[derive(Clone)]
pub struct PaymentHandlerState {
    pub bus: SharedCommandBus,
    pub cancel: ShutdownSignal,
}

#[utoipa::path(
    post,
    path = "/api/v1/payments/pix/charges",
    tag = "Payments",
    request_body = CreateChargeRequest,
    responses(
        (status = 200, description = "Charge acknowledged", body = ChargeDto),
        (status = 422, description = "Request shape validation failed", body = ApiResponse<String>),
        (status = 503, description = "Server is shutting down", body = ApiResponse<String>)
    )
)]
pub async fn create_charge(
    State(state): State<PaymentHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateChargeRequest>,
) -> Result<Json<ChargeDto>, ApiFailure> {
    let response = state
        .bus
        .send(CreateChargeCommand::from(request), &state.cancel)
        .await
        .map_err(|e| domain_failure(&e))?;

    Ok(Json(ChargeDto::from(response)))
}
