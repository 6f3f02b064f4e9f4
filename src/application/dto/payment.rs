//! Payment DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ChargeCustomer, CreateChargeCommand, CreateChargeResponse};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateChargeRequest {
    #[validate(length(min = 1))]
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
    pub customer: ChargeCustomerRequest,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChargeCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<CreateChargeRequest> for CreateChargeCommand {
    fn from(r: CreateChargeRequest) -> Self {
        Self {
            product_name: r.product_name,
            amount: r.amount,
            customer: ChargeCustomer {
                first_name: r.customer.first_name,
                last_name: r.customer.last_name,
                email: r.customer.email,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChargeDto {
    pub charge_id: i32,
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
}

impl From<CreateChargeResponse> for ChargeDto {
    fn from(r: CreateChargeResponse) -> Self {
        Self {
            charge_id: r.charge_id,
            product_name: r.product_name,
            amount: r.amount,
        }
    }
}
