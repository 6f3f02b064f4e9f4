//! Pix charge command and response

use rust_decimal::Decimal;

/// Customer descriptor embedded in a charge request. Not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateChargeCommand {
    pub product_name: String,
    pub amount: Decimal,
    pub customer: ChargeCustomer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateChargeResponse {
    pub charge_id: i32,
    pub product_name: String,
    pub amount: Decimal,
}
