//! Payment module model (Pix charges)

pub mod model;

pub use model::{ChargeCustomer, CreateChargeCommand, CreateChargeResponse};
