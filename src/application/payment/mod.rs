//! Pix payment use cases

pub mod create_charge;

pub use create_charge::{CreateChargeHandler, DEFAULT_CHARGE_DELAY};
