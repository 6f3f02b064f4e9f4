//! Customer use cases

pub mod create_customer;

pub use create_customer::{ContactPersonDraft, CreateCustomerCommand, CreateCustomerHandler};
