//! Request and response shapes of the application use cases

pub mod customer;
pub mod payment;

pub use customer::*;
pub use payment::*;
