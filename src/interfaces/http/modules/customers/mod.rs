//! Customers module — customer registration and lookup

pub mod handlers;

pub use handlers::*;
