//! Payments module — Pix charges

pub mod handlers;

pub use handlers::*;
