//! Customer aggregate
//!
//! Contains the Customer root, its owned ContactPerson, and the repository interface.

pub mod model;
pub mod repository;

pub use model::{ContactPerson, Customer};
pub use repository::CustomerRepository;
