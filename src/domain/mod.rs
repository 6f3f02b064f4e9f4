//! Domain layer: entities, value objects and repository contracts

pub mod customer;
pub mod entity;
pub mod payment;
pub mod repositories;
pub mod value_objects;

pub use customer::{ContactPerson, Customer, CustomerRepository};
pub use entity::{Entity, EntityMeta};
pub use payment::{ChargeCustomer, CreateChargeCommand, CreateChargeResponse};
pub use repositories::{DomainResult, RepositoryProvider};
pub use value_objects::{CompanyIdentity, Email};

pub use crate::shared::errors::{DomainError, ErrorKind, InvalidArgument};
