//! Database entities module

pub mod contact_person;
pub mod customer;

pub use contact_person::Entity as ContactPerson;
pub use customer::Entity as Customer;
