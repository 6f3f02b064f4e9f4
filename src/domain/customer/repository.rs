//! Customer repository interface

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

/// Persistence boundary for the customer aggregate.
///
/// Implementations own uniqueness of the customer email, the customer
/// company identity and the contact-person email.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer together with its contact person.
    ///
    /// Returns the customer rehydrated with the storage-assigned identities
    /// and timestamps, or `PersistenceConflict` when a unique value is taken.
    async fn add(&self, customer: Customer) -> DomainResult<Customer>;

    /// Load a persisted customer with its contact person.
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Customer>>;
}
