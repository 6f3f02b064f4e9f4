//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to the per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::customer::CustomerRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let customer = repos.customers().find_by_id(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn customers(&self) -> &dyn CustomerRepository;
}
