//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;

use crate::domain::{
    CompanyIdentity, ContactPerson, Customer, CustomerRepository, DomainError, DomainResult,
    Email, Entity, EntityMeta, RepositoryProvider,
};

/// Claim `key` for `owner`, failing if another customer already holds it.
fn reserve<K: Eq + Hash>(
    index: &DashMap<K, i32>,
    key: K,
    owner: i32,
    reason: &str,
) -> DomainResult<()> {
    match index.entry(key) {
        Entry::Occupied(_) => Err(DomainError::PersistenceConflict(reason.to_string())),
        Entry::Vacant(slot) => {
            slot.insert(owner);
            Ok(())
        }
    }
}

/// In-memory customer store for development and testing.
///
/// Mirrors the unique indexes of the SQL schema: value objects hash
/// case-insensitively, so the index maps reject case variants.
pub struct InMemoryCustomerRepository {
    customers: DashMap<i32, Customer>,
    customer_emails: DashMap<Email, i32>,
    company_identities: DashMap<CompanyIdentity, i32>,
    contact_emails: DashMap<Email, i32>,
    customer_counter: AtomicI32,
    contact_counter: AtomicI32,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: DashMap::new(),
            customer_emails: DashMap::new(),
            company_identities: DashMap::new(),
            contact_emails: DashMap::new(),
            customer_counter: AtomicI32::new(1),
            contact_counter: AtomicI32::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn add(&self, customer: Customer) -> DomainResult<Customer> {
        let id = self.customer_counter.fetch_add(1, Ordering::SeqCst);
        let email = customer.email().clone();
        let identity = customer.company_identity().clone();
        let contact_email = customer.contact_person().email().clone();

        reserve(
            &self.customer_emails,
            email.clone(),
            id,
            "Customer email is already registered",
        )?;
        if let Err(e) = reserve(
            &self.company_identities,
            identity.clone(),
            id,
            "Company identity is already registered",
        ) {
            self.customer_emails.remove(&email);
            return Err(e);
        }
        if let Err(e) = reserve(
            &self.contact_emails,
            contact_email,
            id,
            "Contact person email is already registered",
        ) {
            self.customer_emails.remove(&email);
            self.company_identities.remove(&identity);
            return Err(e);
        }

        let meta = EntityMeta::rehydrate(id, customer.created_at(), customer.updated_at());
        let (name, commercial_name, email, company_identity, person) = customer.into_parts();

        let person_id = self.contact_counter.fetch_add(1, Ordering::SeqCst);
        let person_meta =
            EntityMeta::rehydrate(person_id, person.created_at(), person.updated_at());
        let (first_name, full_name, person_email, phone_number) = person.into_parts();

        let saved = Customer::from_parts(
            meta,
            name,
            commercial_name,
            email,
            company_identity,
            ContactPerson::from_parts(person_meta, first_name, full_name, person_email, phone_number),
        );

        self.customers.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Customer>> {
        Ok(self.customers.get(&id).map(|c| c.clone()))
    }
}

/// Repository provider over in-memory stores.
pub struct InMemoryRepositoryProvider {
    customers: InMemoryCustomerRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            customers: InMemoryCustomerRepository::new(),
        }
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }
}
