//! Customer domain entities

use crate::domain::entity::{Entity, EntityMeta};
use crate::domain::value_objects::{CompanyIdentity, Email};

/// The person a customer company designates as its point of contact.
#[derive(Debug, Clone)]
pub struct ContactPerson {
    meta: EntityMeta,
    first_name: String,
    full_name: String,
    email: Email,
    phone_number: String,
}

impl ContactPerson {
    pub fn new(
        first_name: impl Into<String>,
        full_name: impl Into<String>,
        email: Email,
        phone_number: impl Into<String>,
    ) -> Self {
        Self::from_parts(EntityMeta::new(), first_name, full_name, email, phone_number)
    }

    pub fn with_id(
        id: i32,
        first_name: impl Into<String>,
        full_name: impl Into<String>,
        email: Email,
        phone_number: impl Into<String>,
    ) -> Self {
        Self::from_parts(EntityMeta::with_id(id), first_name, full_name, email, phone_number)
    }

    /// Rebuild from storage with an explicit audit trail.
    pub fn from_parts(
        meta: EntityMeta,
        first_name: impl Into<String>,
        full_name: impl Into<String>,
        email: Email,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            meta,
            first_name: first_name.into(),
            full_name: full_name.into(),
            email,
            phone_number: phone_number.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn into_parts(self) -> (String, String, Email, String) {
        (self.first_name, self.full_name, self.email, self.phone_number)
    }
}

impl Entity for ContactPerson {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

/// Customer company, the aggregate root.
///
/// Every attribute is write-once. The contact person is owned exclusively
/// and has no back-reference.
#[derive(Debug, Clone)]
pub struct Customer {
    meta: EntityMeta,
    name: String,
    commercial_name: String,
    email: Email,
    company_identity: CompanyIdentity,
    contact_person: ContactPerson,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        commercial_name: impl Into<String>,
        email: Email,
        company_identity: CompanyIdentity,
        contact_person: ContactPerson,
    ) -> Self {
        Self::from_parts(
            EntityMeta::new(),
            name,
            commercial_name,
            email,
            company_identity,
            contact_person,
        )
    }

    pub fn with_id(
        id: i32,
        name: impl Into<String>,
        commercial_name: impl Into<String>,
        email: Email,
        company_identity: CompanyIdentity,
        contact_person: ContactPerson,
    ) -> Self {
        Self::from_parts(
            EntityMeta::with_id(id),
            name,
            commercial_name,
            email,
            company_identity,
            contact_person,
        )
    }

    /// Rebuild from storage with an explicit audit trail.
    pub fn from_parts(
        meta: EntityMeta,
        name: impl Into<String>,
        commercial_name: impl Into<String>,
        email: Email,
        company_identity: CompanyIdentity,
        contact_person: ContactPerson,
    ) -> Self {
        Self {
            meta,
            name: name.into(),
            commercial_name: commercial_name.into(),
            email,
            company_identity,
            contact_person,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn commercial_name(&self) -> &str {
        &self.commercial_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn company_identity(&self) -> &CompanyIdentity {
        &self.company_identity
    }

    pub fn contact_person(&self) -> &ContactPerson {
        &self.contact_person
    }

    /// Split into parts, e.g. for a repository to rebuild it with a
    /// storage-assigned identity.
    pub fn into_parts(self) -> (String, String, Email, CompanyIdentity, ContactPerson) {
        (
            self.name,
            self.commercial_name,
            self.email,
            self.company_identity,
            self.contact_person,
        )
    }
}

impl Entity for Customer {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

// ── Tests ──────────────────────────────────────────────────────
