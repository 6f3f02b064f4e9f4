//! Customer DTOs
//!
//! Request shapes are untrusted: the `validator` rules only bound lengths to
//! the column limits. Email and company identity are validated by the value
//! objects when the request is mapped into a command.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ContactPerson, Customer, Entity};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    /// Legal name
    #[validate(length(max = 50))]
    pub name: String,
    /// Commercial ("fantasy") name
    #[validate(length(max = 100))]
    pub commercial_name: String,
    #[validate(length(max = 50))]
    pub email: String,
    /// Company registration number, at least 14 characters
    #[validate(length(max = 20))]
    pub company_identity: String,
    #[validate(nested)]
    pub contact_person: ContactPersonRequest,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactPersonRequest {
    #[validate(length(max = 20))]
    pub first_name: String,
    #[validate(length(max = 50))]
    pub full_name: String,
    #[validate(length(max = 50))]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactPersonDto {
    pub id: Option<i32>,
    pub first_name: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ContactPerson> for ContactPersonDto {
    fn from(p: &ContactPerson) -> Self {
        Self {
            id: p.id(),
            first_name: p.first_name().to_string(),
            full_name: p.full_name().to_string(),
            email: p.email().to_string(),
            phone_number: p.phone_number().to_string(),
            created_at: p.created_at(),
            updated_at: p.updated_at(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    pub id: Option<i32>,
    pub name: String,
    pub commercial_name: String,
    pub email: String,
    pub company_identity: String,
    pub contact_person: ContactPersonDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id(),
            name: c.name().to_string(),
            commercial_name: c.commercial_name().to_string(),
            email: c.email().to_string(),
            company_identity: c.company_identity().to_string(),
            contact_person: ContactPersonDto::from(c.contact_person()),
            created_at: c.created_at(),
            updated_at: c.updated_at(),
        }
    }
}
