//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set, SqlErr,
    TransactionTrait,
};
use tracing::{debug, warn};

use crate::domain::{
    CompanyIdentity, ContactPerson, Customer, CustomerRepository, DomainError, DomainResult,
    Email, Entity, EntityMeta, InvalidArgument,
};
use crate::infrastructure::database::entities::{contact_person, customer};

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Unique-index violations become conflicts; everything else is unhandled.
///
/// The unique indexes live on the `*_key` columns, so SQLite reports e.g.
/// `customers.email_key`; matching on the column prefix covers both.
fn db_err(e: DbErr) -> DomainError {
    let message = e.to_string();
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            DomainError::PersistenceConflict(conflict_reason(&detail))
        }
        _ if message.contains("UNIQUE") => {
            DomainError::PersistenceConflict(conflict_reason(&message))
        }
        _ => DomainError::Unhandled(format!("Database error: {}", message)),
    }
}

fn conflict_reason(detail: &str) -> String {
    if detail.contains("contact_persons.email") {
        "Contact person email is already registered".to_string()
    } else if detail.contains("customers.email") {
        "Customer email is already registered".to_string()
    } else if detail.contains("customers.company_identity") {
        "Company identity is already registered".to_string()
    } else {
        detail.to_string()
    }
}

fn corrupt_row(e: InvalidArgument) -> DomainError {
    DomainError::Unhandled(format!("Stored row failed validation: {}", e))
}

fn to_domain(row: customer::Model, contact: contact_person::Model) -> DomainResult<Customer> {
    let person = ContactPerson::from_parts(
        EntityMeta::rehydrate(contact.id, contact.created_at, contact.updated_at),
        contact.first_name,
        contact.full_name,
        Email::parse(contact.email).map_err(corrupt_row)?,
        contact.phone_number,
    );

    Ok(Customer::from_parts(
        EntityMeta::rehydrate(row.id, row.created_at, row.updated_at),
        row.name,
        row.commercial_name,
        Email::parse(row.email).map_err(corrupt_row)?,
        CompanyIdentity::parse(row.company_identity).map_err(corrupt_row)?,
        person,
    ))
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn add(&self, customer: Customer) -> DomainResult<Customer> {
        let (created_at, updated_at) = (customer.created_at(), customer.updated_at());
        let (name, commercial_name, email, company_identity, person) = customer.into_parts();
        let (person_created_at, person_updated_at) = (person.created_at(), person.updated_at());
        let (first_name, full_name, person_email, phone_number) = person.into_parts();

        // Rolled back on drop unless committed.
        let txn = self.db.begin().await.map_err(db_err)?;

        let contact = contact_person::ActiveModel {
            id: NotSet,
            first_name: Set(first_name),
            full_name: Set(full_name),
            email_key: Set(person_email.key()),
            email: Set(person_email.into_inner()),
            phone_number: Set(phone_number),
            created_at: Set(person_created_at),
            updated_at: Set(person_updated_at),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        let row = customer::ActiveModel {
            id: NotSet,
            name: Set(name),
            commercial_name: Set(commercial_name),
            email_key: Set(email.key()),
            email: Set(email.into_inner()),
            company_identity_key: Set(company_identity.key()),
            company_identity: Set(company_identity.into_inner()),
            contact_person_id: Set(contact.id),
            created_at: Set(created_at),
            updated_at: Set(updated_at),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        debug!(
            customer_id = row.id,
            contact_person_id = contact.id,
            "Customer row inserted"
        );
        to_domain(row, contact)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Customer>> {
        let found = customer::Entity::find_by_id(id)
            .find_also_related(contact_person::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match found {
            Some((row, Some(contact))) => to_domain(row, contact).map(Some),
            Some((row, None)) => {
                warn!(customer_id = row.id, "Customer has no contact person row");
                Err(DomainError::Unhandled(format!(
                    "customer {} is missing its contact person",
                    row.id
                )))
            }
            None => Ok(None),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::{Migrator, MigratorTrait};
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use sea_orm::PaginatorTrait;

    async fn repository() -> SeaOrmCustomerRepository {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmCustomerRepository::new(db)
    }

    fn sample_customer(email: &str, identity: &str, contact_email: &str) -> Customer {
        Customer::new(
            "Lee Industries Ltda",
            "Lee Tools",
            Email::parse(email).unwrap(),
            CompanyIdentity::parse(identity).unwrap(),
            ContactPerson::new(
                "Ann",
                "Ann Lee",
                Email::parse(contact_email).unwrap(),
                "+55 11 99999-0000",
            ),
        )
    }

    async fn counts(repo: &SeaOrmCustomerRepository) -> (u64, u64) {
        (
            customer::Entity::find().count(&repo.db).await.unwrap(),
            contact_person::Entity::find().count(&repo.db).await.unwrap(),
        )
    }

    #[tokio::test]
    async fn add_assigns_identities() {
        let repo = repository().await;
        let saved = repo
            .add(sample_customer("contact@lee.example", "12345678000195", "ann@example.com"))
            .await
            .unwrap();

        assert!(saved.id().unwrap() > 0);
        assert!(saved.contact_person().id().unwrap() > 0);
        assert_eq!(saved.email().as_str(), "contact@lee.example");
        assert_eq!(counts(&repo).await, (1, 1));
    }

    #[tokio::test]
    async fn find_by_id_rehydrates_the_aggregate() {
        let repo = repository().await;
        let saved = repo
            .add(sample_customer("contact@lee.example", "12345678000195", "ann@example.com"))
            .await
            .unwrap();

        let loaded = repo.find_by_id(saved.id().unwrap()).await.unwrap().unwrap();
        assert_eq!(loaded.id(), saved.id());
        assert_eq!(loaded.name(), "Lee Industries Ltda");
        assert_eq!(loaded.company_identity().as_str(), "12345678000195");
        assert_eq!(loaded.contact_person().full_name(), "Ann Lee");
        assert_eq!(loaded.contact_person().id(), saved.contact_person().id());
        assert_eq!(loaded.created_at(), saved.created_at());
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_customer() {
        let repo = repository().await;
        assert!(repo.find_by_id(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_differing_in_case_conflicts() {
        let repo = repository().await;
        repo.add(sample_customer("dup@lee.example", "12345678000195", "ann@example.com"))
            .await
            .unwrap();

        let err = repo
            .add(sample_customer("DUP@Lee.Example", "98765432000100", "bo@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PersistenceConflict(_)));
        assert_eq!(counts(&repo).await, (1, 1));
    }

    #[tokio::test]
    async fn duplicate_company_identity_conflicts() {
        let repo = repository().await;
        repo.add(sample_customer("a@lee.example", "ABCDEFGHIJKLMN", "ann@example.com"))
            .await
            .unwrap();

        let err = repo
            .add(sample_customer("b@lee.example", "abcdefghijklmn", "bo@example.com"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, DomainError::PersistenceConflict(ref reason) if reason.contains("Company identity"))
        );
    }

    #[tokio::test]
    async fn duplicate_contact_email_leaves_no_partial_rows() {
        let repo = repository().await;
        repo.add(sample_customer("a@lee.example", "12345678000195", "ann@example.com"))
            .await
            .unwrap();

        let err = repo
            .add(sample_customer("b@lee.example", "98765432000100", "ANN@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PersistenceConflict(_)));
        assert_eq!(counts(&repo).await, (1, 1));
    }

    #[tokio::test]
    async fn conflict_on_customer_row_rolls_back_contact_person() {
        let repo = repository().await;
        repo.add(sample_customer("a@lee.example", "12345678000195", "ann@example.com"))
            .await
            .unwrap();

        // Fresh contact email, taken customer email: the contact insert
        // succeeds inside the transaction and must be discarded.
        let err = repo
            .add(sample_customer("a@lee.example", "98765432000100", "new@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PersistenceConflict(_)));
        assert_eq!(counts(&repo).await, (1, 1));
    }

    #[tokio::test]
    async fn non_ascii_case_variant_conflicts() {
        let repo = repository().await;
        repo.add(sample_customer("a@lee.example", "12345678000195", "änn@x.io"))
            .await
            .unwrap();

        let err = repo
            .add(sample_customer("b@lee.example", "98765432000100", "ÄNN@x.io"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, DomainError::PersistenceConflict(ref reason) if reason.contains("Contact person email"))
        );
        assert_eq!(counts(&repo).await, (1, 1));
    }

    #[tokio::test]
    async fn expanding_uppercase_is_not_a_case_variant() {
        let repo = repository().await;
        repo.add(sample_customer("straße@x.de", "12345678000195", "ann@example.com"))
            .await
            .unwrap();

        repo.add(sample_customer("STRASSE@x.de", "98765432000100", "bo@example.com"))
            .await
            .unwrap();

        assert_eq!(counts(&repo).await, (2, 2));
    }

    #[tokio::test]
    async fn stored_rows_keep_original_spelling_and_folded_key() {
        let repo = repository().await;
        let saved = repo
            .add(sample_customer("Mixed@Lee.Example", "abcdefghijklmn", "Ann@Example.com"))
            .await
            .unwrap();

        let row = customer::Entity::find_by_id(saved.id().unwrap())
            .one(&repo.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.email, "Mixed@Lee.Example");
        assert_eq!(row.email_key, "MIXED@LEE.EXAMPLE");
        assert_eq!(row.company_identity_key, "ABCDEFGHIJKLMN");
    }

    #[test]
    fn non_unique_errors_are_unhandled() {
        let err = db_err(DbErr::Custom("disk I/O error".into()));
        assert!(matches!(err, DomainError::Unhandled(_)));
    }

    #[test]
    fn conflict_reason_names_the_taken_value() {
        assert_eq!(
            conflict_reason("UNIQUE constraint failed: customers.email_key"),
            "Customer email is already registered"
        );
        assert_eq!(
            conflict_reason("UNIQUE constraint failed: contact_persons.email_key"),
            "Contact person email is already registered"
        );
        assert_eq!(
            conflict_reason("UNIQUE constraint failed: customers.company_identity_key"),
            "Company identity is already registered"
        );
    }
}
