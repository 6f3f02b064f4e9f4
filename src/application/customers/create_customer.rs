//! Create-customer use case
//!
//! Flow: `CreateCustomerRequest` → (value-object validation) →
//! `CreateCustomerCommand` → `CreateCustomerHandler` → `CustomerRepository::add`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::application::bus::{Command, CommandHandler};
use crate::application::dto::CreateCustomerRequest;
use crate::domain::{
    CompanyIdentity, ContactPerson, Customer, DomainError, DomainResult, Email, Entity,
    InvalidArgument, RepositoryProvider,
};
use crate::shared::shutdown::ShutdownSignal;

/// Contact person fields of a validated command.
#[derive(Debug, Clone)]
pub struct ContactPersonDraft {
    pub first_name: String,
    pub full_name: String,
    pub email: Email,
    pub phone_number: String,
}

/// A create-customer request whose value objects already passed validation.
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub name: String,
    pub commercial_name: String,
    pub email: Email,
    pub company_identity: CompanyIdentity,
    pub contact_person: ContactPersonDraft,
}

impl Command for CreateCustomerCommand {
    type Output = i32;
    const NAME: &'static str = "customers.create";
}

impl TryFrom<CreateCustomerRequest> for CreateCustomerCommand {
    type Error = InvalidArgument;

    fn try_from(request: CreateCustomerRequest) -> Result<Self, Self::Error> {
        let email = Email::parse(request.email).map_err(|e| e.for_field("email"))?;
        let company_identity = CompanyIdentity::parse(request.company_identity)
            .map_err(|e| e.for_field("company_identity"))?;
        let contact = request.contact_person;
        let contact_email =
            Email::parse(contact.email).map_err(|e| e.for_field("contact_person.email"))?;

        Ok(Self {
            name: request.name,
            commercial_name: request.commercial_name,
            email,
            company_identity,
            contact_person: ContactPersonDraft {
                first_name: contact.first_name,
                full_name: contact.full_name,
                email: contact_email,
                phone_number: contact.phone_number,
            },
        })
    }
}

impl CreateCustomerCommand {
    /// Build the unpersisted aggregate. No further business rules apply.
    pub fn into_customer(self) -> Customer {
        let contact = self.contact_person;
        Customer::new(
            self.name,
            self.commercial_name,
            self.email,
            self.company_identity,
            ContactPerson::new(
                contact.first_name,
                contact.full_name,
                contact.email,
                contact.phone_number,
            ),
        )
    }
}

pub struct CreateCustomerHandler {
    repos: Arc<dyn RepositoryProvider>,
}

impl CreateCustomerHandler {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl CommandHandler<CreateCustomerCommand> for CreateCustomerHandler {
    async fn handle(
        &self,
        command: CreateCustomerCommand,
        cancel: &ShutdownSignal,
    ) -> DomainResult<i32> {
        let customer = command.into_customer();

        // Dropping the pending `add` discards its uncommitted transaction.
        let persisted = tokio::select! {
            biased;
            _ = cancel.wait() => {
                warn!("Customer creation cancelled before storage completed");
                return Err(DomainError::Cancelled);
            }
            result = self.repos.customers().add(customer) => result?,
        };

        let id = persisted.id().ok_or_else(|| {
            DomainError::Unhandled("storage returned a customer without identity".into())
        })?;

        metrics::counter!("customers_created_total").increment(1);
        info!(customer_id = id, "Customer created");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ContactPersonRequest;
    use crate::domain::CustomerRepository;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn request(email: &str, company_identity: &str) -> CreateCustomerRequest {
        CreateCustomerRequest {
            name: "Lee Industries Ltda".into(),
            commercial_name: "Lee Tools".into(),
            email: email.into(),
            company_identity: company_identity.into(),
            contact_person: ContactPersonRequest {
                first_name: "Ann".into(),
                full_name: "Ann Lee".into(),
                email: "ann@example.com".into(),
                phone_number: "+55 11 99999-0000".into(),
            },
        }
    }

    struct StallingRepository;

    #[async_trait]
    impl CustomerRepository for StallingRepository {
        async fn add(&self, _customer: Customer) -> DomainResult<Customer> {
            std::future::pending().await
        }

        async fn find_by_id(&self, _id: i32) -> DomainResult<Option<Customer>> {
            Ok(None)
        }
    }

    impl RepositoryProvider for StallingRepository {
        fn customers(&self) -> &dyn CustomerRepository {
            self
        }
    }

    #[test]
    fn mapping_builds_value_objects() {
        let command =
            CreateCustomerCommand::try_from(request("contact@lee.example", "12345678000195"))
                .unwrap();
        assert_eq!(command.email.as_str(), "contact@lee.example");
        assert_eq!(command.company_identity.as_str(), "12345678000195");
        assert_eq!(command.contact_person.email.as_str(), "ann@example.com");
    }

    #[test]
    fn mapping_rejects_invalid_email() {
        let err = CreateCustomerCommand::try_from(request("not-an-email", "12345678000195"))
            .unwrap_err();
        assert_eq!(err.param, "email");
    }

    #[test]
    fn mapping_rejects_short_company_identity() {
        let err = CreateCustomerCommand::try_from(request("contact@lee.example", "12345"))
            .unwrap_err();
        assert_eq!(err.param, "company_identity");
    }

    #[test]
    fn mapping_rejects_invalid_contact_email() {
        let mut req = request("contact@lee.example", "12345678000195");
        req.contact_person.email = "   ".into();
        let err = CreateCustomerCommand::try_from(req).unwrap_err();
        assert_eq!(err.param, "contact_person.email");
    }

    #[test]
    fn into_customer_is_unpersisted() {
        let customer =
            CreateCustomerCommand::try_from(request("contact@lee.example", "12345678000195"))
                .unwrap()
                .into_customer();
        assert_eq!(customer.id(), None);
        assert_eq!(customer.contact_person().first_name(), "Ann");
    }

    #[tokio::test]
    async fn handler_returns_assigned_identity() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let handler = CreateCustomerHandler::new(repos.clone());
        let command =
            CreateCustomerCommand::try_from(request("contact@lee.example", "12345678000195"))
                .unwrap();

        let id = handler.handle(command, &ShutdownSignal::new()).await.unwrap();
        assert!(id > 0);

        let stored = repos.customers().find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Lee Industries Ltda");
    }

    #[tokio::test]
    async fn handler_propagates_conflict() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let handler = CreateCustomerHandler::new(repos);
        let cancel = ShutdownSignal::new();

        let first =
            CreateCustomerCommand::try_from(request("dup@lee.example", "12345678000195")).unwrap();
        handler.handle(first, &cancel).await.unwrap();

        let mut second = request("DUP@lee.example", "98765432000100");
        second.name = "Someone Else".into();
        second.contact_person.email = "bo@example.com".into();
        let second = CreateCustomerCommand::try_from(second).unwrap();

        let err = handler.handle(second, &cancel).await.unwrap_err();
        assert!(matches!(err, DomainError::PersistenceConflict(_)));
    }

    #[tokio::test]
    async fn cancelled_before_storage_persists_nothing() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let handler = CreateCustomerHandler::new(repos.clone());
        let cancel = ShutdownSignal::new();
        cancel.trigger();

        let command =
            CreateCustomerCommand::try_from(request("contact@lee.example", "12345678000195"))
                .unwrap();
        let err = handler.handle(command, &cancel).await.unwrap_err();

        assert!(matches!(err, DomainError::Cancelled));
        assert_eq!(repos.customer_count(), 0);
    }

    #[tokio::test]
    async fn cancellation_interrupts_pending_storage() {
        let handler = Arc::new(CreateCustomerHandler::new(Arc::new(StallingRepository)));
        let cancel = ShutdownSignal::new();

        let task = {
            let handler = handler.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let command = CreateCustomerCommand::try_from(request(
                    "contact@lee.example",
                    "12345678000195",
                ))
                .unwrap();
                handler.handle(command, &cancel).await
            })
        };

        tokio::task::yield_now().await;
        cancel.trigger();

        let result = tokio::time::timeout(std::time::Duration::from_secs(1), task)
            .await
            .expect("handler should observe cancellation")
            .unwrap();
        assert!(matches!(result, Err(DomainError::Cancelled)));
    }
}
