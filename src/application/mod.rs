//! Application layer: command bus, use-case handlers and DTOs

pub mod bus;
pub mod customers;
pub mod dto;
pub mod payment;

use std::sync::Arc;
use std::time::Duration;

pub use bus::{Command, CommandBus, CommandBusBuilder, CommandHandler, DuplicateHandler, SharedCommandBus};
pub use customers::{CreateCustomerCommand, CreateCustomerHandler};
pub use payment::CreateChargeHandler;

use crate::domain::{CreateChargeCommand, RepositoryProvider};

/// Register every use case of the service on a fresh bus.
pub fn build_command_bus(
    repos: Arc<dyn RepositoryProvider>,
    charge_delay: Duration,
) -> Result<CommandBus, DuplicateHandler> {
    Ok(CommandBus::builder()
        .register::<CreateCustomerCommand>(Arc::new(CreateCustomerHandler::new(repos)))?
        .register::<CreateChargeCommand>(Arc::new(CreateChargeHandler::new(charge_delay)))?
        .build())
}
