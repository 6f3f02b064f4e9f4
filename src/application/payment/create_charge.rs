//! Pix charge creation
//!
//! Stands in for a payment gateway: waits a fixed delay, then acknowledges
//! the charge with identifier `1`. Nothing is persisted.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::application::bus::{Command, CommandHandler};
use crate::domain::{CreateChargeCommand, CreateChargeResponse, DomainError, DomainResult};
use crate::shared::shutdown::ShutdownSignal;

pub const DEFAULT_CHARGE_DELAY: Duration = Duration::from_millis(4000);

const STUB_CHARGE_ID: i32 = 1;

impl Command for CreateChargeCommand {
    type Output = CreateChargeResponse;
    const NAME: &'static str = "payments.pix.create_charge";
}

pub struct CreateChargeHandler {
    delay: Duration,
}

impl CreateChargeHandler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CreateChargeHandler {
    fn default() -> Self {
        Self::new(DEFAULT_CHARGE_DELAY)
    }
}

#[async_trait]
impl CommandHandler<CreateChargeCommand> for CreateChargeHandler {
    async fn handle(
        &self,
        command: CreateChargeCommand,
        cancel: &ShutdownSignal,
    ) -> DomainResult<CreateChargeResponse> {
        tokio::select! {
            biased;
            _ = cancel.wait() => {
                warn!(product = %command.product_name, "Pix charge cancelled");
                return Err(DomainError::Cancelled);
            }
            _ = tokio::time::sleep(self.delay) => {}
        }

        metrics::counter!("pix_charges_total").increment(1);
        info!(
            charge_id = STUB_CHARGE_ID,
            product = %command.product_name,
            amount = %command.amount,
            "Pix charge created"
        );

        Ok(CreateChargeResponse {
            charge_id: STUB_CHARGE_ID,
            product_name: command.product_name,
            amount: command.amount,
        })
    }
}
