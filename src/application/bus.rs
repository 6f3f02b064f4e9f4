//! Command bus
//!
//! Routes a command to the single handler registered for its type. The
//! registry is assembled once at startup through [`CommandBusBuilder`]; a
//! second registration for the same command type is rejected.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{DomainError, DomainResult};
use crate::shared::shutdown::ShutdownSignal;

/// A typed write request with a known result type.
pub trait Command: Send + 'static {
    type Output: Send + 'static;

    /// Stable name used in logs and metrics.
    const NAME: &'static str;
}

#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// Handle the command. Implementations stop waiting and return
    /// `DomainError::Cancelled` once `cancel` fires.
    async fn handle(&self, command: C, cancel: &ShutdownSignal) -> DomainResult<C::Output>;
}

#[derive(Debug, Error)]
#[error("a handler for '{0}' is already registered")]
pub struct DuplicateHandler(pub &'static str);

type HandlerSlot = Box<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct CommandBusBuilder {
    handlers: HashMap<TypeId, (&'static str, HandlerSlot)>,
}

impl CommandBusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C: Command>(
        mut self,
        handler: Arc<dyn CommandHandler<C>>,
    ) -> Result<Self, DuplicateHandler> {
        let key = TypeId::of::<C>();
        if self.handlers.contains_key(&key) {
            return Err(DuplicateHandler(C::NAME));
        }
        info!(command = C::NAME, "Registered command handler");
        self.handlers.insert(key, (C::NAME, Box::new(handler)));
        Ok(self)
    }

    pub fn build(self) -> CommandBus {
        CommandBus {
            handlers: self.handlers,
        }
    }
}

/// Dispatches commands to their registered handlers.
pub struct CommandBus {
    handlers: HashMap<TypeId, (&'static str, HandlerSlot)>,
}

pub type SharedCommandBus = Arc<CommandBus>;

impl CommandBus {
    pub fn builder() -> CommandBusBuilder {
        CommandBusBuilder::new()
    }

    pub fn is_registered<C: Command>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<C>())
    }

    /// Names of every registered command.
    pub fn registered(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }

    pub async fn send<C: Command>(
        &self,
        command: C,
        cancel: &ShutdownSignal,
    ) -> DomainResult<C::Output> {
        let handler = self
            .handlers
            .get(&TypeId::of::<C>())
            .and_then(|(_, slot)| slot.downcast_ref::<Arc<dyn CommandHandler<C>>>())
            .ok_or_else(|| {
                DomainError::Unhandled(format!("no handler registered for '{}'", C::NAME))
            })?;

        let started = Instant::now();
        debug!(command = C::NAME, "Dispatching command");

        let result = handler.handle(command, cancel).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => debug!(command = C::NAME, elapsed_ms, "Command handled"),
            Err(e) => warn!(
                command = C::NAME,
                elapsed_ms,
                kind = e.kind().as_str(),
                error = %e,
                "Command failed"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping(u32);

    impl Command for Ping {
        type Output = u32;
        const NAME: &'static str = "ping";
    }

    struct Other;

    impl Command for Other {
        type Output = ();
        const NAME: &'static str = "other";
    }

    struct Doubler;

    #[async_trait]
    impl CommandHandler<Ping> for Doubler {
        async fn handle(&self, command: Ping, _cancel: &ShutdownSignal) -> DomainResult<u32> {
            Ok(command.0 * 2)
        }
    }

    #[tokio::test]
    async fn routes_command_to_registered_handler() {
        let bus = CommandBus::builder()
            .register::<Ping>(Arc::new(Doubler))
            .unwrap()
            .build();

        let out = bus.send(Ping(21), &ShutdownSignal::new()).await.unwrap();
        assert_eq!(out, 42);
        assert!(bus.is_registered::<Ping>());
        assert!(!bus.is_registered::<Other>());
        assert_eq!(bus.registered(), vec!["ping"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let err = CommandBus::builder()
            .register::<Ping>(Arc::new(Doubler))
            .unwrap()
            .register::<Ping>(Arc::new(Doubler))
            .err()
            .unwrap();
        assert_eq!(err.0, "ping");
    }

    #[tokio::test]
    async fn unregistered_command_is_unhandled() {
        let bus = CommandBus::builder().build();
        let err = bus.send(Other, &ShutdownSignal::new()).await.unwrap_err();
        assert!(matches!(err, DomainError::Unhandled(msg) if msg.contains("other")));
    }
}
