use thiserror::Error;

/// A value object rejected its raw input.
///
/// Carries the name of the offending parameter so callers can point the
/// client at the right field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} (parameter '{param}')")]
pub struct InvalidArgument {
    pub param: String,
    pub reason: String,
}

impl InvalidArgument {
    pub fn new(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Re-point the error at a request field, e.g. `contact_person.email`.
    pub fn for_field(self, field: impl Into<String>) -> Self {
        Self {
            param: field.into(),
            reason: self.reason,
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Already exists: {0}")]
    PersistenceConflict(String),

    #[error("Unhandled: {0}")]
    Unhandled(String),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Coarse classification used for metrics labels and status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    PersistenceConflict,
    Unhandled,
    Cancelled,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::PersistenceConflict => "persistence_conflict",
            Self::Unhandled => "unhandled",
            Self::Cancelled => "cancelled",
        }
    }
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::PersistenceConflict(_) => ErrorKind::PersistenceConflict,
            Self::Unhandled(_) => ErrorKind::Unhandled,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Human-readable reasons for the failure envelope. Never empty.
    pub fn reasons(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}
