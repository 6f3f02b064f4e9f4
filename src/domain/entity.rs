//! Identity and audit trail shared by every domain entity

use chrono::{DateTime, Utc};

/// Storage-assigned identity plus audit timestamps.
///
/// The identity is `None` until the entity has been persisted. There is no
/// setter for the identity or the creation time; a persisted entity is
/// produced by rehydrating a fresh value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    id: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EntityMeta {
    /// Unpersisted entity; both timestamps are "now".
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Known identity with fresh timestamps.
    pub fn with_id(id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Some(id),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full rehydration from a persisted row.
    ///
    /// `updated_at` is clamped to `created_at` so the audit trail never runs
    /// backwards.
    pub fn rehydrate(id: i32, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Refresh `updated_at`. Reserved for update paths; creation never calls it.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything with an [`EntityMeta`]. Entities compare by identity, not value.
pub trait Entity {
    fn meta(&self) -> &EntityMeta;

    fn id(&self) -> Option<i32> {
        self.meta().id()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.meta().created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.meta().updated_at()
    }
}
