//! Reminder persistence module
//!
//! The router talks to storage through the `ReminderStore` trait. The
//! Supabase client is the production implementation; `MemoryStore` is the
//! substitute for tests and development. Callers treat every `StoreError`
//! as a uniform "store unavailable" signal and fall back to fabricated
//! responses; the variants exist for diagnostics only.

mod memory;
mod supabase;

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::api::types::{NewReminder, Reminder, ReminderPatch};

/// Failures reported by a reminder store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to store failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store rejected the request: HTTP {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage operations behind the reminder API
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Fetch reminders, newest first, capped at `limit` rows
    async fn list(&self, limit: usize) -> Result<Vec<Reminder>, StoreError>;

    /// Insert a reminder, returning the stored row when the store hands it back
    async fn insert(&self, new: &NewReminder) -> Result<Option<Reminder>, StoreError>;

    /// Apply a partial update to the row with the given id; `None` when nothing matches
    async fn update(&self, id: &str, patch: &ReminderPatch)
        -> Result<Option<Reminder>, StoreError>;

    /// Delete the row with the given id; deleting an absent row is not an error
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
