//! In-memory reminder store
//!
//! Substitute `ReminderStore` implementation for tests and development.
//! Mirrors the remote semantics: newest-first listing with a row cap, and
//! deletes of absent rows succeed (a non-matching filter is a no-op).

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ReminderStore, StoreError};
use crate::api::types::{NewReminder, Reminder, ReminderPatch};

pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    rows: Vec<Reminder>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReminderStore for MemoryStore {
    async fn list(&self, limit: usize) -> Result<Vec<Reminder>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows = inner.rows.clone();
        // Newest first; id breaks creation-time ties
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        rows.truncate(limit);
        Ok(rows)
    }

    async fn insert(&self, new: &NewReminder) -> Result<Option<Reminder>, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let row = new.clone().into_reminder(id);
        inner.rows.push(row.clone());
        Ok(Some(row))
    }

    async fn update(
        &self,
        id: &str,
        patch: &ReminderPatch,
    ) -> Result<Option<Reminder>, StoreError> {
        let Ok(id) = id.parse::<i64>() else {
            return Ok(None);
        };
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        if let Some(ref text) = patch.text {
            row.text = text.clone();
        }
        if let Some(ref status) = patch.status {
            row.status = status.clone();
        }
        row.updated_at = Some(patch.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        if let Ok(id) = id.parse::<i64>() {
            let mut inner = self.inner.write().await;
            inner.rows.retain(|row| row.id != id);
        }
        Ok(())
    }
}
