//! Supabase store client
//!
//! Talks to the hosted store's PostgREST surface. Row filters use the
//! `id=eq.<id>` query convention; inserts and updates ask for the affected
//! rows back with `Prefer: return=representation`.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};

use super::{ReminderStore, StoreError};
use crate::api::types::{NewReminder, Reminder, ReminderPatch};

const TABLE: &str = "lembretes";

/// Client for the remote reminder table
pub struct SupabaseStore {
    http: Client,
    base: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(url: &str, key: &str) -> Self {
        Self {
            http: Client::new(),
            base: format!("{}/rest/v1/{TABLE}", url.trim_end_matches('/')),
            key: key.to_string(),
        }
    }

    /// Request against the table with the project key attached
    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, &self.base)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }
}

/// Turn non-2xx store responses into `StoreError::Rejected`
async fn checked(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected { status, body })
    }
}

#[async_trait]
impl ReminderStore for SupabaseStore {
    async fn list(&self, limit: usize) -> Result<Vec<Reminder>, StoreError> {
        let limit = limit.to_string();
        let response = self
            .request(Method::GET)
            .query(&[
                ("select", "*"),
                ("order", "createdAt.desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    async fn insert(&self, new: &NewReminder) -> Result<Option<Reminder>, StoreError> {
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&[new])
            .send()
            .await?;
        let rows: Vec<Reminder> = checked(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn update(
        &self,
        id: &str,
        patch: &ReminderPatch,
    ) -> Result<Option<Reminder>, StoreError> {
        let response = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        let rows: Vec<Reminder> = checked(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        checked(response).await?;
        Ok(())
    }
}
