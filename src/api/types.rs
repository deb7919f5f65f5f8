//! Request/response types for the reminder API
//!
//! All wire names are camelCase; the same shapes travel to the store and
//! back to HTTP callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner recorded when a create request does not name one
pub const DEFAULT_OWNER: &str = "pwa-user";

/// Status stamped on every newly created reminder
pub const STATUS_ACTIVE: &str = "active";

/// A stored reminder row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: i64,
    pub text: String,
    pub owner_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// Set by updates only; omitted from JSON until then
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload - everything but the id, which the store assigns
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub text: String,
    pub owner_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl NewReminder {
    /// Materialize the row the store would have returned for this insert
    pub fn into_reminder(self, id: i64) -> Reminder {
        Reminder {
            id,
            text: self.text,
            owner_id: self.owner_id,
            status: self.status,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}

/// Partial update payload; absent fields are left untouched by the store
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Body accepted by `POST /api/lembretes`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminder {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// Body accepted by `PUT /api/lembretes/{id}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminder {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Envelope for a successful list
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Reminder>,
}

/// Envelope for create/update results carrying a single row
#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub success: bool,
    pub message: String,
    /// Omitted when the store did not hand the row back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Reminder>,
}

/// Minimal envelope for confirmations and validation errors
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}
