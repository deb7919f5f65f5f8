// Reminder operation handlers module
//
// One function per routed operation. Store-touching handlers build their
// primary payload first and fall back to a synthesized offline payload on
// any store error; the error never escapes the handler.

use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::{json, Map, Value};

use super::response::json_response;
use super::types::{
    CreateReminder, ListResponse, NewReminder, Reminder, ReminderPatch, ReminderResponse,
    StatusResponse, UpdateReminder, DEFAULT_OWNER, STATUS_ACTIVE,
};
use crate::config::AppState;
use crate::logger;

/// Maximum rows returned by the list operation
const LIST_LIMIT: usize = 50;

/// `GET /` and `GET /api` - static health payload, no store access
pub fn health() -> Response<Full<Bytes>> {
    let body = json!({
        "success": true,
        "message": "🚀 Mind It PWA API online!",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "endpoints": {
            "GET": "/api/lembretes - list reminders",
            "POST": "/api/lembretes - create a reminder",
            "PUT": "/api/lembretes/:id - update a reminder",
            "DELETE": "/api/lembretes/:id - delete a reminder",
        },
    });
    json_response(StatusCode::OK, &body)
}

/// `GET /api/lembretes` - newest first, capped at `LIST_LIMIT`
pub async fn list(state: &AppState) -> Response<Full<Bytes>> {
    match state.store.list(LIST_LIMIT).await {
        Ok(data) => json_response(
            StatusCode::OK,
            &ListResponse {
                success: true,
                count: data.len(),
                data,
            },
        ),
        Err(e) => {
            logger::log_store_error("list", &e);
            // No count in the offline shape
            let body = json!({
                "success": true,
                "message": "Offline mode - serving mock data",
                "data": mock_reminders(),
            });
            json_response(StatusCode::OK, &body)
        }
    }
}

/// `POST /api/lembretes` - validate, build the row once, then insert
///
/// The record is fully shaped (trim, owner default, status, createdAt)
/// before the store attempt, so the offline fallback carries the same
/// field values under a timestamp-derived id.
pub async fn create(state: &AppState, body: &Bytes) -> Response<Full<Bytes>> {
    let request: CreateReminder = serde_json::from_slice(body).unwrap_or_default();

    let text = request.text.as_deref().unwrap_or("").trim();
    if text.is_empty() {
        return json_response(
            StatusCode::BAD_REQUEST,
            &StatusResponse {
                success: false,
                message: "Reminder text is required".to_string(),
            },
        );
    }

    let new = NewReminder {
        text: text.to_string(),
        owner_id: request
            .owner_id
            .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
        status: STATUS_ACTIVE.to_string(),
        created_at: Utc::now(),
    };

    match state.store.insert(&new).await {
        Ok(row) => json_response(
            StatusCode::CREATED,
            &ReminderResponse {
                success: true,
                message: "Reminder created successfully!".to_string(),
                data: row,
            },
        ),
        Err(e) => {
            logger::log_store_error("insert", &e);
            let local = new.into_reminder(Utc::now().timestamp_millis());
            json_response(
                StatusCode::CREATED,
                &ReminderResponse {
                    success: true,
                    message: "Reminder saved locally (offline mode)".to_string(),
                    data: Some(local),
                },
            )
        }
    }
}

/// `PUT /api/lembretes/{id}` - partial update, stamping `updatedAt`
///
/// An unparseable body becomes an empty patch. The offline fallback echoes
/// the raw body keys merged over the path id, with no `updatedAt` stamp.
pub async fn update(state: &AppState, id: &str, body: &Bytes) -> Response<Full<Bytes>> {
    let request: UpdateReminder = serde_json::from_slice(body).unwrap_or_default();
    let patch = ReminderPatch {
        text: request.text,
        status: request.status,
        updated_at: Utc::now(),
    };

    match state.store.update(id, &patch).await {
        Ok(row) => json_response(
            StatusCode::OK,
            &ReminderResponse {
                success: true,
                message: "Reminder updated".to_string(),
                data: row,
            },
        ),
        Err(e) => {
            logger::log_store_error("update", &e);
            let mut merged = Map::new();
            merged.insert("id".to_string(), Value::String(id.to_string()));
            if let Ok(Value::Object(raw)) = serde_json::from_slice(body) {
                merged.extend(raw);
            }
            let body = json!({
                "success": true,
                "message": "Update simulated (offline)",
                "data": Value::Object(merged),
            });
            json_response(StatusCode::OK, &body)
        }
    }
}

/// `DELETE /api/lembretes/{id}`
pub async fn delete(state: &AppState, id: &str) -> Response<Full<Bytes>> {
    match state.store.delete(id).await {
        Ok(()) => json_response(
            StatusCode::OK,
            &StatusResponse {
                success: true,
                message: "Reminder deleted".to_string(),
            },
        ),
        Err(e) => {
            logger::log_store_error("delete", &e);
            let body = json!({
                "success": true,
                "message": "Delete simulated (offline)",
                "id": id,
            });
            json_response(StatusCode::OK, &body)
        }
    }
}

/// Catch-all for requests matching no routing rule
pub fn not_found(path: &str) -> Response<Full<Bytes>> {
    let body = json!({
        "success": false,
        "message": "Route not found",
        "path": path,
    });
    json_response(StatusCode::NOT_FOUND, &body)
}

/// Two fixed placeholder reminders served while the store is unreachable
fn mock_reminders() -> Vec<Reminder> {
    let now = Utc::now();
    vec![
        Reminder {
            id: 1,
            text: "Meeting at 10am".to_string(),
            owner_id: DEFAULT_OWNER.to_string(),
            status: STATUS_ACTIVE.to_string(),
            created_at: now,
            updated_at: None,
        },
        Reminder {
            id: 2,
            text: "Buy milk".to_string(),
            owner_id: DEFAULT_OWNER.to_string(),
            status: STATUS_ACTIVE.to_string(),
            created_at: now,
            updated_at: None,
        },
    ]
}
