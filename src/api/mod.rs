// API module entry
// Reminder CRUD over a (method, path) route table

mod handlers;
mod response;
mod routes;
pub mod types;

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

pub use routes::{match_route, Route};

/// API route handler
///
/// Preflight is answered before logging and before routing; every other
/// request is logged, matched against the route table, and dispatched.
/// Each path terminates in exactly one response, and every response
/// leaves through the CORS choke point.
pub async fn handle_request<B: Body>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if req.method() == Method::OPTIONS {
        return Ok(response::with_cors(response::preflight()));
    }

    let (parts, body) = req.into_parts();
    let path = parts.uri.path().to_string();

    if state.config.logging.access_log {
        logger::log_request(parts.method.as_str(), &path);
    }

    let response = match routes::match_route(&parts.method, &path) {
        Some(Route::Health) => handlers::health(),
        Some(Route::List) => handlers::list(&state).await,
        Some(Route::Create) => {
            let bytes = read_body(body).await;
            handlers::create(&state, &bytes).await
        }
        Some(Route::Update(id)) => {
            let bytes = read_body(body).await;
            handlers::update(&state, &id, &bytes).await
        }
        Some(Route::Delete(id)) => handlers::delete(&state, &id).await,
        None => handlers::not_found(&path),
    };

    Ok(response::with_cors(response))
}

/// Collect the request body; an unreadable body is treated as empty
async fn read_body<B: Body>(body: B) -> Bytes {
    match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => {
            logger::log_warning("Failed to read request body");
            Bytes::new()
        }
    }
}
