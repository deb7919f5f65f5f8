// Application state module
// Bundles the loaded configuration with the store handle

use std::sync::Arc;

use super::types::Config;
use crate::store::ReminderStore;

/// Application state
///
/// Constructed once at startup and shared across connections. The store is
/// held behind the `ReminderStore` trait so tests can substitute an
/// in-memory or failing implementation.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ReminderStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ReminderStore>) -> Self {
        Self { config, store }
    }
}
