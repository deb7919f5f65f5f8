// Configuration module entry point
// Loads settings from config.toml, environment overrides, and defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig, StoreConfig};

impl Config {
    /// Load configuration from the default `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; defaults cover every setting. `SUPABASE_URL`
    /// and `SUPABASE_KEY` override the store section when set.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("store.url", "https://your-project.supabase.co")?
            .set_default("store.key", "your-anon-key")?
            .set_override_option("store.url", std::env::var("SUPABASE_URL").ok())?
            .set_override_option("store.key", std::env::var("SUPABASE_KEY").ok())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
