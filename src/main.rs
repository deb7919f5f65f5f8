use std::sync::Arc;

use mindit_api::config::{AppState, Config};
use mindit_api::store::SupabaseStore;
use mindit_api::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let store = Arc::new(SupabaseStore::new(&cfg.store.url, &cfg.store.key));
    let state = Arc::new(AppState::new(cfg, store));

    logger::log_server_start(&addr, &state.config);

    server::serve(listener, state).await
}
