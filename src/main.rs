use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use pethappy::api::{self, AppState};
use pethappy::InMemoryPetStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let addr = std::env::var("PETHAPPY_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    info!(%addr, "starting pethappy");

    let state = Arc::new(AppState::new(InMemoryPetStore::new()));
    api::serve(state, &addr).await
}
