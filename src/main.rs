use std::sync::Arc;

use plant_gallery::config::GalleryConfig;
use plant_gallery::store::ImageStore;
use plant_gallery::store::rest::RestStore;
use plant_gallery::{routes, services, state};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = GalleryConfig::from_env().expect("invalid configuration");
    if config.store.url.is_empty() || config.store.service_key.is_empty() {
        tracing::warn!("store URL or service key not set; store calls will fail");
    }

    let store: Arc<dyn ImageStore> = Arc::new(RestStore::new(&config.store).expect("store client init failed"));

    let initial = services::catalog::load_initial(store.as_ref())
        .await
        .expect("initial image load failed");
    let state = state::AppState::new(store, initial, config.session_ttl);

    // Spawn background session eviction.
    let _sweeper = services::sweeper::spawn_session_sweeper(state.clone(), config.sweep_interval);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "plant gallery listening");
    axum::serve(listener, app).await.expect("server failed");
}
