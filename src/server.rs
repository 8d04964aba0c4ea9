use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, management::TokenManager};

/// Shared state for the proxy server: the credential manager plus the fixed
/// upstream coordinates every summary request needs.
pub struct AppContext {
    pub token_manager: Mutex<TokenManager>,
    pub api_url: String,
    pub system_id: String,
}

impl AppContext {
    pub fn from_env() -> Self {
        AppContext {
            token_manager: Mutex::new(TokenManager::from_env()),
            api_url: config::enphase_apiurl(),
            system_id: config::enphase_system_id(),
        }
    }
}

pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route(
            "/enphase_summary",
            get(api::enphase_summary).layer(Extension(context)),
        )
}

pub async fn start_api_server(context: Arc<AppContext>) {
    let app = router(context);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
