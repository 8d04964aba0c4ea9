use std::sync::Arc;

use crate::{
    config, info,
    server::{AppContext, start_api_server},
};

/// Starts the proxy server with state bootstrapped from the environment.
///
/// Builds the shared application context (credential manager plus upstream
/// coordinates) and hands it to the HTTP server. This function only returns
/// if the server itself stops.
pub async fn serve() {
    let context = Arc::new(AppContext::from_env());

    info!("Serving summaries for system {}", context.system_id);
    info!("Listening on {}", config::server_addr());
    start_api_server(context).await;
}
