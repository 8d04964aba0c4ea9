use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{enphase, server::AppContext, types::Summary, warning};

pub async fn enphase_summary(
    Extension(context): Extension<Arc<AppContext>>,
) -> (StatusCode, Json<Value>) {
    // The lock spans the expiry check and the refresh exchange so concurrent
    // requests cannot race two refreshes; the summary fetch itself runs on a
    // cloned token after the lock is released.
    let access_token = {
        let mut manager = context.token_manager.lock().await;
        if let Err(e) = manager.ensure_valid().await {
            warning!("Error refreshing token: {}", e);
            return load_failed();
        }
        manager.access_token().to_string()
    };

    match enphase::summary::fetch_summary(&context.api_url, &access_token, &context.system_id).await
    {
        Ok(raw) => (StatusCode::OK, Json(json!(Summary::from(raw)))),
        Err(e) => {
            warning!("Error fetching summary: {}", e);
            load_failed()
        }
    }
}

fn load_failed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Failed to load Enphase data"})),
    )
}
