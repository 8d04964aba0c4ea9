use chrono::Utc;

use crate::{error, info, management::TokenManager, success, utils};

/// Displays the current credential state, optionally forcing a refresh.
///
/// Without `--refresh` this shows the bootstrap state from the environment,
/// which always reads as expired: rotated tokens live in process memory of
/// a running server and are not shared with this command.
pub async fn token(refresh: bool) {
    let mut token_mgr = TokenManager::from_env();

    if refresh {
        match token_mgr.refresh().await {
            Ok(_) => success!("Access token refreshed."),
            Err(e) => error!("Failed to refresh access token: {}", e),
        }
    }

    let now = Utc::now().timestamp() as u64;
    let token = token_mgr.current_token();
    info!(
        "Access token:  {}",
        utils::truncate_secret(&token.access_token)
    );
    info!(
        "Refresh token: {}",
        utils::truncate_secret(&token.refresh_token)
    );
    info!(
        "Expiry:        {}",
        utils::format_expiry(token.expires_at, now)
    );
}
