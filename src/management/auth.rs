use chrono::Utc;

use crate::{config, enphase, error::AuthError, types::Token};

// Lifetime assumed when the token endpoint omits expires_in.
const DEFAULT_TOKEN_LIFETIME: u64 = 3600;

pub struct TokenManager {
    client_id: String,
    client_secret: String,
    token_url: String,
    token: Token,
}

impl TokenManager {
    pub fn new(client_id: String, client_secret: String, token_url: String, token: Token) -> Self {
        TokenManager {
            client_id,
            client_secret,
            token_url,
            token,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            config::enphase_client_id(),
            config::enphase_client_secret(),
            config::enphase_apitoken_url(),
            Token {
                access_token: config::enphase_access_token(),
                refresh_token: config::enphase_refresh_token(),
                // expires_at 0 counts as expired, so the first request
                // always refreshes before using the bootstrap token.
                expires_at: 0,
            },
        )
    }

    /// Guarantees a valid access token is held, refreshing when expired.
    pub async fn ensure_valid(&mut self) -> Result<(), AuthError> {
        if self.is_expired() {
            self.refresh().await?;
        }
        Ok(())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.expires_at
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Performs the refresh exchange and replaces the held token.
    ///
    /// On failure the error propagates before any field is written, so
    /// credential state never holds a partial update. Servers that do not
    /// rotate the refresh token leave the stored one in place.
    pub async fn refresh(&mut self) -> Result<(), AuthError> {
        let response = enphase::auth::refresh_access_token(
            &self.token_url,
            &self.client_id,
            &self.client_secret,
            &self.token.refresh_token,
        )
        .await?;

        self.token = Token {
            access_token: response.access_token,
            refresh_token: response
                .refresh_token
                .unwrap_or_else(|| self.token.refresh_token.clone()),
            expires_at: Utc::now().timestamp() as u64
                + response.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME),
        };
        Ok(())
    }
}
