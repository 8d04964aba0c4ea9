use std::time::Duration;

use reqwest::Client;

use crate::{error::AuthError, types::TokenResponse};

/// Timeout applied to outbound token-endpoint calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Exchanges a refresh token for a new access token.
///
/// Performs the OAuth 2.0 `refresh_token` grant against the authorization
/// server using the client credentials registered for this service. This is
/// the only way the proxy obtains access tokens after bootstrap.
///
/// # Arguments
///
/// * `token_url` - Authorization server token endpoint
/// * `client_id` - Registered client identifier
/// * `client_secret` - Registered client secret
/// * `refresh_token` - Currently held refresh token
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - New access token plus the optional rotated
///   refresh token and optional lifetime in seconds
/// - `Err(AuthError)` - Rejected exchange, malformed payload, or transport
///   failure
///
/// # Token Response
///
/// Authorization servers differ in what they return alongside the access
/// token. Some rotate the refresh token on every exchange, some never do;
/// some omit `expires_in`. Both fields are therefore optional here, and the
/// caller decides how to fill the gaps.
///
/// # Error Conditions
///
/// - Non-success HTTP status: `AuthError::RefreshFailed` carrying the
///   upstream status and body
/// - Response body that is not valid token JSON: `AuthError::RefreshFailed`
///   carrying the parse failure
/// - Network connectivity issues: `AuthError::Transport`
///
/// # Example
///
/// ```
/// let response = refresh_access_token(
///     "https://api.enphaseenergy.com/oauth/token",
///     &client_id,
///     &client_secret,
///     &refresh_token,
/// )
/// .await?;
/// println!("New access token: {}", response.access_token);
/// ```
pub async fn refresh_access_token(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<TokenResponse, AuthError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .post(token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(AuthError::RefreshFailed {
            status: status.as_u16(),
            detail: body,
        });
    }

    serde_json::from_str(&body).map_err(|e| AuthError::RefreshFailed {
        status: status.as_u16(),
        detail: format!("malformed token response: {}", e),
    })
}
