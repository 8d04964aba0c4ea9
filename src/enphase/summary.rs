use std::time::Duration;

use reqwest::Client;

use crate::{error::FetchError, types::SystemSummaryResponse};

/// Timeout applied to outbound summary calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves the production/consumption summary for a system.
///
/// Issues an authenticated read against the Enphase summary resource for the
/// given system identifier. The caller is responsible for supplying a
/// currently-valid bearer token; this function performs no token lifecycle
/// work of its own.
///
/// # Arguments
///
/// * `api_url` - Enphase API base URL (no trailing slash)
/// * `token` - Valid access token for bearer authentication
/// * `system_id` - Identifier of the system to summarize
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(SystemSummaryResponse)` - Parsed summary payload; any of the nested
///   sections and numeric fields may be absent
/// - `Err(FetchError)` - Upstream rejection, malformed payload, or transport
///   failure
///
/// # Partial Payloads
///
/// Systems without consumption metering return payloads missing the
/// `consumption` section entirely, and fields drop out upstream depending on
/// metering configuration. The response type keeps every field optional so
/// the normalization boundary can default them; nothing is defaulted here.
///
/// # Error Conditions
///
/// - Non-success HTTP status: `FetchError::UpstreamError` carrying the
///   upstream status and body, with no retry
/// - Response body that is not valid summary JSON:
///   `FetchError::UpstreamError` carrying the parse failure
/// - Network connectivity issues: `FetchError::Transport`
///
/// # Example
///
/// ```
/// let raw = fetch_summary(&config::enphase_apiurl(), &token, &system_id).await?;
/// let summary = Summary::from(raw);
/// ```
pub async fn fetch_summary(
    api_url: &str,
    token: &str,
    system_id: &str,
) -> Result<SystemSummaryResponse, FetchError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let summary_url = format!(
        "{uri}/systems/{id}/summary",
        uri = api_url,
        id = system_id
    );

    let response = client.get(&summary_url).bearer_auth(token).send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(FetchError::UpstreamError {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| FetchError::UpstreamError {
        status: status.as_u16(),
        body: format!("malformed summary response: {}", e),
    })
}
