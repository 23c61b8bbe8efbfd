//! HTTP helpers for talking to the statistics API.

use contracts::shared::fetch_state::FetchError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

pub use contracts::shared::api_request::API_BASE;

/// Credential sent as `key` with every request.
///
/// Baked in at build time from `DASHBOARD_API_KEY`; anyone who can see the
/// browser's traffic can read it. Leave it empty when the backend proxy owns
/// the real key.
pub const API_KEY: &str = match option_env!("DASHBOARD_API_KEY") {
    Some(key) => key,
    None => "",
};

/// GET `url` and decode the JSON body.
///
/// Transport failures, non-2xx statuses and unparsable bodies each map to
/// their own [`FetchError`] variant.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
