//! Shared request plumbing for the API clients.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Sends a prepared request and decodes the JSON response.
///
/// Non-success statuses are mapped through [`ApiError::from_response`], so
/// callers see `SessionExpired` / `NotFound` / `Backend` instead of raw
/// status codes.
pub(crate) async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> ApiResult<T> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status.as_u16(), &body));
    }

    Ok(response.json::<T>().await?)
}
