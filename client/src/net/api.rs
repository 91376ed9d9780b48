//! REST API helpers for campaign persistence.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only called from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError`: the server's own error body when it sends
//! one, otherwise one built from the status or the transport failure. Callers
//! turn it into a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use ventureboard::campaign::{Campaign, CampaignBasicDetail, CampaignDetailUpdate};
use ventureboard::error::ApiError;

#[cfg(any(test, feature = "hydrate"))]
const CAMPAIGNS_ENDPOINT: &str = "/api/campaigns";

#[cfg(any(test, feature = "hydrate"))]
fn campaign_endpoint(id: &str) -> String {
    format!("{CAMPAIGNS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::unreachable(format!("network error: {err}"))
}

/// Decode a failure body, falling back to a status-only error.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_body(status: u16, body: &str) -> ApiError {
    serde_json::from_str::<ApiError>(body).unwrap_or_else(|_| ApiError::upstream(status))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::internal("campaign API is only available in the browser")
}

#[cfg(feature = "hydrate")]
async fn decode_campaign(resp: gloo_net::http::Response) -> Result<Campaign, ApiError> {
    if resp.ok() {
        return resp.json::<Campaign>().await.map_err(network_error);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(failure_from_body(status, &body))
}

/// Save a new campaign via `POST /api/campaigns`.
///
/// # Errors
///
/// Returns the server's [`ApiError`], or one describing the network failure.
pub async fn save_campaign_basic_detail(data: &CampaignBasicDetail) -> Result<Campaign, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CAMPAIGNS_ENDPOINT)
            .json(data)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        decode_campaign(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(unavailable())
    }
}

/// Apply a partial update via `PATCH /api/campaigns/{id}`.
///
/// # Errors
///
/// Returns the server's [`ApiError`], or one describing the network failure.
pub async fn update_campaign_detail(id: &str, data: &CampaignDetailUpdate) -> Result<Campaign, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&campaign_endpoint(id))
            .json(data)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        decode_campaign(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, data);
        Err(unavailable())
    }
}
