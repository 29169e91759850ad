//! API utilities for frontend-backend communication
//!
//! URL construction plus thin JSON helpers over `gloo-net`. Every helper turns transport
//! failures, non-success statuses and undecodable bodies into an [`ApiError`].

use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::usecases::common::{ApiError, ApiResult};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Port the rental API listens on when no explicit URL is configured
pub const API_PORT: u16 = 8001;

/// Get the base URL for API requests
///
/// `ALQUILERES_API_URL` set at build time wins; otherwise the API is assumed on the same
/// host as the page, port [`API_PORT`].
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    resolve_base(option_env!("ALQUILERES_API_URL"), &protocol, &hostname)
}

/// Pure part of [`api_base`].
pub fn resolve_base(configured: Option<&str>, protocol: &str, hostname: &str) -> String {
    match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{}//{}:{}", protocol, hostname, API_PORT),
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/contratos/3");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn send(builder: RequestBuilder) -> ApiResult<Response> {
    builder
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {}", e)))
}

async fn send_with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Response> {
    let request: Request = builder
        .json(body)
        .map_err(|e| ApiError::decode(format!("Failed to encode request: {}", e)))?;
    request
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {}", e)))
}

/// Non-success responses become an [`ApiError`] carrying the API's `detail`.
async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = check(send(Request::get(&api_url(path))).await?).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> ApiResult<()> {
    check(send_with_body(Request::post(&api_url(path)), body).await?).await?;
    Ok(())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> ApiResult<()> {
    check(send_with_body(Request::put(&api_url(path)), body).await?).await?;
    Ok(())
}

pub async fn delete(path: &str) -> ApiResult<()> {
    check(send(Request::delete(&api_url(path))).await?).await?;
    Ok(())
}

// ============================================================================
// Collection helpers
// ============================================================================

/// `GET /<collection>`
pub async fn fetch_collection<A: AggregateRoot + DeserializeOwned>() -> ApiResult<Vec<A>> {
    let items: Vec<A> = get_json(&A::collection_path()).await?;
    log::debug!("loaded {} {}", items.len(), A::collection_name());
    Ok(items)
}

/// `POST /<collection>`
pub async fn create_item<A: AggregateRoot, B: Serialize>(payload: &B) -> ApiResult<()> {
    post_json(&A::collection_path(), payload).await?;
    log::info!("created {}", A::element_name());
    Ok(())
}

/// `PUT /<collection>/{id}` with the full record
pub async fn update_item<A: AggregateRoot, B: Serialize>(id: EntityId, payload: &B) -> ApiResult<()> {
    put_json(&A::item_path(id), payload).await?;
    log::info!("updated {} #{}", A::element_name(), id);
    Ok(())
}

/// `DELETE /<collection>/{id}`
pub async fn delete_item<A: AggregateRoot>(id: EntityId) -> ApiResult<()> {
    delete(&A::item_path(id)).await?;
    log::info!("deleted {} #{}", A::element_name(), id);
    Ok(())
}

// ============================================================================
// User notification
// ============================================================================

/// Blocking notification for a failed action; the error is logged and otherwise dropped.
pub fn notify_error(context: &str, error: &ApiError) {
    log::error!("{}: {}", context, error);
    let message = format!("{}: {}", context, error.user_message());
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(&message);
    }
}

/// Blocking success message.
pub fn notify(message: &str) {
    log::info!("{}", message);
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Browser confirm dialog; `false` when there is no window.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_from_location() {
        assert_eq!(
            resolve_base(None, "http:", "192.168.0.10"),
            "http://192.168.0.10:8001"
        );
    }

    #[test]
    fn test_resolve_base_configured() {
        assert_eq!(
            resolve_base(Some("https://api.toro.local/"), "http:", "localhost"),
            "https://api.toro.local"
        );
        assert_eq!(
            resolve_base(Some("  "), "https:", "localhost"),
            "https://localhost:8001"
        );
    }
}
