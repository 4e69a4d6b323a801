//! Typed boundary to the FinSight backend. Every function maps one endpoint
//! to entities from [`crate::models`] or an [`ApiError`]; retries are always
//! left to the user re-invoking the action.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::{Account, InsightBundle, Transaction, User};

pub const API_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// Login was rejected. Carries the server's message when it sent one.
    #[error("{0}")]
    Auth(String),

    /// A read endpoint failed (transport error, non-2xx, or an unusable
    /// payload). Read-only views log this and degrade to empty.
    #[error("request failed: {0}")]
    Fetch(String),

    /// Checkout-session creation failed.
    #[error("{0}")]
    Checkout(String),
}

pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    let body = json!({ "email": email, "password": password });
    let response = Request::post(&format!("{API_BASE_URL}/login"))
        .json(&body)
        .map_err(|err| ApiError::Auth(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Auth(err.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Auth(error_detail(response, "Login failed").await));
    }
    response
        .json::<User>()
        .await
        .map_err(|err| ApiError::Auth(err.to_string()))
}

pub async fn fetch_user(user_id: i64) -> Result<User, ApiError> {
    let response = get(&format!("{API_BASE_URL}/users/{user_id}")).await?;
    response
        .json::<User>()
        .await
        .map_err(|err| ApiError::Fetch(err.to_string()))
}

pub async fn fetch_accounts(user_id: i64) -> Result<Vec<Account>, ApiError> {
    let response = get(&format!("{API_BASE_URL}/users/{user_id}/accounts")).await?;
    decode_array(response).await
}

pub async fn fetch_transactions(user_id: i64) -> Result<Vec<Transaction>, ApiError> {
    let response = get(&format!("{API_BASE_URL}/users/{user_id}/transactions")).await?;
    decode_array(response).await
}

pub async fn fetch_insights(user_id: i64) -> Result<InsightBundle, ApiError> {
    let response = get(&format!("{API_BASE_URL}/users/{user_id}/insights")).await?;
    response
        .json::<InsightBundle>()
        .await
        .map_err(|err| ApiError::Fetch(err.to_string()))
}

#[derive(Deserialize)]
struct CheckoutSession {
    checkout_url: String,
}

/// Asks the backend for a hosted checkout page and returns its URL. The
/// caller is expected to point the browsing context at it.
pub async fn create_checkout_session(email: &str) -> Result<String, ApiError> {
    let body = json!({ "email": email });
    let response = Request::post(&format!("{API_BASE_URL}/create-checkout-session"))
        .json(&body)
        .map_err(|err| ApiError::Checkout(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Checkout(err.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Checkout(
            error_detail(response, "Could not start checkout").await,
        ));
    }
    response
        .json::<CheckoutSession>()
        .await
        .map(|session| session.checkout_url)
        .map_err(|err| ApiError::Checkout(err.to_string()))
}

async fn get(url: &str) -> Result<Response, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| ApiError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Fetch(format!(
            "{url} returned status {}",
            response.status()
        )));
    }
    Ok(response)
}

/// The read endpoints promise arrays; anything else is reported as an
/// anomaly rather than silently coerced.
async fn decode_array<T: for<'de> Deserialize<'de>>(
    response: Response,
) -> Result<Vec<T>, ApiError> {
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|err| ApiError::Fetch(err.to_string()))?;
    if !value.is_array() {
        return Err(ApiError::Fetch(format!("expected an array, got: {value}")));
    }
    serde_json::from_value(value).map_err(|err| ApiError::Fetch(err.to_string()))
}

/// Pulls the `detail` field FastAPI-style error bodies carry; falls back to
/// the given message when the body is empty or unreadable.
async fn error_detail(response: Response, fallback: &str) -> String {
    if let Ok(value) = response.json::<serde_json::Value>().await {
        if let Some(detail) = value.get("detail").and_then(|v| v.as_str()) {
            return detail.to_string();
        }
    }
    fallback.to_string()
}
