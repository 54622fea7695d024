//! Backend HTTP client
//!
//! A thin adapter over `reqwest`: one shared client, one base URL, JSON in
//! and out. No retries, no timeout policy, no caching.

use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::models::{
    ApiRoot, CheckoutRequest, HealthStatus, PaymentSession, SubscriptionRequest,
    SubscriptionSession,
};

/// Typed client for the payment backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.backend_base().to_string(),
        }
    }

    /// Replace the default `reqwest::Client`
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET` a JSON document
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(method = "GET", path, "backend request");
        let resp = self.http.get(self.endpoint(path)).send().await?;
        parse_response(path, resp).await
    }

    /// `POST` a JSON body
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(method = "POST", path, "backend request");
        let resp = self.http.post(self.endpoint(path)).json(body).send().await?;
        parse_response(path, resp).await
    }

    /// `POST` without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(method = "POST", path, "backend request");
        let resp = self.http.post(self.endpoint(path)).send().await?;
        parse_response(path, resp).await
    }

    /// `GET /api/` – liveness probe
    pub async fn root(&self) -> Result<ApiRoot> {
        self.get_json("/api/").await
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/api/health").await
    }

    /// `POST /api/payments/checkout`
    pub async fn create_checkout(&self, request: &CheckoutRequest) -> Result<PaymentSession> {
        self.post_json("/api/payments/checkout", request).await
    }

    /// `POST /api/payments/test/simple-payment`
    pub async fn simple_payment(&self) -> Result<PaymentSession> {
        self.post_empty("/api/payments/test/simple-payment").await
    }

    /// `POST /api/payments/subscriptions`
    pub async fn create_subscription(&self, request: &SubscriptionRequest) -> Result<SubscriptionSession> {
        self.post_json("/api/payments/subscriptions", request).await
    }

    /// `GET /api/payments/payments/{id}`
    ///
    /// The record shape is backend-defined, so it is returned as raw JSON.
    pub async fn get_payment(&self, payment_id: &str) -> Result<Value> {
        let path = format!("/api/payments/payments/{}", urlencoding::encode(payment_id));
        self.get_json(&path).await
    }
}

async fn parse_response<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T> {
    let status = resp.status();

    if status.is_success() {
        let body = resp.bytes().await?;
        return serde_json::from_slice(&body).map_err(HarnessError::from);
    }

    let body = match resp.text().await {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(path, status = status.as_u16(), error = %err, "could not read error body");
            String::new()
        }
    };
    let detail = extract_detail(&body);
    tracing::warn!(path, status = status.as_u16(), detail = ?detail, "backend request failed");

    Err(HarnessError::Api {
        status: status.as_u16(),
        detail,
    })
}

/// Pull the `detail` field out of an error body.
///
/// String details are returned verbatim; structured ones (validation arrays)
/// as compact JSON. `null`, a missing field, or a non-JSON body give `None`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}
