//! Backend smoke probes
//!
//! Runs a fixed sequence of requests against a live backend and reports
//! each step. Probes run sequentially; a failure never stops the run.

use std::fmt;

use chrono::Utc;
use serde_json::{Value, json};

use crate::client::ApiClient;
use crate::error::HarnessError;
use crate::models::PaymentSession;
use crate::payload::{PaymentForm, checkout_request, subscription_request};

/// Metadata `source` tag for requests issued by the probes
pub const SMOKE_SOURCE: &str = "smoke_probe";

/// Outcome of a single probe
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeStatus {
    Passed(String),
    Failed(String),
    Skipped(String),
}

/// Named probe result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    pub name: &'static str,
    pub status: ProbeStatus,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ProbeStatus::Passed(detail) => write!(f, "✅ {}: {detail}", self.name),
            ProbeStatus::Failed(reason) => write!(f, "❌ {}: {reason}", self.name),
            ProbeStatus::Skipped(reason) => write!(f, "⚠️ {}: skipped ({reason})", self.name),
        }
    }
}

/// All probe results, in run order
#[derive(Clone, Debug, Default)]
pub struct SmokeReport {
    pub results: Vec<ProbeResult>,
}

impl SmokeReport {
    fn record(&mut self, name: &'static str, status: ProbeStatus) {
        match &status {
            ProbeStatus::Failed(reason) => tracing::warn!(probe = name, %reason, "probe failed"),
            _ => tracing::info!(probe = name, "probe finished"),
        }
        self.results.push(ProbeResult { name, status });
    }

    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, ProbeStatus::Failed(_)))
            .count()
    }

    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, ProbeStatus::Passed(_)))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn get(&self, name: &str) -> Option<&ProbeStatus> {
        self.results.iter().find(|r| r.name == name).map(|r| &r.status)
    }
}

/// Run every probe against `client`.
///
/// `return_origin` is used for the checkout `return_url`.
pub async fn run(client: &ApiClient, return_origin: &str) -> SmokeReport {
    let mut report = SmokeReport::default();

    report.record("liveness", match client.root().await {
        Ok(root) => ProbeStatus::Passed(root.message),
        Err(err) => ProbeStatus::Failed(err.to_string()),
    });

    report.record("health", match client.health().await {
        Ok(health) => {
            let status = health.status.unwrap_or_default();
            if status != "healthy" {
                ProbeStatus::Failed(format!("status is {status:?}"))
            } else if health.dodo_payments.is_none() || health.database.is_none() {
                ProbeStatus::Failed("missing dodo_payments or database section".into())
            } else {
                ProbeStatus::Passed(status)
            }
        }
        Err(err) => ProbeStatus::Failed(err.to_string()),
    });

    let form = PaymentForm::default();
    let mut payment_id = None;

    let checkout = match checkout_request(&form, return_origin, Utc::now()) {
        Ok(mut request) => {
            if let Some(metadata) = request.metadata.as_mut() {
                metadata.insert("source".into(), json!(SMOKE_SOURCE));
            }
            match client.create_checkout(&request).await {
                Ok(session) => {
                    let status = session_status(&session);
                    payment_id = Some(session.id);
                    status
                }
                Err(err) => ProbeStatus::Failed(err.to_string()),
            }
        }
        Err(err) => ProbeStatus::Failed(err.to_string()),
    };
    report.record("create_checkout", checkout);

    report.record("simple_payment", match client.simple_payment().await {
        Ok(session) => session_status(&session),
        Err(err) => ProbeStatus::Failed(err.to_string()),
    });

    let mut subscription = subscription_request(&form, Utc::now());
    if let Some(metadata) = subscription.metadata.as_mut() {
        metadata.insert("source".into(), json!(SMOKE_SOURCE));
    }
    report.record("create_subscription", match client.create_subscription(&subscription).await {
        Ok(sub) if sub.subscription_id.is_empty() => {
            ProbeStatus::Failed("empty subscription_id".into())
        }
        Ok(sub) => ProbeStatus::Passed(format!("{} ({})", sub.subscription_id, sub.status)),
        Err(err) => ProbeStatus::Failed(err.to_string()),
    });

    let success_url = format!("{}/payment-success", return_origin.trim_end_matches('/'));

    // product_cart deliberately missing
    let incomplete = json!({
        "billing_currency": "USD",
        "return_url": success_url,
    });
    report.record(
        "rejects_incomplete_checkout",
        expect_validation_error(client, &incomplete, "incomplete checkout").await,
    );

    let invalid = json!({
        "product_cart": [{ "product_id": "test_product", "quantity": 1, "amount": "not_a_number" }],
        "billing_currency": "USD",
        "return_url": success_url,
    });
    report.record(
        "rejects_invalid_checkout",
        expect_validation_error(client, &invalid, "non-numeric amount").await,
    );

    let lookup = match payment_id {
        None => ProbeStatus::Skipped("no payment id from create_checkout".into()),
        Some(id) => match client.get_payment(&id).await {
            Ok(_) => ProbeStatus::Passed(id),
            // test-mode backends may not persist mock payments
            Err(HarnessError::Api { status, .. }) => {
                ProbeStatus::Skipped(format!("backend returned {status} for {id}"))
            }
            Err(err) => ProbeStatus::Failed(err.to_string()),
        },
    };
    report.record("get_payment", lookup);

    report
}

/// Post `body` to the checkout endpoint and expect a 422 carrying a `detail`
async fn expect_validation_error(client: &ApiClient, body: &Value, what: &str) -> ProbeStatus {
    match client.post_json::<_, Value>("/api/payments/checkout", body).await {
        Err(HarnessError::Api { status: 422, detail: Some(_) }) => {
            ProbeStatus::Passed("422 with detail".into())
        }
        Err(HarnessError::Api { status, detail }) => ProbeStatus::Failed(format!(
            "expected 422 with detail, got {status} (detail present: {})",
            detail.is_some()
        )),
        Err(err) => ProbeStatus::Failed(err.to_string()),
        Ok(_) => ProbeStatus::Failed(format!("{what} was accepted")),
    }
}

fn session_status(session: &PaymentSession) -> ProbeStatus {
    if session.id.is_empty() || session.url.is_empty() {
        ProbeStatus::Failed(format!("incomplete session: {session:?}"))
    } else {
        ProbeStatus::Passed(format!("{} ({})", session.id, session.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = SmokeReport::default();
        report.record("a", ProbeStatus::Passed("ok".into()));
        report.record("b", ProbeStatus::Skipped("n/a".into()));
        assert!(report.is_success());
        assert_eq!(report.passed(), 1);

        report.record("c", ProbeStatus::Failed("boom".into()));
        assert!(!report.is_success());
        assert_eq!(report.failed(), 1);
        assert_eq!(report.get("c"), Some(&ProbeStatus::Failed("boom".into())));
    }

    #[test]
    fn test_display() {
        let result = ProbeResult {
            name: "health",
            status: ProbeStatus::Skipped("offline".into()),
        };
        assert_eq!(result.to_string(), "⚠️ health: skipped (offline)");
    }

    #[test]
    fn test_incomplete_session_fails() {
        let session = PaymentSession {
            id: "pay_1".into(),
            status: "pending".into(),
            url: String::new(),
            checkout_url: None,
            expires_at: None,
        };
        assert!(matches!(session_status(&session), ProbeStatus::Failed(_)));
    }
}
