//! Request payload construction
//!
//! Turns the payment test form into checkout and subscription bodies.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::models::{
    BillingAddress, CheckoutRequest, PaymentCustomer, ProductItem, SubscriptionRequest,
};
use crate::money::to_minor_units;

/// Product id used for one-time checkout tests
pub const TEST_PRODUCT_ID: &str = "test_product";

/// Product id used for subscription tests
pub const SUBSCRIPTION_PRODUCT_ID: &str = "monthly_subscription";

/// Route the provider redirects to after checkout
pub const SUCCESS_PATH: &str = "/payment-success";

/// Metadata `source` tag for requests issued from the browser
pub const FRONTEND_SOURCE: &str = "frontend_test";

/// Payment test form state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentForm {
    /// Decimal amount in major units, as typed
    pub amount: String,
    pub currency: String,
    pub customer_email: String,
    pub customer_name: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            amount: "10.00".into(),
            currency: "USD".into(),
            customer_email: "test@example.com".into(),
            customer_name: "Test User".into(),
        }
    }
}

impl PaymentForm {
    fn customer(&self) -> PaymentCustomer {
        PaymentCustomer {
            customer_id: None,
            email: Some(self.customer_email.clone()),
            name: Some(self.customer_name.clone()),
        }
    }
}

/// Fixed billing address sent with subscription tests
pub fn test_billing_address() -> BillingAddress {
    BillingAddress {
        street: "123 Test Street".into(),
        city: "Test City".into(),
        state: "Test State".into(),
        country: "US".into(),
        zipcode: "12345".into(),
    }
}

/// Build the checkout body.
///
/// `origin` is the page origin the provider should return to. Fails only if
/// the amount cannot be parsed.
pub fn checkout_request(form: &PaymentForm, origin: &str, now: DateTime<Utc>) -> Result<CheckoutRequest> {
    let amount = to_minor_units(&form.amount)?;

    Ok(CheckoutRequest {
        billing_currency: form.currency.trim().to_string(),
        allowed_payment_method_types: vec!["credit".into(), "debit".into()],
        product_cart: vec![ProductItem {
            product_id: TEST_PRODUCT_ID.into(),
            amount,
            quantity: 1,
        }],
        return_url: format!("{}{SUCCESS_PATH}", origin.trim_end_matches('/')),
        customer: Some(form.customer()),
        billing: None,
        metadata: Some(metadata([
            ("test", json!(true)),
            ("source", json!(FRONTEND_SOURCE)),
            ("timestamp", json!(now.to_rfc3339_opts(SecondsFormat::Millis, true))),
        ])),
    })
}

/// Build the subscription body with a time-derived customer id
pub fn subscription_request(form: &PaymentForm, now: DateTime<Utc>) -> SubscriptionRequest {
    let mut customer = form.customer();
    customer.customer_id = Some(format!("customer_{}", now.timestamp_millis()));

    SubscriptionRequest {
        customer,
        product_id: SUBSCRIPTION_PRODUCT_ID.into(),
        billing: test_billing_address(),
        payment_link: true,
        subscription_id: None,
        metadata: Some(metadata([
            ("test", json!(true)),
            ("subscription_type", json!("monthly")),
            ("source", json!(FRONTEND_SOURCE)),
        ])),
    }
}

fn metadata<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_checkout_payload() {
        let form = PaymentForm::default();
        let request = checkout_request(&form, "https://harness.example/", fixed_now()).unwrap();

        assert_eq!(request.product_cart.len(), 1);
        assert_eq!(request.product_cart[0].amount, 1000);
        assert_eq!(request.product_cart[0].product_id, TEST_PRODUCT_ID);
        assert_eq!(request.return_url, "https://harness.example/payment-success");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["billing_currency"], "USD");
        assert_eq!(json["allowed_payment_method_types"], json!(["credit", "debit"]));
        assert_eq!(json["customer"], json!({ "email": "test@example.com", "name": "Test User" }));
        assert_eq!(json["metadata"]["source"], "frontend_test");
        assert_eq!(json["metadata"]["timestamp"], "2025-01-02T03:04:05.000Z");
        assert!(json.get("billing").is_none());
    }

    #[test]
    fn test_checkout_rejects_bad_amount() {
        let form = PaymentForm {
            amount: "ten dollars".into(),
            ..Default::default()
        };
        assert!(checkout_request(&form, "http://localhost:3000", fixed_now()).is_err());
    }

    #[test]
    fn test_subscription_payload() {
        let form = PaymentForm {
            customer_email: "sub@example.com".into(),
            customer_name: "Subscriber".into(),
            ..Default::default()
        };
        let request = subscription_request(&form, fixed_now());

        assert_eq!(
            request.customer.customer_id.as_deref(),
            Some(format!("customer_{}", fixed_now().timestamp_millis()).as_str())
        );
        assert_eq!(request.product_id, SUBSCRIPTION_PRODUCT_ID);
        assert!(request.payment_link);
        assert_eq!(request.billing.zipcode, "12345");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["metadata"]["subscription_type"], "monthly");
        assert_eq!(json["customer"]["email"], "sub@example.com");
    }
}
