//! Backend wire types
//!
//! Shapes of the requests the harness sends and the responses it expects
//! from the payment backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `GET /api/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRoot {
    pub message: String,
}

/// One line of the product cart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItem {
    pub product_id: String,

    /// Amount in minor units (cents)
    pub amount: i64,

    pub quantity: u32,
}

/// Customer block shared by checkout and subscription requests
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCustomer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Billing address
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
}

/// `POST /api/payments/checkout` body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub billing_currency: String,
    pub allowed_payment_method_types: Vec<String>,
    pub product_cart: Vec<ProductItem>,
    pub return_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<PaymentCustomer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Checkout (and simple test payment) response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default)]
    pub checkout_url: Option<String>,

    #[serde(default)]
    pub expires_at: Option<String>,
}

impl PaymentSession {
    /// URL to open after the redirect delay, if any
    pub fn redirect_url(&self) -> Option<&str> {
        Some(self.url.as_str()).filter(|u| !u.trim().is_empty())
    }
}

/// `POST /api/payments/subscriptions` body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub customer: PaymentCustomer,
    pub product_id: String,
    pub billing: BillingAddress,
    pub payment_link: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Subscription response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSession {
    pub subscription_id: String,
    pub customer_id: String,
    pub status: String,
    pub product_id: String,

    #[serde(default)]
    pub payment_url: Option<String>,
}

impl SubscriptionSession {
    /// Payment link to open after the redirect delay, if any
    pub fn redirect_url(&self) -> Option<&str> {
        self.payment_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// `GET /api/health`
///
/// Every field is optional: the harness renders whatever the backend sends.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,

    /// Only set locally when the probe itself failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub dodo_payments: Option<ProviderHealth>,

    #[serde(default)]
    pub database: Option<DatabaseHealth>,
}

/// Payment provider configuration flags
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderHealth {
    #[serde(default, deserialize_with = "null_as_default")]
    pub api_key_configured: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub webhook_secret_configured: bool,

    #[serde(default)]
    pub mode: Option<String>,
}

/// Database connectivity
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseHealth {
    #[serde(default, deserialize_with = "null_as_default")]
    pub connected: bool,

    #[serde(default)]
    pub name: Option<String>,
}

/// Read an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
