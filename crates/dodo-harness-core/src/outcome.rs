//! Result text and request slot for the payment test view

use std::time::Duration;

use chrono::Utc;

use crate::client::ApiClient;
use crate::error::{HarnessError, Result};
use crate::models::{PaymentSession, SubscriptionSession};
use crate::payload::{PaymentForm, checkout_request, subscription_request};

/// Delay between showing a result and opening its redirect URL
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// The three user-triggered requests of the payment test view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Checkout,
    TestEndpoint,
    Subscription,
}

impl Action {
    /// Button label while a request is in flight
    pub const fn pending_label(self) -> &'static str {
        match self {
            Self::Checkout => "Processing...",
            Self::TestEndpoint => "Testing...",
            Self::Subscription => "Creating...",
        }
    }

    const fn failure_heading(self) -> &'static str {
        match self {
            Self::Checkout => "Payment creation failed",
            Self::TestEndpoint => "Test endpoint failed",
            Self::Subscription => "Subscription creation failed",
        }
    }

    /// Outcome for a failed request
    pub fn failure(self, err: &HarnessError) -> Outcome {
        Outcome {
            text: format!("❌ {}:\n\n{}", self.failure_heading(), err.user_message()),
            redirect: None,
        }
    }
}

/// Rendered result of one request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Replaces the result panel wholesale
    pub text: String,

    /// Opened in a new browser context after [`REDIRECT_DELAY`]
    pub redirect: Option<String>,
}

impl Outcome {
    pub fn checkout(session: &PaymentSession) -> Self {
        let mut text = format!(
            "✅ Payment session created successfully!\n\n\
             Payment ID: {}\nStatus: {}\nCheckout URL: {}",
            session.id, session.status, session.url
        );
        let redirect = session.redirect_url().map(str::to_string);
        if redirect.is_some() {
            text.push_str("\n\nRedirecting to checkout page...");
        }
        Self { text, redirect }
    }

    /// The fixed test endpoint never redirects
    pub fn test_payment(session: &PaymentSession) -> Self {
        Self {
            text: format!(
                "✅ Test endpoint successful!\n\n\
                 Payment ID: {}\nStatus: {}\nCheckout URL: {}",
                session.id, session.status, session.url
            ),
            redirect: None,
        }
    }

    pub fn subscription(session: &SubscriptionSession) -> Self {
        let mut text = format!(
            "✅ Subscription created successfully!\n\n\
             Subscription ID: {}\nCustomer ID: {}\nStatus: {}\nProduct ID: {}",
            session.subscription_id, session.customer_id, session.status, session.product_id
        );
        let redirect = session.redirect_url().map(str::to_string);
        if let Some(url) = &redirect {
            text.push_str(&format!("\n\nPayment URL: {url}\n\nRedirecting..."));
        }
        Self { text, redirect }
    }

    /// Map a request result to its outcome
    pub fn settle<T>(action: Action, result: &Result<T>, on_success: impl FnOnce(&T) -> Self) -> Self {
        match result {
            Ok(value) => on_success(value),
            Err(err) => action.failure(err),
        }
    }
}

/// Issue the request behind `action` and render its outcome.
///
/// `origin` is the page origin the checkout should return to. Never fails:
/// every error, including an unparseable amount, becomes failure text.
pub async fn perform(client: &ApiClient, action: Action, form: &PaymentForm, origin: &str) -> Outcome {
    match action {
        Action::Checkout => match checkout_request(form, origin, Utc::now()) {
            Ok(request) => {
                Outcome::settle(action, &client.create_checkout(&request).await, Outcome::checkout)
            }
            Err(err) => action.failure(&err),
        },
        Action::TestEndpoint => {
            Outcome::settle(action, &client.simple_payment().await, Outcome::test_payment)
        }
        Action::Subscription => {
            let request = subscription_request(form, Utc::now());
            Outcome::settle(action, &client.create_subscription(&request).await, Outcome::subscription)
        }
    }
}

/// Loading flag plus result text.
///
/// One slot is shared by every action of the view, so at most one request is
/// in flight at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestSlot {
    pending: Option<Action>,
    text: String,
}

impl RequestSlot {
    /// Claim the slot. Returns `false` (and changes nothing) if a request is
    /// already pending.
    pub fn try_begin(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        self.text.clear();
        true
    }

    /// Release the slot and show the outcome
    pub fn finish(&mut self, outcome: &Outcome) {
        self.pending = None;
        self.text.clone_from(&outcome.text);
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub const fn pending_action(&self) -> Option<Action> {
        self.pending
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
