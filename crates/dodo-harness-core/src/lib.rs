//! # dodo-harness-core
//!
//! Shared logic for the Dodo Payments test harness. Compiles natively and for
//! `wasm32`, so the browser frontend and the native tools use the same code.
//!
//! ```text
//! ┌──────────────┐   payload    ┌─────────────┐   HTTP/JSON   ┌──────────────────┐
//! │ PaymentForm  │─────────────▶│  ApiClient  │──────────────▶│ Payment backend  │
//! └──────────────┘              └─────────────┘               │   (external)     │
//!        ▲                             │                      └──────────────────┘
//!        │        Outcome / HarnessError
//! ┌──────────────┐◀────────────────────┘
//! │ RequestSlot  │
//! └──────────────┘
//! ```
//!
//! The backend owns all payment logic. This crate builds requests, performs
//! them, and turns responses or errors into display text.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dodo_harness_core::{ApiClient, HarnessConfig, Outcome, PaymentForm, checkout_request};
//!
//! let config = HarnessConfig::from_env()?;
//! let client = ApiClient::new(&config);
//!
//! let request = checkout_request(&PaymentForm::default(), "http://localhost:3000", chrono::Utc::now())?;
//! let session = client.create_checkout(&request).await?;
//! println!("{}", Outcome::checkout(&session).text);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod health;
pub mod models;
pub mod money;
pub mod outcome;
pub mod payload;
pub mod query;
pub mod smoke;

pub use client::ApiClient;
pub use config::HarnessConfig;
pub use error::{HarnessError, Result};
pub use health::StatusLine;
pub use models::{
    CheckoutRequest, HealthStatus, PaymentSession, SubscriptionRequest, SubscriptionSession,
};
pub use outcome::{Action, Outcome, REDIRECT_DELAY, RequestSlot, perform};
pub use payload::{PaymentForm, checkout_request, subscription_request};
pub use query::{DetailRow, payment_details};
pub use smoke::{ProbeStatus, SmokeReport};
