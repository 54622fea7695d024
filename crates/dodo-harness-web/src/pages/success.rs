//! Payment Success Page
//!
//! Echoes every query parameter the provider appended to the return URL.

use dodo_harness_core::payment_details;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::{DetailList, NavButtons};

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let location = use_location();
    let rows = Memo::new(move |_| payment_details(&location.search.get()));

    view! {
        <div class="result-page">
            <div class="panel panel-success">
                <h1>"✅ Payment Successful!"</h1>
                <p class="lead">"Your payment has been processed successfully."</p>
                {move || {
                    let rows = rows.get();
                    (!rows.is_empty()).then(|| view! { <DetailList rows /> })
                }}
            </div>
            <NavButtons retry_label="Test More Payments" />
        </div>
    }
}
