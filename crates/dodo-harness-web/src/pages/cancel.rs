//! Payment Cancel Page

use leptos::prelude::*;

use crate::components::NavButtons;

#[component]
pub fn PaymentCancelPage() -> impl IntoView {
    view! {
        <div class="result-page">
            <div class="panel panel-error">
                <h1>"❌ Payment Cancelled"</h1>
                <p class="lead">"Your payment was cancelled or interrupted."</p>
                <p class="note">"No charges have been made to your account."</p>
            </div>
            <NavButtons retry_label="Try Again" />
        </div>
    }
}
