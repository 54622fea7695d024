//! UI Components

use dodo_harness_core::DetailRow;
use leptos::prelude::*;

use crate::api::navigate_to;

/// "Return to Home" plus a retry button back to the payment test page
#[component]
pub fn NavButtons(retry_label: &'static str) -> impl IntoView {
    view! {
        <div class="nav-buttons">
            <button class="btn btn-primary" on:click=move |_| navigate_to("/")>
                "Return to Home"
            </button>
            <button class="btn btn-success" on:click=move |_| navigate_to("/payment-test")>
                {retry_label}
            </button>
        </div>
    }
}

/// One `LABEL: value` line
#[component]
pub fn LabeledLine(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <p class="line">
            <strong>{label}":"</strong>
            " "
            {value}
        </p>
    }
}

/// Payment details parsed from the return URL
#[component]
pub fn DetailList(rows: Vec<DetailRow>) -> impl IntoView {
    view! {
        <div class="details">
            <h3>"Payment Details:"</h3>
            {rows
                .into_iter()
                .map(|row| view! { <LabeledLine label=row.label value=row.value /> })
                .collect_view()}
        </div>
    }
}
