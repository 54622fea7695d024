//! Payment Test Page

use dodo_harness_core::{
    Action, HealthStatus, PaymentForm, RequestSlot, health::configured, perform,
};
use leptos::prelude::*;

use crate::api::{self, Harness};
use crate::components::LabeledLine;

const TEST_CARDS: [(&str, &str); 5] = [
    ("Success (Global)", "4242 4242 4242 4242"),
    ("Success (India)", "6074 8259 7208 3818"),
    ("Decline", "4000 0000 0000 0002"),
    ("3D Secure", "4000 0000 0000 3220"),
    ("Insufficient Funds", "4000 0000 0000 9995"),
];

#[component]
pub fn PaymentTestPage() -> impl IntoView {
    let harness = expect_context::<Harness>();
    let config = harness.config.clone();
    let client = StoredValue::new(harness.client);

    let defaults = PaymentForm::default();
    let (amount, set_amount) = signal(defaults.amount);
    let (currency, set_currency) = signal(defaults.currency);
    let (email, set_email) = signal(defaults.customer_email);
    let (name, set_name) = signal(defaults.customer_name);

    let slot = RwSignal::new(RequestSlot::default());
    let health = RwSignal::new(None::<HealthStatus>);
    let pending = move || slot.with(RequestSlot::is_pending);

    let refresh_health = move || {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let snapshot = match client.health().await {
                Ok(status) => status,
                Err(e) => {
                    leptos::logging::error!("Health check failed: {e}");
                    HealthStatus::probe_failed(&e)
                }
            };
            health.set(Some(snapshot));
        });
    };

    Effect::new(move |_| refresh_health());

    let run = move |action: Action| {
        let mut started = false;
        slot.update(|s| started = s.try_begin(action));
        if !started {
            return;
        }

        let form = PaymentForm {
            amount: amount.get_untracked(),
            currency: currency.get_untracked(),
            customer_email: email.get_untracked(),
            customer_name: name.get_untracked(),
        };
        let client = client.get_value();

        leptos::task::spawn_local(async move {
            let outcome = perform(&client, action, &form, &api::page_origin()).await;
            if outcome.text.starts_with('❌') {
                leptos::logging::error!("{action:?} failed: {}", outcome.text);
            }
            if let Some(url) = outcome.redirect.clone() {
                api::open_after_delay(url);
            }
            slot.update(|s| s.finish(&outcome));
        });
    };

    let button_label = move |action: Action, idle: String| {
        if pending() { action.pending_label().to_string() } else { idle }
    };

    view! {
        <div class="payment-test">
            <h1>"🦤 Dodo Payments Test Center"</h1>
            <p class="subtitle">"Exercise the payment backend from the browser"</p>

            <section class="panel panel-muted">
                <h3>"🔧 System Status"</h3>
                {move || match health.get() {
                    Some(status) => status
                        .status_lines()
                        .into_iter()
                        .map(|line| view! { <LabeledLine label=line.label value=line.value /> })
                        .collect_view()
                        .into_any(),
                    None => view! { <p>"Loading status..."</p> }.into_any(),
                }}
                <button class="btn btn-primary btn-small" on:click=move |_| refresh_health()>
                    "Refresh Status"
                </button>
            </section>

            <section class="panel">
                <h3>"💳 Payment Configuration"</h3>
                <div class="form-grid">
                    <div class="field">
                        <label>"Amount ($):"</label>
                        <input
                            type="number"
                            step="0.01"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Currency:"</label>
                        <input
                            type="text"
                            prop:value=move || currency.get()
                            on:input=move |ev| set_currency.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Customer Email:"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Customer Name:"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                </div>
            </section>

            <div class="actions">
                <button
                    class="btn btn-success"
                    disabled=pending
                    on:click=move |_| run(Action::Checkout)
                >
                    {move || button_label(Action::Checkout, format!("💰 Create Payment (${})", amount.get()))}
                </button>
                <button
                    class="btn btn-info"
                    disabled=pending
                    on:click=move |_| run(Action::TestEndpoint)
                >
                    {move || button_label(Action::TestEndpoint, "🧪 Test API Endpoint".into())}
                </button>
                <button
                    class="btn btn-purple"
                    disabled=pending
                    on:click=move |_| run(Action::Subscription)
                >
                    {move || button_label(Action::Subscription, "🔄 Create Subscription".into())}
                </button>
            </div>

            <section class="panel panel-info">
                <h3>"💳 Test Card Information"</h3>
                <div class="cards">
                    {TEST_CARDS
                        .into_iter()
                        .map(|(label, number)| view! { <LabeledLine label=label value=number /> })
                        .collect_view()}
                    <p class="hint"><em>"Use any future expiry date and any 3-digit CVC"</em></p>
                </div>
            </section>

            <section class="panel panel-muted">
                <h3>"📊 Test Results"</h3>
                <textarea
                    class="results"
                    readonly
                    placeholder="Test results will appear here...\n\n• API responses\n• Payment status\n• Error messages\n• Success confirmations"
                    prop:value=move || slot.with(|s| s.text().to_string())
                />
            </section>

            <section class="panel panel-warning">
                <h4>"🔧 Current Configuration:"</h4>
                <LabeledLine label="Backend URL" value=config.backend_base() />
                <LabeledLine label="Dodo API Key" value=configured(config.api_key_configured) />
                <LabeledLine label="Mode" value=config.mode.clone() />
                <LabeledLine label="Environment" value=config.environment.clone() />
            </section>
        </div>
    }
}
