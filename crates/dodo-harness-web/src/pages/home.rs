//! Home Page

use leptos::prelude::*;

use crate::api::Harness;

#[component]
pub fn HomePage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<Harness>().client);

    // liveness ping, console only
    Effect::new(move |_| {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match client.root().await {
                Ok(root) => leptos::logging::log!("{}", root.message),
                Err(e) => leptos::logging::error!("errored out requesting / api: {e}"),
            }
        });
    });

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Dodo Payments Test Center"</h1>
                <p class="tagline">"Exercise checkout, subscriptions and health probes against your backend"</p>
                <div class="cta">
                    <a href="/payment-test" class="btn btn-primary">"🦤 Test Dodo Payments"</a>
                </div>
            </header>
        </div>
    }
}
