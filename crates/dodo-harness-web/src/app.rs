//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::api::{self, Harness};
use crate::pages::{HomePage, PaymentCancelPage, PaymentSuccessPage, PaymentTestPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    match api::harness_config() {
        Ok(config) => {
            provide_context(Harness::new(config));
            view! {
                <Router>
                    <main class="app">
                        <Routes fallback=|| view! { <p>"Page not found"</p> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/payment-test") view=PaymentTestPage />
                            <Route path=path!("/payment-success") view=PaymentSuccessPage />
                            <Route path=path!("/payment-cancel") view=PaymentCancelPage />
                        </Routes>
                    </main>
                </Router>
            }
            .into_any()
        }
        Err(err) => view! {
            <main class="app">
                <div class="panel panel-error">
                    <h1>"Harness misconfigured"</h1>
                    <p>{err.user_message()}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}
