use crate::shared::config::DEPARTMENTS_ROUTE;
use leptos::prelude::*;

/// Landing page. The department list is served by another app, so the
/// link bypasses the in-app router.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="w-full min-h-screen bg-base-200 flex justify-center items-start p-6">
            <div class="bg-base-100 rounded-xl shadow-lg w-full max-w-4xl p-8">
                <h1 class="text-3xl font-bold mb-6">"Dashboard"</h1>
                <a class="btn btn-primary" href=DEPARTMENTS_ROUTE rel="external">"Departamentos"</a>
            </div>
        </div>
    }
}
