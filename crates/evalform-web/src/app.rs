use leptos::prelude::*;

use crate::pages::evaluation::EvaluationPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <main class="content">
                <EvaluationPage />
            </main>
        </div>
    }
}
