use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🌟 Performance Evaluation"</h1>
            <span class="subtitle">"A supportive way to share feedback and celebrate growth"</span>
        </header>
    }
}
