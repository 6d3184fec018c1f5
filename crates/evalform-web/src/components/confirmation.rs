use evalform_core::EvaluationSession;
use leptos::prelude::*;

#[component]
pub fn ConfirmationView(session: RwSignal<EvaluationSession>) -> impl IntoView {
    view! {
        <div class="confirmation">
            <div class="confirmation-badge">"✓"</div>
            <h2>"🎉 All Done!"</h2>
            <p class="confirmation-lead">
                "Thank you so much for taking the time to share your thoughtful feedback!"
            </p>
            <p class="confirmation-note">"Your evaluation has been submitted successfully."</p>
            <button
                type="button"
                class="submit-btn"
                on:click=move |_| session.update(|s| s.submit_another())
            >
                "Submit Another Evaluation"
            </button>
        </div>
    }
}
