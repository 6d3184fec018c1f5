use evalform_core::{EvaluationSession, FieldUpdate, CATEGORIES};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::confirmation::ConfirmationView;
use crate::components::header::Header;
use crate::components::rating_section::RatingSection;
use crate::sink::ConsoleSink;

const RESET_PROMPT: &str = "Are you sure you want to start over? All your progress will be lost.";

#[component]
pub fn EvaluationPage() -> impl IntoView {
    let session = RwSignal::new(EvaluationSession::new());
    let submitted = Memo::new(move |_| session.with(|s| s.is_submitted()));

    view! {
        <div class="page evaluation-page">
            {move || if submitted.get() {
                view! { <ConfirmationView session=session /> }.into_any()
            } else {
                view! {
                    <div class="card">
                        <Header />
                        <EvaluationForm session=session />
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn EvaluationForm(session: RwSignal<EvaluationSession>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        session.update(|s| {
            if let Err(e) = s.submit(&ConsoleSink) {
                web_sys::console::warn_1(&JsValue::from(e.to_string()));
            }
        });
    };

    let start_over = move |_| {
        session.update(|s| s.request_reset());
        let confirmed = window().confirm_with_message(RESET_PROMPT).unwrap_or(false);
        session.update(|s| {
            if confirmed {
                s.confirm_reset();
            } else {
                s.cancel_reset();
            }
        });
    };

    view! {
        <form class="evaluation-form" on:submit=on_submit>
            <div class="identity-panel">
                <div class="form-group">
                    <label>
                        "👋 Your Name "
                        <span class="required">"*"</span>
                    </label>
                    <input
                        type="text"
                        required=true
                        placeholder="Enter your name"
                        prop:value=move || session.with(|s| s.draft.coach_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| s.set_field(FieldUpdate::CoachName(value)))
                        }
                    />
                </div>
                <div class="form-group">
                    <label>
                        "👤 Who are you evaluating? "
                        <span class="required">"*"</span>
                    </label>
                    <input
                        type="text"
                        required=true
                        placeholder="Enter their name"
                        prop:value=move || session.with(|s| s.draft.evaluatee_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| s.set_field(FieldUpdate::EvaluateeName(value)))
                        }
                    />
                </div>
            </div>

            {CATEGORIES.iter().map(|definition| view! {
                <RatingSection definition=definition session=session />
            }).collect::<Vec<_>>()}

            <div class="overall-panel form-group">
                <label>"💝 Overall Thoughts & Encouragement"</label>
                <textarea
                    rows="5"
                    placeholder="Share your overall impressions, celebrate their strengths, offer encouragement, and provide any final thoughts..."
                    prop:value=move || session.with(|s| s.draft.overall_comments.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.set_field(FieldUpdate::OverallComments(value)))
                    }
                ></textarea>
            </div>

            {move || session.with(|s| s.last_error.clone()).map(|e| view! {
                <div class="error-panel">
                    <p>"Error: " {e}</p>
                </div>
            })}

            <div class="button-group">
                <button type="button" class="reset-btn" on:click=start_over>
                    "Start Over"
                </button>
                <button type="submit" class="submit-btn">
                    "✨ Submit Evaluation"
                </button>
            </div>
        </form>
    }
}
