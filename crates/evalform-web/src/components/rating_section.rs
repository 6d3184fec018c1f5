use evalform_core::{CategoryDefinition, EvaluationSession, FieldUpdate, Rating};
use leptos::prelude::*;

/// One competency category: guidance, the 1-5 scale, and free-text comments.
#[component]
pub fn RatingSection(
    definition: &'static CategoryDefinition,
    session: RwSignal<EvaluationSession>,
) -> impl IntoView {
    let key = definition.key;
    let current = move || session.with(|s| s.draft.category(key).rating);
    let comments = move || session.with(|s| s.draft.category(key).comments.clone());

    view! {
        <section class="rating-section">
            <div class="section-intro">
                <h2>{definition.title}</h2>
                <p>{definition.description}</p>
            </div>

            <div class="section-questions">
                <h3>"💭 Things to consider:"</h3>
                <ul>
                    {definition.questions.iter().map(|q| view! {
                        <li>{*q}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>

            <div class="form-group">
                <label>
                    "How would you rate this? "
                    <span class="required">"*"</span>
                </label>
                <div class="rating-options">
                    {Rating::all().iter().map(|r| {
                        let r = *r;
                        let is_selected = move || current() == Some(r);
                        view! {
                            <label class=move || r.style().class_for(is_selected())>
                                <input
                                    type="radio"
                                    class="sr-only"
                                    name=key.field_name()
                                    value=r.value()
                                    required=true
                                    prop:checked=is_selected
                                    on:change=move |_| session.update(|s| {
                                        s.set_field(FieldUpdate::Rating(key, r))
                                    })
                                />
                                <span class="rating-number">{r.value()}</span>
                                <span class="rating-label">{r.label()}</span>
                            </label>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="form-group">
                <label>"💬 Share your thoughts"</label>
                <textarea
                    rows="4"
                    placeholder="Share specific examples, celebrate wins, or offer gentle guidance..."
                    prop:value=comments
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.set_field(FieldUpdate::Comments(key, value)))
                    }
                ></textarea>
            </div>
        </section>
    }
}
