use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use crate::components::reviews_list::ReviewsList;
use crate::models::form_state::{FormField, ReviewFormState};
use crate::models::review::{Rating, Review};
use web_sys::HtmlSelectElement;

/// Memo of the committed reviews. The list only grows, so its length is the
/// only thing that has to be watched; editing a draft never clones it.
pub(crate) fn committed_reviews(state: RwSignal<ReviewFormState>) -> Memo<Vec<Review>> {
    let count = create_memo(move |_| state.with(|s| s.reviews().len()));
    create_memo(move |_| {
        count.track();
        state.with_untracked(|s| s.reviews().to_vec())
    })
}

/// Review submission form together with the list of reviews it has accepted.
#[component]
pub fn ReviewForm() -> impl IntoView {
    // All form state lives in one signal; the views below are projections of it.
    let state = create_rw_signal(ReviewFormState::new());

    let reviews = committed_reviews(state);

    let on_input = move |field: FormField| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            let rejected = state
                .try_update(|s| s.input(field, value).err())
                .flatten();
            if let Some(err) = rejected {
                log!("[FORM] Ignoring {} input: {}", field, err);
                // The select still shows the rejected option.
                event_target::<HtmlSelectElement>(&ev)
                    .set_value(&state.with_untracked(ReviewFormState::rating_value));
            }
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            if s.submit().is_ok() {
                log!("[SUBMIT] Review accepted, {} in total", s.reviews().len());
            }
        });
    };

    view! {
        <div class="review-page">
            <form class="review-form" on:submit=handle_submit>
                <div>
                    <label for=FormField::Email.id()>{ "Email" }</label>
                    <input
                        type="email"
                        id=FormField::Email.id()
                        prop:value=move || state.with(|s| s.email().to_string())
                        on:input=on_input(FormField::Email)
                        required=true
                    />
                </div>

                <div>
                    <label for=FormField::Rating.id()>{ "Rating" }</label>
                    <select
                        id=FormField::Rating.id()
                        prop:value=move || state.with(ReviewFormState::rating_value)
                        on:change=on_input(FormField::Rating)
                        required=true
                    >
                        <option value="">{ "Select rating" }</option>
                        {Rating::ALL.iter().rev().map(|rating| view! {
                            <option value=rating.to_string()>{ rating.label() }</option>
                        }).collect_view()}
                    </select>
                </div>

                <div>
                    <label for=FormField::Text.id()>{ "Your Review" }</label>
                    <textarea
                        id=FormField::Text.id()
                        rows="4"
                        prop:value=move || state.with(|s| s.text().to_string())
                        on:input=on_input(FormField::Text)
                        required=true
                    />
                    {move || {
                        let message = state.with(ReviewFormState::text_error_message);
                        (!message.is_empty()).then(|| view! {
                            <p class="review-error">{ message }</p>
                        })
                    }}
                </div>

                <button type="submit">{ "Submit Review" }</button>
            </form>
            <ReviewsList reviews=reviews />
        </div>
    }
}
