/// Component to display the submitted reviews.
/// Renders a placeholder while the list is empty, otherwise one article per review.
use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: MaybeSignal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="reviews">
            <h2>{ "Reviews" }</h2>
            {move || {
                let reviews = reviews.get();
                if reviews.is_empty() {
                    view! { <p class="reviews-empty">{ "No reviews yet" }</p> }.into_view()
                } else {
                    reviews.into_iter().map(|review| {
                        let stars = review.stars();
                        view! {
                            <article class="review">
                                <div class="review-email">{ review.email }</div>
                                <div class="review-stars">{ stars }</div>
                                <p class="review-text">{ review.text }</p>
                            </article>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}
