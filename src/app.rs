/// Main application entry point for ReviewWare.
/// Mounts the review form, which owns the submitted reviews and renders their list.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::review_form::ReviewForm;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ReviewWare"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ReviewPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ReviewPage() -> impl IntoView {
    view! {
        <div>
            <h1>{ "Leave a Review" }</h1>
            <ReviewForm />
        </div>
    }
}
