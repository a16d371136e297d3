//! DOM plumbing shared by the browser tests: mounting containers and
//! driving form controls the way a user would.
#![allow(dead_code)]

use std::time::Duration;
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventInit, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Creates a fresh container attached to the body for one test.
pub fn mount_container(id: &str) -> HtmlElement {
    let container = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    container.set_id(id);
    document().body().unwrap().append_child(&container).unwrap();
    container
}

pub fn cleanup(container: &HtmlElement) {
    container.remove();
}

/// Gives pending reactive updates a chance to reach the DOM.
pub async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

pub fn query<T: JsCast>(container: &HtmlElement, selector: &str) -> T {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<T>()
        .unwrap()
}

pub fn count(container: &HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

pub fn text_of(container: &HtmlElement) -> String {
    container.text_content().unwrap_or_default()
}

/// Dispatches a bubbling, cancelable event and reports whether a handler
/// called `preventDefault` on it.
fn dispatch(target: &EventTarget, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

pub fn email_input(container: &HtmlElement) -> HtmlInputElement {
    query(container, "#email")
}

pub fn rating_select(container: &HtmlElement) -> HtmlSelectElement {
    query(container, "#rating")
}

pub fn review_input(container: &HtmlElement) -> HtmlTextAreaElement {
    query(container, "#text")
}

pub fn type_email(container: &HtmlElement, value: &str) {
    let input = email_input(container);
    input.set_value(value);
    dispatch(&input, "input");
}

pub fn select_rating(container: &HtmlElement, value: &str) {
    let select = rating_select(container);
    select.set_value(value);
    dispatch(&select, "change");
}

pub fn type_review(container: &HtmlElement, value: &str) {
    let textarea = review_input(container);
    textarea.set_value(value);
    dispatch(&textarea, "input");
}

/// Appends an extra option to the rating select, standing in for a value the
/// rendered options never offer.
pub fn add_rating_option(container: &HtmlElement, value: &str) {
    let option = document().create_element("option").unwrap();
    option.set_attribute("value", value).unwrap();
    option.set_text_content(Some(value));
    rating_select(container).append_child(&option).unwrap();
}

/// Fires a submit event at the form, returning true if the default action
/// (page navigation) was suppressed.
pub fn submit(container: &HtmlElement) -> bool {
    let form: HtmlFormElement = query(container, "form");
    dispatch(&form, "submit")
}

pub async fn fill_and_submit(container: &HtmlElement, email: &str, rating: &str, text: &str) {
    type_email(container, email);
    select_rating(container, rating);
    type_review(container, text);
    settle().await;
    submit(container);
    settle().await;
}
