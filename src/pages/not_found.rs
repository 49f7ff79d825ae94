use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container page centered",
            h1 { class: "page-title", "Page not found" }
            p { class: "section-lead", "There is nothing at /{path}." }
            Link { to: Route::Home, class: "cta", "Back to the home page" }
        }
    }
}
