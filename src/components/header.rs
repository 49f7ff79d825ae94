use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container site-header-inner",
                Link { to: Route::Home, class: "brand", "Communion" }
                nav {
                    ul { class: "nav-links",
                        li { Link { to: Route::Home, "Home" } }
                        li { Link { to: Route::Events, "Events" } }
                        li { Link { to: Route::About, "About" } }
                    }
                }
                // decorative: there are no accounts
                div { class: "header-actions",
                    button { class: "pill pill-teal", r#type: "button", "Login" }
                    button { class: "pill pill-dark", r#type: "button", "Work with us" }
                }
            }
        }
    }
}
