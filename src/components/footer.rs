use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { class: "brand", "Communion" }
                p { "Connecting people across faiths & interests." }
                p { class: "muted", "© 2025 Communion. All rights reserved." }
            }
        }
    }
}
