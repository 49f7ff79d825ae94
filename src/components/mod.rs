//! Navigation chrome shared by every page.

mod footer;
mod header;

pub use footer::Footer;
pub use header::Header;

use dioxus::prelude::*;

use crate::Route;

/// Layout for every route: header, the active page, footer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "shell",
            Header {}
            main { Outlet::<Route> {} }
            Footer {}
        }
    }
}
