//! Communion: the marketing site for a community events platform.
//!
//! Three pages behind a shared header and footer. The home and about pages reveal their content as
//! it scrolls into view; the events page keeps an in-memory [`Catalog`] that can be filtered by
//! category and extended through a form.

use dioxus::prelude::*;

pub mod catalog;
pub mod components;
pub mod error;
pub mod form;
pub mod motion;
pub mod pages;

pub use catalog::{Catalog, Category, Draft, Event, Filter};
pub use error::{Field, FormError, ParseCategoryError};
pub use form::EventForm;
pub use motion::MotionConfig;

use components::Shell;
use pages::{About, Events, Home, NotFound};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home,

        #[route("/events")]
        Events,

        #[route("/about")]
        About,

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// The root component.
#[component]
pub fn App() -> Element {
    use_context_provider(MotionConfig::from_environment);

    rsx! {
        Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
