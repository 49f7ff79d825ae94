//! The events board: category filter, event list, and the add-event form.
//!
//! The page owns the [`Catalog`] and hands the same signal to the list and the form, so a new
//! event shows up in the list as soon as it is submitted.

use std::time::Duration;

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use crate::{
    catalog::{Catalog, Category, Event, Filter},
    error::Field,
    form::EventForm,
    motion::{
        use_in_view, use_replay, Cue, Easing, Pose, Reveal, RevealItem, Stagger, Transition,
        Variants,
    },
};

const HEADER: Variants = Variants::new(
    Pose::HIDDEN.offset(0.0, -20.0),
    Transition::new(Duration::from_millis(600)).easing(Easing::EaseOut),
);

const FILTER_BUTTON: Variants = Variants::new(
    Pose::HIDDEN.offset(0.0, 10.0),
    Transition::new(Duration::from_millis(400)),
);

const FILTER_BUTTONS: Stagger =
    Stagger::new(Duration::from_millis(100)).delay_children(Duration::from_millis(200));

const FORM_PANEL: Variants = Variants::new(
    Pose::HIDDEN.offset(20.0, 0.0),
    Transition::new(Duration::from_millis(600)).delay(Duration::from_millis(300)),
);

const CARD: Variants = Variants::new(
    Pose::HIDDEN.offset(0.0, 20.0),
    Transition::new(Duration::from_millis(500)),
);

const CARDS: Stagger =
    Stagger::new(Duration::from_millis(100)).delay_children(Duration::from_millis(300));

const EMPTY_MESSAGE: Variants = Variants::new(Pose::HIDDEN, Transition::new(Duration::from_millis(500)));

#[component]
pub fn Events() -> Element {
    let catalog = use_signal(Catalog::seeded);
    let filter = use_signal(Filter::default);

    rsx! {
        div { class: "container page",
            Reveal { variants: HEADER, cue: Cue::Mount,
                h1 { class: "page-title light", "Community Events" }
            }

            div { class: "events-layout",
                div { class: "events-main",
                    CategoryFilter { filter }
                    EventList { catalog, filter }
                }
                Reveal { variants: FORM_PANEL, cue: Cue::Mount, class: "panel events-side",
                    NewEventForm { catalog }
                }
            }
        }
    }
}

/// The row of category buttons. Clicking one switches the list's filter.
#[component]
fn CategoryFilter(mut filter: Signal<Filter>) -> Element {
    let group = use_in_view(Cue::Mount);
    let phase = group.phase();

    rsx! {
        div { class: "filter-row",
            for (index , option) in Filter::OPTIONS.into_iter().enumerate() {
                RevealItem {
                    key: "{option}",
                    variants: FILTER_BUTTON,
                    phase,
                    delay: FILTER_BUTTONS.delay_for(index),
                    button {
                        r#type: "button",
                        class: if filter() == option { "pill pill-active" } else { "pill pill-soft" },
                        onclick: move |_| {
                            if filter() != option {
                                debug!(%option, "filter changed");
                                filter.set(option);
                            }
                        },
                        "{option}"
                    }
                }
            }
        }
    }
}

/// The filtered events. The whole list replays its entry animation every time the filter changes.
#[component]
pub fn EventList(catalog: Signal<Catalog>, filter: Signal<Filter>) -> Element {
    let shown = use_memo(move || {
        catalog
            .read()
            .filter(filter())
            .cloned()
            .collect::<Vec<Event>>()
    });
    let phase = use_replay(move || filter());
    let phase = phase();

    rsx! {
        div { class: "event-list",
            for (index , event) in shown().into_iter().enumerate() {
                RevealItem {
                    key: "{event.id}",
                    variants: CARD,
                    phase,
                    delay: CARDS.delay_for(index),
                    class: "event-card lift",
                    EventCard { event }
                }
            }

            if shown.read().is_empty() {
                Reveal { variants: EMPTY_MESSAGE, cue: Cue::Mount, class: "empty",
                    "No events found. Try changing your filter or add a new event."
                }
            }
        }
    }
}

#[component]
fn EventCard(event: Event) -> Element {
    let date = event.display_date();

    rsx! {
        div { class: "event-card-head",
            h2 { "{event.title}" }
            span { class: "badge", "{event.category}" }
        }
        div { class: "event-meta",
            p { "📅 {date}" }
            p { "📍 {event.location}" }
        }
        p { class: "event-description", "{event.description}" }
    }
}

/// The "Add New Event" panel.
///
/// The required attributes make the browser refuse an incomplete submit; [`EventForm::submit`]
/// applies the same rule, so nothing partial reaches the catalog either way.
#[component]
fn NewEventForm(mut catalog: Signal<Catalog>) -> Element {
    let mut form = use_signal(EventForm::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit(&mut catalog.write());
        match result {
            Ok(event) => info!(id = event.id, title = %event.title, "event added"),
            Err(err) => warn!("event not added: {err}"),
        }
    };

    let draft = form.read().draft().clone();

    rsx! {
        h2 { class: "panel-title", "Add New Event" }
        form { onsubmit,
            div { class: "field",
                label { r#for: "event-title", "Title" }
                input {
                    id: "event-title",
                    r#type: "text",
                    required: true,
                    value: "{draft.title}",
                    oninput: move |e| form.write().set(Field::Title, e.value()),
                }
            }
            div { class: "field",
                label { r#for: "event-date", "Date" }
                input {
                    id: "event-date",
                    r#type: "date",
                    required: true,
                    value: "{draft.date}",
                    oninput: move |e| form.write().set(Field::Date, e.value()),
                }
            }
            div { class: "field",
                label { r#for: "event-location", "Location" }
                input {
                    id: "event-location",
                    r#type: "text",
                    required: true,
                    value: "{draft.location}",
                    oninput: move |e| form.write().set(Field::Location, e.value()),
                }
            }
            div { class: "field",
                label { r#for: "event-category", "Category" }
                select {
                    id: "event-category",
                    value: "{draft.category}",
                    onchange: move |e| {
                        if let Err(err) = form.write().select_category(&e.value()) {
                            warn!("{err}");
                        }
                    },
                    for category in Category::ALL {
                        option {
                            value: "{category}",
                            selected: draft.category == category,
                            "{category}"
                        }
                    }
                }
            }
            div { class: "field",
                label { r#for: "event-description", "Description" }
                textarea {
                    id: "event-description",
                    rows: "3",
                    value: "{draft.description}",
                    oninput: move |e| form.write().set(Field::Description, e.value()),
                }
            }
            button { class: "submit lift", r#type: "submit", "Add Event" }
        }
    }
}
