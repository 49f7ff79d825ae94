use std::time::Duration;

use dioxus::prelude::*;

use super::{
    config::use_motion_config,
    sequence::Phase,
    trigger::{use_in_view, Cue},
    variants::Variants,
};

/// A block that animates from its hidden to its visible pose once its own trigger arms.
///
/// Each `Reveal` watches itself, so siblings arm independently as they scroll into view.
#[component]
pub fn Reveal(
    variants: Variants,
    #[props(default)] cue: Cue,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let config = use_motion_config();
    let mut in_view = use_in_view(cue);
    let style = variants.style(in_view.phase(), Duration::ZERO, config.reduced_motion);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onvisible: move |evt| in_view.observe(evt),
            {children}
        }
    }
}

/// A block whose phase is decided by its parent.
///
/// Groups use this for their children: the parent owns one trigger (or a replay cycle) and passes
/// each child its phase along with its stagger delay.
#[component]
pub fn RevealItem(
    variants: Variants,
    phase: Phase,
    #[props(default)] delay: Duration,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let config = use_motion_config();
    let style = variants.style(phase, delay, config.reduced_motion);

    rsx! {
        div { class: "{class}", style: "{style}", {children} }
    }
}
