use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    motion::{Easing, Pose, Reveal, Transition, Variants},
    Route,
};

const HERO_IMAGE: &str =
    "https://www.meltingpot.com/towson-md/files/3126/Careers-Hands-Header-Desktop.jpg";

/// Heading, paragraph and call to action fade up one after another, 0.2s apart.
const fn fade_up(delay_ms: u64) -> Variants {
    Variants::new(
        Pose::HIDDEN.offset(0.0, 20.0),
        Transition::new(Duration::from_millis(800))
            .delay(Duration::from_millis(delay_ms))
            .easing(Easing::EaseOut),
    )
}

const HEADING: Variants = fade_up(0);
const PARAGRAPH: Variants = fade_up(200);
const CALL_TO_ACTION: Variants = fade_up(400);

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            style: "background-image: url('{HERO_IMAGE}');",
            div { class: "hero-shade" }
            div { class: "container hero-content",
                div { class: "narrow",
                    Reveal { variants: HEADING,
                        h1 { class: "hero-title", "Unite, Innovate, Inspires Together" }
                    }
                    Reveal { variants: PARAGRAPH,
                        p { class: "hero-lead",
                            "Join us to be part of a community where spirituality meets innovation. "
                            "Together, we'll build a world that's more inclusive, engaging, and connected than ever before!"
                        }
                    }
                    Reveal { variants: CALL_TO_ACTION,
                        Link { to: Route::Events, class: "cta", "Explore Events" }
                    }
                }
            }
        }

        section { class: "intro",
            div { class: "container centered",
                Reveal { variants: HEADING,
                    h2 { class: "section-title", "Connecting People Across Faiths & Interests" }
                }
                div { class: "narrow centered-block",
                    Reveal { variants: PARAGRAPH,
                        p { class: "section-lead",
                            "We believe a regular look in the mirror contributes to a healthier society. "
                            "Communion App helps you connect with like-minded individuals through events "
                            "and community support, regardless of your faith or interests."
                        }
                    }
                    Reveal { variants: CALL_TO_ACTION,
                        Link { to: Route::Events, class: "cta", "Discover Community Events" }
                    }
                }
            }
        }
    }
}
