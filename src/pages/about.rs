use std::time::Duration;

use dioxus::prelude::*;

use crate::motion::{use_in_view, Cue, Easing, Pose, RevealItem, Stagger, Transition, Variants};

const TEXT: Variants = Variants::new(
    Pose::HIDDEN.offset(0.0, 20.0),
    Transition::new(Duration::from_millis(600)).easing(Easing::EaseOut),
);

const CARD: Variants = Variants::new(
    Pose::HIDDEN.scale(0.95),
    Transition::new(Duration::from_millis(600)).easing(Easing::EaseOut),
);

const CHILDREN: Stagger = Stagger::new(Duration::from_millis(200));

const CARDS: [(&str, &str, &str, &str); 2] = [
    (
        "https://media.istockphoto.com/id/1153816876/photo/smiling-group-of-people-walking-together-outdoors.jpg?s=612x612&w=0&k=20&c=fmWuzI08_wlIHy2Y3Ovs0ZnZgtMPYKN3ecHML51qw78=",
        "Community gathering",
        "Our Community",
        "We bring together people from all walks of life, creating spaces where meaningful connections flourish regardless of background or belief.",
    ),
    (
        "https://media.istockphoto.com/id/1480574526/photo/happy-multigenerational-people-having-fun-sitting-on-grass-in-a-public-park.jpg?s=612x612&w=0&k=20&c=iIzSiY2FK9mWTCmV8Ip8zpvXma7f1Qbd-UuKXNJodPg=",
        "Interfaith event",
        "Our Mission",
        "We're dedicated to building bridges across different faith traditions while fostering mutual respect, understanding, and collaborative innovation.",
    ),
];

/// The whole page is one group: it arms once, and its children follow 0.2s apart.
#[component]
pub fn About() -> Element {
    let mut group = use_in_view(Cue::InView);
    let phase = group.phase();

    rsx! {
        div {
            class: "container page",
            onvisible: move |evt| group.observe(evt),

            RevealItem { variants: TEXT, phase, delay: CHILDREN.delay_for(0),
                h1 { class: "page-title", "About Communion" }
            }
            RevealItem { variants: TEXT, phase, delay: CHILDREN.delay_for(1),
                p { class: "section-lead narrow",
                    "Communion is not just another platform—it's a vibrant space that unites diverse faiths, beliefs, and traditions. "
                    "By promoting collaboration and connection, we're fostering a world where differences become strengths and unity becomes the norm."
                }
            }

            div { class: "card-grid",
                for (index , (src , alt , title , body)) in CARDS.into_iter().enumerate() {
                    RevealItem {
                        key: "{title}",
                        variants: CARD,
                        phase,
                        delay: CHILDREN.delay_for(2 + index),
                        class: "image-card",
                        img { src, alt }
                        div { class: "image-card-body",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }

            RevealItem {
                variants: TEXT,
                phase,
                delay: CHILDREN.delay_for(2 + CARDS.len()),
                class: "panel narrow",
                h2 { "Join Our Journey" }
                p {
                    "Whether you're seeking spiritual growth, meaningful connections, or opportunities to serve your community, "
                    "Communion provides the platform and resources you need to thrive."
                }
                button { class: "pill pill-teal", r#type: "button", "Learn More About Our Values" }
            }
        }
    }
}
