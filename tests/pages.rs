//! Server-side renders of the pages, outside the router.

use std::{cell::Cell, time::Duration};

use communion::{
    pages::{About, EventList, Events},
    Catalog, Category, Filter, MotionConfig,
};
use dioxus::prelude::*;

const ABOUT_HIDDEN_TEXT: &str =
    "opacity: 0; transform: translate(0px, 20px) scale(1); transition: none;";
const HIDDEN_CARD: &str = ABOUT_HIDDEN_TEXT;
const FIRST_CARD_VISIBLE: &str = "opacity 500ms ease 300ms";
const SECOND_CARD_VISIBLE: &str = "opacity 500ms ease 400ms";
const ABOUT_HIDDEN_CARD: &str =
    "opacity: 0; transform: translate(0px, 0px) scale(0.95); transition: none;";

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Pump the dom until its render satisfies `done`, and return that render.
async fn render_until(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    let html = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            dom.wait_for_work().await;
            let _ = dom.render_immediate_to_vec();
            let html = dioxus_ssr::render(dom);
            if done(&html) {
                return html;
            }
        }
    })
    .await;
    html.expect("render never settled")
}

thread_local! {
    static FILTER: Cell<Option<Signal<Filter>>> = const { Cell::new(None) };
}

/// The seeded list on its own, with its filter signal reachable from the test.
fn filtered_list() -> Element {
    let catalog = use_signal(Catalog::seeded);
    let filter = use_signal(Filter::default);
    FILTER.with(|slot| slot.set(Some(filter)));

    rsx! { EventList { catalog, filter } }
}

fn select(dom: &VirtualDom, option: Filter) {
    let mut filter = FILTER
        .with(Cell::get)
        .expect("filtered_list was not rendered");
    dom.in_runtime(|| {
        if filter() != option {
            filter.set(option);
        }
    });
}

#[test]
fn events_page_lists_seed_events_in_order() {
    let html = render(Events);

    let positions: Vec<usize> = [
        "Interfaith Dialogue",
        "Community Cleanup",
        "Monthly Social Mixer",
    ]
    .iter()
    .map(|title| html.find(title).unwrap_or_else(|| panic!("{title} missing")))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(html.contains("4/15/2025"));
    assert!(html.contains("Community Center"));
    assert!(!html.contains("No events found"));
}

#[test]
fn events_page_has_filter_buttons_and_form() {
    let html = render(Events);

    for label in ["All", "Religious", "Social", "Charity"] {
        assert!(html.contains(&format!(">{label}</button>")), "{label}");
    }
    assert!(html.contains("Add New Event"));
    assert!(html.contains(r#"type="date""#));
    assert!(html.contains("<textarea"));
    assert_eq!(html.matches("required").count(), 3);
}

#[test]
fn about_page_stays_hidden_until_seen() {
    // nothing reports visibility during a server render, so no trigger ever arms
    let html = render(About);

    assert!(html.contains("About Communion"));
    assert!(html.contains("Our Community"));
    assert!(html.contains("Our Mission"));
    assert_eq!(html.matches(ABOUT_HIDDEN_TEXT).count(), 3);
    assert_eq!(html.matches(ABOUT_HIDDEN_CARD).count(), 2);
}

#[test]
fn reduced_motion_renders_about_page_visible() {
    fn app() -> Element {
        use_context_provider(|| MotionConfig::default().with_reduced_motion(true));
        rsx! { About {} }
    }

    let html = render(app);
    assert!(!html.contains("opacity: 0"));
    assert!(html.contains("opacity: 1"));
}

#[tokio::test]
async fn event_list_reveals_after_mount() {
    let mut dom = VirtualDom::new(Events);
    dom.rebuild_in_place();
    assert!(!dioxus_ssr::render(&dom).contains(FIRST_CARD_VISIBLE));

    let revealed = render_until(&mut dom, |html| html.contains(FIRST_CARD_VISIBLE)).await;

    // second and third cards follow 100ms apart
    assert!(revealed.contains(SECOND_CARD_VISIBLE));
    assert!(revealed.contains("opacity 500ms ease 500ms"));
}

#[tokio::test]
async fn mount_reveal_skips_the_refresh_delay() {
    fn app() -> Element {
        use_context_provider(|| {
            MotionConfig::default().with_refresh_delay(Duration::from_secs(60))
        });
        rsx! { Events {} }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();

    // a minute-long refresh delay would trip the five second timeout if mount waited for it
    let revealed = render_until(&mut dom, |html| html.contains(FIRST_CARD_VISIBLE)).await;
    assert!(revealed.contains("Interfaith Dialogue"));
}

#[tokio::test]
async fn switching_the_filter_replays_only_matching_cards() {
    let mut dom = VirtualDom::new(filtered_list);
    dom.rebuild_in_place();
    render_until(&mut dom, |html| html.contains(FIRST_CARD_VISIBLE)).await;

    select(&dom, Filter::Only(Category::Social));
    let hidden = render_until(&mut dom, |html| {
        html.contains(HIDDEN_CARD) && !html.contains("Interfaith Dialogue")
    })
    .await;
    assert!(hidden.contains("Monthly Social Mixer"));
    assert!(!hidden.contains("Community Cleanup"));

    let shown = render_until(&mut dom, |html| html.contains(FIRST_CARD_VISIBLE)).await;
    assert!(shown.contains("Monthly Social Mixer"));
    assert!(!shown.contains("Interfaith Dialogue"));
    assert!(!shown.contains(SECOND_CARD_VISIBLE));
    assert!(!shown.contains(HIDDEN_CARD));

    // picking the active filter again leaves the list alone
    select(&dom, Filter::Only(Category::Social));
    let quiet = tokio::time::timeout(Duration::from_millis(300), async {
        loop {
            dom.wait_for_work().await;
            let _ = dom.render_immediate_to_vec();
            let html = dioxus_ssr::render(&dom);
            assert!(!html.contains(HIDDEN_CARD), "list replayed: {html}");
        }
    })
    .await;
    assert!(quiet.is_err());
    assert!(dioxus_ssr::render(&dom).contains(FIRST_CARD_VISIBLE));
}

#[tokio::test]
async fn setting_the_same_filter_does_not_replay() {
    // a write that leaves the value equal, as a renderer without the click guard would make
    let mut dom = VirtualDom::new(filtered_list);
    dom.rebuild_in_place();
    render_until(&mut dom, |html| html.contains(FIRST_CARD_VISIBLE)).await;

    let mut filter = FILTER.with(Cell::get).expect("filtered_list was not rendered");
    dom.in_runtime(|| filter.set(Filter::All));

    let quiet = tokio::time::timeout(Duration::from_millis(300), async {
        loop {
            dom.wait_for_work().await;
            let _ = dom.render_immediate_to_vec();
            assert!(!dioxus_ssr::render(&dom).contains(HIDDEN_CARD));
        }
    })
    .await;
    assert!(quiet.is_err());
}
