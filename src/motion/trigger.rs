//! One-shot "has this element been seen" tracking.
//!
//! [`ViewportTrigger`] is the renderer-independent state machine: it is fed intersection ratios and
//! arms the first time one reaches its threshold. [`use_in_view`] wires it to the `onvisible` event,
//! which the renderer backs with its own intersection observer.

use dioxus::html::VisibleData;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::{config::use_motion_config, sequence::Phase};

/// Whether an element has been seen yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    #[default]
    Unarmed,
    Armed,
}

/// Arms once, the first time an observation reaches the threshold, and never disarms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTrigger {
    threshold: f64,
    state: TriggerState,
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl ViewportTrigger {
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: TriggerState::Unarmed,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == TriggerState::Armed
    }

    /// Record that `intersection_ratio` of the element is visible.
    ///
    /// Returns true only for the observation that armed the trigger.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        // NaN never reaches the threshold
        if intersection_ratio >= self.threshold {
            self.arm()
        } else {
            false
        }
    }

    /// Arm without an observation. Returns false if it was already armed.
    pub fn arm(&mut self) -> bool {
        let was_unarmed = self.state == TriggerState::Unarmed;
        self.state = TriggerState::Armed;
        was_unarmed
    }
}

/// What arms an element's reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cue {
    /// The element scrolls into view.
    #[default]
    InView,
    /// The element is mounted.
    Mount,
}

/// A [`ViewportTrigger`] owned by a component, created with [`use_in_view`].
///
/// Attach [`InView::observe`] as the `onvisible` handler of the element being watched.
#[derive(Clone, Copy, PartialEq)]
pub struct InView {
    trigger: Signal<ViewportTrigger>,
}

impl InView {
    /// Reading this subscribes the component to the trigger.
    pub fn is_armed(&self) -> bool {
        self.trigger.read().is_armed()
    }

    pub fn phase(&self) -> Phase {
        Phase::from_armed(self.is_armed())
    }

    /// Feed a visibility event to the trigger.
    ///
    /// If the renderer can't report intersection ratios the element is revealed right away, so it
    /// never stays hidden.
    pub fn observe(&mut self, evt: Event<VisibleData>) {
        if self.trigger.peek().is_armed() {
            return;
        }

        let armed = match evt.get_intersection_ratio() {
            Ok(ratio) => self.trigger.write().observe(ratio),
            Err(err) => {
                debug!("visibility data unavailable ({err}), revealing immediately");
                self.trigger.write().arm()
            }
        };

        if armed {
            debug!("element entered the viewport");
        }
    }

    pub fn arm(&mut self) {
        if !self.trigger.peek().is_armed() {
            self.trigger.write().arm();
        }
    }
}

/// Create a one-shot trigger for the calling component.
///
/// With [`Cue::Mount`] the trigger arms right after the first render; with [`Cue::InView`] it waits
/// for an `onvisible` event that reaches [`MotionConfig::visibility_threshold`].
///
/// [`MotionConfig::visibility_threshold`]: super::MotionConfig::visibility_threshold
pub fn use_in_view(cue: Cue) -> InView {
    let config = use_motion_config();
    let trigger = use_signal(|| ViewportTrigger::new(config.visibility_threshold));
    let mut in_view = InView { trigger };

    use_effect(move || {
        if cue == Cue::Mount {
            in_view.arm();
        }
    });

    in_view
}
