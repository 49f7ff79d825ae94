//! Entry animations.
//!
//! An element starts in the hidden pose of its [`Variants`] and moves to the visible pose once it
//! is armed, either by its own [`use_in_view`] trigger ([`Reveal`]) or by a parent that staggers a
//! group of [`RevealItem`]s.

mod config;
mod reveal;
mod sequence;
mod trigger;
mod variants;

pub use config::{use_motion_config, MotionConfig};
pub use reveal::{Reveal, RevealItem};
pub use sequence::{use_replay, Phase, RefreshCycle, Stagger};
pub use trigger::{use_in_view, Cue, InView, TriggerState, ViewportTrigger};
pub use variants::{Easing, Pose, Transition, Variants};
