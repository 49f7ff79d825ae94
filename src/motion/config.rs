use std::time::Duration;

use dioxus::prelude::*;

/// Site-wide animation settings.
///
/// The root component provides one through context; anything rendered without a provider (tests,
/// isolated components) falls back to [`MotionConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Fraction of an element (0.0 to 1.0) that must be on screen before it reveals.
    pub visibility_threshold: f64,
    /// How long the events list stays hidden after the filter changes.
    pub refresh_delay: Duration,
    /// Render everything in its final pose, without transitions.
    pub reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.1,
            refresh_delay: Duration::from_millis(100),
            reduced_motion: false,
        }
    }
}

impl MotionConfig {
    /// The defaults, with `reduced_motion` taken from the user's platform preference.
    pub fn from_environment() -> Self {
        Self::default().with_reduced_motion(prefers_reduced_motion())
    }

    pub fn with_visibility_threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }
}

/// The [`MotionConfig`] provided by an ancestor, or the default one.
pub fn use_motion_config() -> MotionConfig {
    try_use_context::<MotionConfig>().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .is_some_and(|query| query.matches())
}

#[cfg(not(target_arch = "wasm32"))]
fn prefers_reduced_motion() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(
            MotionConfig::default()
                .with_visibility_threshold(3.0)
                .visibility_threshold,
            1.0
        );
        assert_eq!(
            MotionConfig::default()
                .with_visibility_threshold(-1.0)
                .visibility_threshold,
            0.0
        );
    }

    #[test]
    fn native_environment_keeps_motion() {
        assert!(!MotionConfig::from_environment().reduced_motion);
    }
}
