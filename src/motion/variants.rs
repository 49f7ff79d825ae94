//! Declarative animation variants rendered as inline CSS.
//!
//! A [`Variants`] value is a tiny table: the pose an element rests in while hidden, the pose it
//! moves to once visible, and the [`Transition`] between them. The browser's CSS transitions run
//! the actual tween.

use std::{fmt::Write, time::Duration};

use super::sequence::Phase;

/// Opacity, offset (px) and scale of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent, otherwise in place.
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::VISIBLE
    };

    pub const fn offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    fn write_css(&self, out: &mut String) {
        let _ = write!(
            out,
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        );
    }
}

/// CSS timing functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Ease,
    EaseOut,
    Linear,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::EaseOut => "ease-out",
            Easing::Linear => "linear",
        }
    }
}

/// How long the move from hidden to visible takes, and when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::Ease,
        }
    }

    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// The hidden and visible poses of an element and the transition between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

impl Variants {
    pub const fn new(hidden: Pose, transition: Transition) -> Self {
        Self {
            hidden,
            visible: Pose::VISIBLE,
            transition,
        }
    }

    /// The inline style for `phase`.
    ///
    /// `extra_delay` is added to the transition's own delay; groups use it to stagger children.
    /// Hiding is instant, only revealing is animated. With `reduced_motion` the element always
    /// rests in its visible pose.
    pub fn style(&self, phase: Phase, extra_delay: Duration, reduced_motion: bool) -> String {
        let mut style = String::new();

        if reduced_motion {
            self.visible.write_css(&mut style);
            style.push_str(" transition: none;");
            return style;
        }

        match phase {
            Phase::Hidden => {
                self.hidden.write_css(&mut style);
                style.push_str(" transition: none;");
            }
            Phase::Visible => {
                self.visible.write_css(&mut style);
                let Transition {
                    duration,
                    delay,
                    easing,
                } = self.transition;
                let duration = duration.as_millis();
                let delay = delay.saturating_add(extra_delay).as_millis();
                let easing = easing.as_css();
                let _ = write!(
                    style,
                    " transition: opacity {duration}ms {easing} {delay}ms, transform {duration}ms {easing} {delay}ms;"
                );
            }
        }

        style
    }
}
