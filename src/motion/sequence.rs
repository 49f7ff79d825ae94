use std::time::Duration;

use dioxus::prelude::*;

use super::config::use_motion_config;

/// Which pose of its variants an element is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Hidden,
    Visible,
}

impl Phase {
    pub fn from_armed(armed: bool) -> Self {
        if armed {
            Phase::Visible
        } else {
            Phase::Hidden
        }
    }
}

/// Delays for the children of a group that reveals together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stagger {
    /// Wait before the first child starts.
    pub delay_children: Duration,
    /// Extra wait added for each following child.
    pub step: Duration,
}

impl Stagger {
    pub const fn new(step: Duration) -> Self {
        Self {
            delay_children: Duration::ZERO,
            step,
        }
    }

    pub const fn delay_children(mut self, delay: Duration) -> Self {
        self.delay_children = delay;
        self
    }

    /// The delay for the child at `index`: `delay_children + index * step`.
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children
            .saturating_add(self.step.saturating_mul(index))
    }
}

/// The hide-then-show cycle the events list runs whenever its filter changes.
///
/// Every [`restart`](Self::restart) hides the list and hands out a new generation. Only the latest
/// generation may [`settle`](Self::settle) it back to visible, so a quick run of filter changes
/// ends in a single reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshCycle {
    generation: u64,
    phase: Phase,
}

impl RefreshCycle {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn restart(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::Hidden;
        self.generation
    }

    /// Begin a cycle.
    ///
    /// The first cycle is the mount: it reveals at once and returns `None`. Later cycles hide the
    /// list and return the generation that may [`settle`](Self::settle) it.
    pub fn start(&mut self) -> Option<u64> {
        let mounting = self.generation == 0;
        let generation = self.restart();
        if mounting {
            self.phase = Phase::Visible;
            return None;
        }
        Some(generation)
    }

    /// Reveal again if `generation` is still the latest cycle. Returns whether it did.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase == Phase::Visible {
            return false;
        }
        self.phase = Phase::Visible;
        true
    }
}

/// Replay a hide-then-show cycle every time the value computed by `watch` changes.
///
/// On mount the returned memo turns [`Phase::Visible`] right away. After each later change it is
/// [`Phase::Hidden`] for [`MotionConfig::refresh_delay`], then visible again. `watch` runs inside a
/// memo, so writes that leave the value equal do not replay.
///
/// [`MotionConfig::refresh_delay`]: super::MotionConfig::refresh_delay
pub fn use_replay<T: PartialEq + 'static>(watch: impl FnMut() -> T + 'static) -> Memo<Phase> {
    let config = use_motion_config();
    let mut cycle = use_signal(RefreshCycle::default);
    let key = use_memo(watch);

    use_effect(move || {
        let _ = key.read();
        let Some(generation) = cycle.write().start() else {
            return;
        };
        let delay = config.refresh_delay;
        spawn(async move {
            sleep(delay).await;
            cycle.write().settle(generation);
        });
    });

    use_memo(move || cycle.read().phase())
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_trigger() {
        assert_eq!(Phase::from_armed(false), Phase::Hidden);
        assert_eq!(Phase::from_armed(true), Phase::Visible);
        assert_eq!(Phase::default(), Phase::Hidden);
    }

    #[test]
    fn stagger_adds_one_step_per_child() {
        let stagger =
            Stagger::new(Duration::from_millis(100)).delay_children(Duration::from_millis(300));
        let delays: Vec<u128> = (0..4).map(|i| stagger.delay_for(i).as_millis()).collect();
        assert_eq!(delays, vec![300, 400, 500, 600]);
    }

    #[test]
    fn stagger_without_initial_delay() {
        let stagger = Stagger::new(Duration::from_millis(200));
        assert_eq!(stagger.delay_for(0), Duration::ZERO);
        assert_eq!(stagger.delay_for(3), Duration::from_millis(600));
    }

    #[test]
    fn restart_hides_and_settle_reveals() {
        let mut cycle = RefreshCycle::default();
        let generation = cycle.restart();
        assert_eq!(cycle.phase(), Phase::Hidden);
        assert!(cycle.settle(generation));
        assert_eq!(cycle.phase(), Phase::Visible);

        // a second settle for the same cycle is a no-op
        assert!(!cycle.settle(generation));
    }

    #[test]
    fn mount_reveals_without_waiting() {
        let mut cycle = RefreshCycle::default();
        assert_eq!(cycle.start(), None);
        assert_eq!(cycle.phase(), Phase::Visible);

        let generation = cycle.start().unwrap();
        assert_eq!(cycle.phase(), Phase::Hidden);
        assert!(cycle.settle(generation));
        assert_eq!(cycle.phase(), Phase::Visible);
    }

    #[test]
    fn stale_generation_cannot_reveal() {
        let mut cycle = RefreshCycle::default();
        let first = cycle.restart();
        let second = cycle.restart();
        assert_ne!(first, second);

        assert!(!cycle.settle(first));
        assert_eq!(cycle.phase(), Phase::Hidden);
        assert!(cycle.settle(second));
        assert_eq!(cycle.phase(), Phase::Visible);
    }

    #[test]
    fn every_restart_drops_back_to_hidden() {
        let mut cycle = RefreshCycle::default();
        for _ in 0..3 {
            let generation = cycle.restart();
            assert_eq!(cycle.phase(), Phase::Hidden);
            cycle.settle(generation);
            assert_eq!(cycle.phase(), Phase::Visible);
        }
        assert_eq!(cycle.generation(), 3);
    }
}
