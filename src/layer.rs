use crate::animation::{EasedOffset, TransitionAnimator, TransitionPhase};
use crate::input::{SwipeDirection, SwipeRelease, SwipeTracker};

/// Default swipe container width in points
pub const DEFAULT_CONTAINER_WIDTH: f32 = 280.0;
/// Default commit threshold for the immediate-reset mode
pub const DEFAULT_THRESHOLD: f32 = 50.0;
/// Length of the slide transition, and of the settle delay after a commit
pub const DEFAULT_TRANSITION_SECS: f64 = 0.3;

/// What happens to the offset when a drag is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeMode {
    /// Offset snaps back to zero and the commit applies on release.
    Immediate,
    /// The current item slides fully out first; the commit applies after the
    /// settle delay and the offset jumps back to zero without a transition.
    Animated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    pub threshold: f32,
    pub container_width: f32,
    pub mode: SwipeMode,
    /// Delay before an animated commit applies; also the slide length
    pub settle_delay: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::animated(DEFAULT_CONTAINER_WIDTH)
    }
}

impl SwipeConfig {
    pub fn immediate() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            container_width: DEFAULT_CONTAINER_WIDTH,
            mode: SwipeMode::Immediate,
            settle_delay: DEFAULT_TRANSITION_SECS,
        }
    }

    /// Animated commits with the threshold at a quarter of the width.
    pub fn animated(container_width: f32) -> Self {
        Self {
            threshold: container_width / 4.0,
            container_width,
            mode: SwipeMode::Animated,
            settle_delay: DEFAULT_TRANSITION_SECS,
        }
    }
}

/// One independently swipeable layer: a drag tracker plus its transition state.
#[derive(Debug, Clone)]
pub struct SwipeLayer {
    config: SwipeConfig,
    tracker: SwipeTracker,
    animator: TransitionAnimator,
    visual: EasedOffset,
}

impl SwipeLayer {
    pub fn new(config: SwipeConfig) -> Self {
        let settle_delay = match config.mode {
            SwipeMode::Immediate => 0.0,
            SwipeMode::Animated => config.settle_delay,
        };
        Self {
            config,
            tracker: SwipeTracker::new(config.threshold),
            animator: TransitionAnimator::new(settle_delay),
            visual: EasedOffset::new(config.settle_delay),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.animator.phase()
    }

    /// Begins a drag. Ignored while a previous commit is still animating.
    pub fn start(&mut self, x: f32, now: f64) -> bool {
        if !self.animator.begin_drag() {
            log::debug!("Ignoring swipe start during {:?}", self.animator.phase());
            return false;
        }
        if !self.tracker.start(x) {
            return false;
        }
        self.sync_visual(now);
        true
    }

    pub fn drag_to(&mut self, x: f32, now: f64) {
        if !self.tracker.is_dragging() {
            return;
        }
        self.tracker.drag_to(x);
        self.sync_visual(now);
    }

    /// Releases the drag. Returns a direction only when an immediate-mode
    /// commit applies right now; animated commits come out of [`Self::tick`].
    pub fn end(&mut self, now: f64) -> Option<SwipeDirection> {
        let release = self.tracker.end()?;
        self.release(release, now)
    }

    pub fn leave(&mut self, now: f64) -> Option<SwipeDirection> {
        let release = self.tracker.leave()?;
        self.release(release, now)
    }

    fn release(&mut self, release: SwipeRelease, now: f64) -> Option<SwipeDirection> {
        match (release, self.config.mode) {
            (SwipeRelease::Cancel, _) => {
                log::debug!("Swipe cancelled at offset {:.1}", self.tracker.offset_x());
                self.tracker.reset();
                self.animator.release_cancelled();
                self.sync_visual(now);
                None
            }
            (SwipeRelease::Commit(direction), SwipeMode::Immediate) => {
                log::debug!("Swipe committed {direction:?}");
                self.tracker.reset();
                self.animator.release_cancelled();
                self.sync_visual(now);
                Some(direction)
            }
            (SwipeRelease::Commit(direction), SwipeMode::Animated) => {
                log::debug!(
                    "Swipe committing {direction:?}, settling in {:.2}s",
                    self.config.settle_delay
                );
                self.tracker.pin(direction.sign() * self.config.container_width);
                self.animator.begin_commit(direction, now);
                self.sync_visual(now);
                None
            }
        }
    }

    /// Runs the deferred steps of an animated commit. Call once per frame;
    /// returns the committed direction exactly once.
    pub fn tick(&mut self, now: f64) -> Option<SwipeDirection> {
        let fired = self.animator.tick(now);
        if fired.is_some() {
            self.tracker.reset();
            self.sync_visual(now);
        }
        fired
    }

    /// Drops any in-flight drag or pending commit.
    pub fn cancel(&mut self, now: f64) {
        self.tracker.reset();
        self.animator.cancel();
        self.visual.snap_to(0.0, now);
    }

    fn sync_visual(&mut self, now: f64) {
        let target = self.tracker.offset_x();
        if self.animator.suppresses_transition() {
            self.visual.snap_to(target, now);
        } else {
            self.visual.ease_to(target, now);
        }
    }

    /// Logical offset of the current item
    pub fn offset_x(&self) -> f32 {
        self.tracker.offset_x()
    }

    /// Provisional direction, kept until the layer comes to rest
    pub fn direction(&self) -> Option<SwipeDirection> {
        self.tracker.direction()
    }

    pub fn is_swiping(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn is_busy(&self) -> bool {
        self.animator.is_busy()
    }

    pub fn transition_enabled(&self) -> bool {
        !self.animator.suppresses_transition()
    }

    /// Offset to paint the current item at
    pub fn displayed_offset(&self, now: f64) -> f32 {
        self.visual.value(now)
    }

    /// Offset to paint the neighbouring item at, if one is coming into view.
    ///
    /// A leftward drag brings the next item in from the right edge, a
    /// rightward one brings the previous item in from the left.
    pub fn adjacent_offset(&self, now: f64) -> Option<f32> {
        let direction = self.direction()?;
        Some(self.displayed_offset(now) - direction.sign() * self.config.container_width)
    }

    /// Whether the layer still needs frames to finish animating
    pub fn needs_repaint(&self, now: f64) -> bool {
        self.animator.phase() != TransitionPhase::Idle || self.visual.is_moving(now)
    }
}
