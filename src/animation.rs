//! Commit sequencing and eased offsets for swipe layers.
//!
//! A committed swipe in animated mode runs through
//! ```text
//! Idle ──start──► Dragging ──end (cancel)──► Idle
//!                    │
//!                    └──end (commit)──► Committing ──settle delay──► Settling ──next frame──► Idle
//! ```
//! Both deferred steps are polled from [`TransitionAnimator::tick`] once per
//! frame, so cancelling is just a state reset.

use crate::input::SwipeDirection;

/// Phase of one layer's transition state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    Idle,
    Dragging,
    /// The current item is sliding fully off-screen; the selection change is
    /// held back until `fire_at`.
    Committing {
        direction: SwipeDirection,
        fire_at: f64,
    },
    /// Selection has changed and the offset is back at zero; transitions stay
    /// suppressed for this one frame.
    Settling,
}

#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    phase: TransitionPhase,
    settle_delay: f64,
}

impl TransitionAnimator {
    pub fn new(settle_delay: f64) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            settle_delay,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True while a commit is in flight and new gestures must wait.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Committing { .. } | TransitionPhase::Settling
        )
    }

    /// Offset changes should apply without easing (finger tracking or the
    /// post-commit snap).
    pub fn suppresses_transition(&self) -> bool {
        matches!(self.phase, TransitionPhase::Dragging | TransitionPhase::Settling)
    }

    /// Idle → Dragging. Returns false when a commit is still in flight.
    pub fn begin_drag(&mut self) -> bool {
        match self.phase {
            TransitionPhase::Idle => {
                self.phase = TransitionPhase::Dragging;
                true
            }
            TransitionPhase::Dragging => true,
            TransitionPhase::Committing { .. } | TransitionPhase::Settling => false,
        }
    }

    /// Dragging → Idle without a selection change.
    pub fn release_cancelled(&mut self) {
        if self.phase == TransitionPhase::Dragging {
            self.phase = TransitionPhase::Idle;
        }
    }

    /// Dragging → Committing; the commit fires from `tick` once the settle
    /// delay has elapsed.
    pub fn begin_commit(&mut self, direction: SwipeDirection, now: f64) {
        if self.phase == TransitionPhase::Dragging {
            self.phase = TransitionPhase::Committing {
                direction,
                fire_at: now + self.settle_delay,
            };
        }
    }

    /// Advances the deferred steps. Returns the direction to apply exactly once,
    /// on the frame that moves Committing → Settling.
    pub fn tick(&mut self, now: f64) -> Option<SwipeDirection> {
        match self.phase {
            TransitionPhase::Committing { direction, fire_at } if now >= fire_at => {
                self.phase = TransitionPhase::Settling;
                Some(direction)
            }
            TransitionPhase::Settling => {
                self.phase = TransitionPhase::Idle;
                None
            }
            _ => None,
        }
    }

    /// Drops any pending commit. Used when the owning layer is torn down.
    pub fn cancel(&mut self) {
        if self.phase != TransitionPhase::Idle {
            log::debug!("Cancelling transition in phase {:?}", self.phase);
        }
        self.phase = TransitionPhase::Idle;
    }
}

/// An offset that eases toward its target like `transform 0.3s ease-out`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedOffset {
    from: f32,
    to: f32,
    started_at: f64,
    duration: f64,
}

impl EasedOffset {
    pub fn new(duration: f64) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started_at: 0.0,
            duration,
        }
    }

    /// Jumps straight to `value`.
    pub fn snap_to(&mut self, value: f32, now: f64) {
        self.from = value;
        self.to = value;
        self.started_at = now;
    }

    /// Starts easing from wherever the offset currently is toward `value`.
    pub fn ease_to(&mut self, value: f32, now: f64) {
        if value == self.to {
            return;
        }
        self.from = self.value(now);
        self.to = value;
        self.started_at = now;
    }

    pub fn value(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32;
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    pub fn is_moving(&self, now: f64) -> bool {
        self.from != self.to && now < self.started_at + self.duration
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
