/// Horizontal direction of a swipe.
///
/// `Left` means the finger moved toward negative x and reveals the next item;
/// `Right` reveals the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of the x offset that points this way
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Outcome of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeRelease {
    Commit(SwipeDirection),
    Cancel,
}

/// Tracks one pointer drag along the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    origin_x: f32,
    offset_x: f32,
    dragging: bool,
    direction: Option<SwipeDirection>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            origin_x: 0.0,
            offset_x: 0.0,
            dragging: false,
            direction: None,
        }
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Provisional direction of the drag so far
    pub fn direction(&self) -> Option<SwipeDirection> {
        self.direction
    }

    /// Begins a drag at `x`. Returns false if a drag is already running.
    pub fn start(&mut self, x: f32) -> bool {
        if self.dragging {
            return false;
        }
        self.origin_x = x;
        self.offset_x = 0.0;
        self.dragging = true;
        true
    }

    /// Follows the pointer to `x`. Ignored unless dragging.
    pub fn drag_to(&mut self, x: f32) {
        if !self.dragging {
            return;
        }
        self.offset_x = x - self.origin_x;
        if self.offset_x < 0.0 {
            self.direction = Some(SwipeDirection::Left);
        } else if self.offset_x > 0.0 {
            self.direction = Some(SwipeDirection::Right);
        }
    }

    /// Finishes the drag and classifies it against the threshold.
    ///
    /// Returns `None` when no drag was running. The offset is left where it
    /// was; the owner decides whether it snaps back or is pinned.
    pub fn end(&mut self) -> Option<SwipeRelease> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;

        let release = if self.offset_x > self.threshold {
            SwipeRelease::Commit(SwipeDirection::Right)
        } else if self.offset_x < -self.threshold {
            SwipeRelease::Commit(SwipeDirection::Left)
        } else {
            SwipeRelease::Cancel
        };
        Some(release)
    }

    /// The pointer left the tracking surface; same as `end` if dragging.
    pub fn leave(&mut self) -> Option<SwipeRelease> {
        if self.dragging { self.end() } else { None }
    }

    /// Pins the offset (used to push a committed item fully off-screen).
    pub fn pin(&mut self, offset_x: f32) {
        self.offset_x = offset_x;
    }

    /// Back to rest: zero offset, no direction.
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.direction = None;
        self.dragging = false;
    }
}
