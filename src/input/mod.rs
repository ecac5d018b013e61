use egui::{Context, Event, PointerButton, Pos2, Rect, TouchId, TouchPhase};

mod layer_select;
mod swipe;

pub use layer_select::{LayerBand, LayerSelector};
pub use swipe::{SwipeDirection, SwipeRelease, SwipeTracker};

/// Raw pointer/touch input reduced to what a swipe needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeInput {
    /// Mouse button pressed or first finger down inside the container
    Start { pos: Pos2 },
    /// Pointer moved while held
    Move { pos: Pos2 },
    /// Mouse button or finger released
    End,
    /// Mouse left the container (or the window) while held
    Leave,
}

/// Converts egui events into [`SwipeInput`]s for one swipe container.
///
/// When a frame carries touch events, only those are used (egui also emits
/// emulated pointer events for the same finger). Of several fingers, only the
/// first one that went down is followed.
#[derive(Debug, Default)]
pub struct InputHandler {
    container: Option<Rect>,
    pointer_held: bool,
    tracked_touch: Option<TouchId>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the container rectangle
    pub fn set_container_rect(&mut self, rect: Rect) {
        self.container = Some(rect);
    }

    fn in_container(&self, pos: Pos2) -> bool {
        self.container.is_none_or(|rect| rect.contains(pos))
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<SwipeInput> {
        ctx.input(|input| self.process_events(&input.events))
    }

    pub fn process_events(&mut self, events: &[Event]) -> Vec<SwipeInput> {
        let has_touch = events.iter().any(|e| matches!(e, Event::Touch { .. }));
        let mut out = Vec::new();
        for event in events {
            let converted = if has_touch {
                self.touch_event(event)
            } else {
                self.pointer_event(event)
            };
            out.extend(converted);
        }
        out
    }

    fn pointer_event(&mut self, event: &Event) -> Option<SwipeInput> {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                if self.pointer_held || !self.in_container(*pos) {
                    return None;
                }
                self.pointer_held = true;
                Some(SwipeInput::Start { pos: *pos })
            }
            Event::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => self.release_pointer(SwipeInput::End),
            Event::PointerMoved(pos) if self.pointer_held => {
                if self.in_container(*pos) {
                    Some(SwipeInput::Move { pos: *pos })
                } else {
                    self.release_pointer(SwipeInput::Leave)
                }
            }
            Event::PointerGone => self.release_pointer(SwipeInput::Leave),
            _ => None,
        }
    }

    fn release_pointer(&mut self, input: SwipeInput) -> Option<SwipeInput> {
        if !self.pointer_held {
            return None;
        }
        self.pointer_held = false;
        Some(input)
    }

    fn touch_event(&mut self, event: &Event) -> Option<SwipeInput> {
        let Event::Touch { id, phase, pos, .. } = event else {
            return None;
        };

        match (phase, self.tracked_touch) {
            (TouchPhase::Start, None) if self.in_container(*pos) => {
                self.tracked_touch = Some(*id);
                Some(SwipeInput::Start { pos: *pos })
            }
            (TouchPhase::Move, Some(tracked)) if tracked == *id => {
                Some(SwipeInput::Move { pos: *pos })
            }
            (TouchPhase::End | TouchPhase::Cancel, Some(tracked)) if tracked == *id => {
                self.tracked_touch = None;
                Some(SwipeInput::End)
            }
            _ => None,
        }
    }
}
