//! Turns raw press/move/release into drag events.
//!
//! A press followed by a release without motion is a click, not a drag, so
//! no drag events are produced for it. Once the pointer travels past
//! [`DRAG_THRESHOLD_PX`] the processor emits `DragStart` at the press
//! position followed by `Drag` at the current position, then `Drag` for
//! every later move and `DragEnd` on release.

use glam::Vec2;

use super::event::{InputEvent, PointerEvent};

/// Minimum pointer travel before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f32 = 1.0;

/// Drag detection state machine for a single pointer.
#[derive(Debug, Clone, Default)]
pub struct PointerProcessor {
    pointer: Vec2,
    press_pos: Option<Vec2>,
    dragging: bool,
}

impl PointerProcessor {
    /// Create a new processor with the button released.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.press_pos.is_some()
    }

    /// Whether the current press has become a drag.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Process a raw pointer event and return the drag events it produces,
    /// in dispatch order.
    ///
    /// The move that crosses the threshold yields two events, so its
    /// displacement is not lost when the pointer is released right after.
    pub fn handle_event(&mut self, event: PointerEvent) -> Vec<InputEvent> {
        match event {
            PointerEvent::Moved { x, y } => self.handle_moved(Vec2::new(x, y)),
            PointerEvent::Button { pressed: true } => {
                self.press_pos = Some(self.pointer);
                self.dragging = false;
                Vec::new()
            }
            PointerEvent::Button { pressed: false } => {
                self.handle_release().into_iter().collect()
            }
        }
    }

    fn handle_moved(&mut self, pos: Vec2) -> Vec<InputEvent> {
        self.pointer = pos;
        let Some(press) = self.press_pos else {
            return Vec::new();
        };
        let drag = InputEvent::Drag { x: pos.x, y: pos.y };

        if self.dragging {
            return vec![drag];
        }
        if pos.distance_squared(press) > DRAG_THRESHOLD_PX * DRAG_THRESHOLD_PX
        {
            self.dragging = true;
            let start = InputEvent::DragStart {
                x: press.x,
                y: press.y,
            };
            return vec![start, drag];
        }
        Vec::new()
    }

    fn handle_release(&mut self) -> Option<InputEvent> {
        let was_dragging = self.dragging;
        self.press_pos = None;
        self.dragging = false;

        was_dragging.then_some(InputEvent::DragEnd {
            x: self.pointer.x,
            y: self.pointer.y,
        })
    }
}
