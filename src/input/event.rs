use glam::Vec2;

/// Events the camera controller reacts to.
///
/// Positions are screen-space physical pixels with the origin at the
/// bottom-left of the viewport, y up. UI hit tests must use the same
/// convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer drag began at this position.
    DragStart {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The dragging pointer moved to this position.
    Drag {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The pointer was released at this position.
    DragEnd {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The scene/context was (re)loaded.
    ContextReset,
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            Self::DragStart { x, y }
            | Self::Drag { x, y }
            | Self::DragEnd { x, y } => Some(Vec2::new(x, y)),
            Self::ContextReset => None,
        }
    }
}

/// Raw pointer input before drag detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to absolute screen position.
    Moved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Primary button pressed (`true`) or released (`false`).
    Button {
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}
