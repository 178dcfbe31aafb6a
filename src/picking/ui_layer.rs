use glam::Vec2;

use super::UiHitTest;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Bottom-left corner.
    pub min: Vec2,
    /// Top-right corner.
    pub max: Vec2,
}

impl ScreenRect {
    /// Rectangle from origin and size.
    #[must_use]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Flat list of UI panels. Hidden panels don't block the pointer.
#[derive(Debug, Clone, Default)]
pub struct UiLayer {
    panels: Vec<(ScreenRect, bool)>,
}

impl UiLayer {
    /// Empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible panel, returning its index.
    pub fn push(&mut self, rect: ScreenRect) -> usize {
        self.panels.push((rect, true));
        self.panels.len() - 1
    }

    /// Show or hide a panel. Unknown indices are ignored.
    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.1 = visible;
        }
    }

    /// Number of panels, visible or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// `true` if no panels were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl UiHitTest for UiLayer {
    fn any_ui_under_point(&self, screen: Vec2) -> bool {
        self.panels
            .iter()
            .any(|(rect, visible)| *visible && rect.contains(screen))
    }
}
