use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bounds", inline)]
#[serde(default)]
/// Rectangle constraining the drag offset, relative to the default camera
/// position.
///
/// `min <= max` on each axis is the caller's responsibility. An inverted
/// axis is not rejected; see [`clamp_axis`] for how it degrades.
pub struct BoundsOptions {
    /// Lower corner `[x, y]` in world units.
    pub min: [f32; 2],
    /// Upper corner `[x, y]` in world units.
    pub max: [f32; 2],
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            min: [-5.0, -5.0],
            max: [5.0, 5.0],
        }
    }
}

impl BoundsOptions {
    /// Bounds from two corners.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.to_array(),
            max: max.to_array(),
        }
    }

    /// Lower corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        Vec2::from_array(self.min)
    }

    /// Upper corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        Vec2::from_array(self.max)
    }

    /// `true` if either axis has `min > max`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }

    /// Whether `offset` lies inside the bounds on both axes.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.min[0]..=self.max[0]).contains(&offset.x)
            && (self.min[1]..=self.max[1]).contains(&offset.y)
    }

    /// Clamp each axis of `offset` independently.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, self.min[0], self.max[0]),
            clamp_axis(offset.y, self.min[1], self.max[1]),
        )
    }
}

/// Single-axis clamp that never panics.
///
/// Unlike [`f32::clamp`], an inverted range (`min > max`) is allowed: values
/// below `min` map to `min` and everything else maps to `max`.
#[must_use]
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_far_offset_onto_corner() {
        let bounds = BoundsOptions::default();
        assert_eq!(bounds.clamp(Vec2::new(10.0, 10.0)), Vec2::new(5.0, 5.0));
        assert_eq!(
            bounds.clamp(Vec2::new(-7.0, 2.0)),
            Vec2::new(-5.0, 2.0)
        );
    }

    #[test]
    fn inverted_axis_collapses_without_panicking() {
        let bounds =
            BoundsOptions::new(Vec2::new(3.0, -1.0), Vec2::new(1.0, 1.0));
        assert!(bounds.is_inverted());
        // Below `min`, including the gap between the limits, goes to `min`.
        assert_eq!(bounds.clamp(Vec2::new(0.0, 0.0)).x, 3.0);
        assert_eq!(bounds.clamp(Vec2::new(2.0, 0.0)).x, 3.0);
        // At or above `min`, the `max` branch wins.
        assert_eq!(bounds.clamp(Vec2::new(3.0, 0.0)).x, 1.0);
        assert_eq!(bounds.clamp(Vec2::new(9.0, 0.0)).x, 1.0);
        // The well-formed axis is unaffected.
        assert_eq!(bounds.clamp(Vec2::new(0.0, 0.5)).y, 0.5);
    }

    #[test]
    fn zero_width_axis_pins_value() {
        let bounds = BoundsOptions::new(Vec2::new(2.0, 0.0), Vec2::new(2.0, 0.0));
        assert_eq!(bounds.clamp(Vec2::new(-4.0, 8.0)), Vec2::new(2.0, 0.0));
        assert!(bounds.contains(Vec2::new(2.0, 0.0)));
    }
}
