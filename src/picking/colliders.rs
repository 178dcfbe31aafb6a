use glam::Vec2;

use super::WorldHitTest;

/// World-space shape of an interactive object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// Axis-aligned box.
    Aabb {
        /// Lower corner.
        min: Vec2,
        /// Upper corner.
        max: Vec2,
    },
    /// Disc.
    Circle {
        /// Center.
        center: Vec2,
        /// Radius in world units.
        radius: f32,
    },
}

impl Collider {
    /// Whether the shape contains `point` (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            Self::Aabb { min, max } => {
                point.cmpge(min).all() && point.cmple(max).all()
            }
            Self::Circle { center, radius } => {
                point.distance_squared(center) <= radius * radius
            }
        }
    }
}

/// Interactive objects in the scene, queried with a zero-length ray.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    colliders: Vec<Collider>,
}

impl ColliderSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collider.
    pub fn insert(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    /// Remove every collider, e.g. when the scene is unloaded.
    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    /// First collider containing `point`.
    #[must_use]
    pub fn raycast_point(&self, point: Vec2) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.contains(point))
    }
}

impl WorldHitTest for ColliderSet {
    fn any_object_at_world_point(&self, world: Vec2) -> bool {
        self.raycast_point(world).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_inside_circle_hits() {
        let mut set = ColliderSet::new();
        set.insert(Collider::Circle {
            center: Vec2::new(1.0, 1.0),
            radius: 0.5,
        });
        assert!(set.any_object_at_world_point(Vec2::new(1.2, 1.2)));
        assert!(!set.any_object_at_world_point(Vec2::new(2.0, 1.0)));
    }

    #[test]
    fn raycast_returns_first_match() {
        let mut set = ColliderSet::new();
        let aabb = Collider::Aabb {
            min: Vec2::new(-1.0, -1.0),
            max: Vec2::new(1.0, 1.0),
        };
        set.insert(aabb);
        set.insert(Collider::Circle {
            center: Vec2::ZERO,
            radius: 3.0,
        });
        assert_eq!(set.raycast_point(Vec2::ZERO), Some(&aabb));

        set.clear();
        assert!(set.raycast_point(Vec2::ZERO).is_none());
    }
}
