//! Collision shape primitives
//!
//! Screen-space coordinates: the origin is the top-left corner of the arena
//! and y grows downwards, so the "top" side of a box is its `min.y` edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Create a box from two corners (reordered so min <= max on both axes)
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a box from its center and half-extents
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Closest point inside the box to `point` (component-wise clamp)
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Outward normal of the side nearest to `point`
    ///
    /// Distances are measured to the infinite boundary lines. On ties the
    /// first side in the order left, right, top, bottom wins.
    pub fn closest_side(&self, point: Vec2) -> Vec2 {
        let sides = [
            ((point.x - self.min.x).abs(), Vec2::NEG_X),
            ((point.x - self.max.x).abs(), Vec2::X),
            ((point.y - self.min.y).abs(), Vec2::NEG_Y),
            ((point.y - self.max.y).abs(), Vec2::Y),
        ];

        let mut best = sides[0];
        for side in &sides[1..] {
            // Strict comparison keeps the earliest side on ties
            if side.0 < best.0 {
                best = *side;
            }
        }
        best.1
    }
}

/// A circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    /// Must be positive
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self { center, radius }
    }
}

/// The closed set of shapes the intersection test understands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Aabb(Aabb),
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Aabb> for Shape {
    fn from(aabb: Aabb) -> Self {
        Shape::Aabb(aabb)
    }
}
