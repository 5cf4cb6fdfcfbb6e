//! Pairwise intersection tests
//!
//! Shape kinds form a closed enum, so [`intersects`] is an exhaustive match
//! over every pairing. There is no "unsupported pairing" at runtime: adding a
//! new shape kind fails to compile until its rows of the table exist.
//!
//! All tests are strict. Shapes that only touch (tangent circle, shared box
//! edge) do not intersect.

use super::shapes::{Aabb, Circle, Shape};

/// Check whether two shapes overlap. Commutative for every pairing.
pub fn intersects(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Circle(c), Shape::Aabb(r)) | (Shape::Aabb(r), Shape::Circle(c)) => {
            circle_aabb(c, r)
        }
        (Shape::Circle(c1), Shape::Circle(c2)) => circle_circle(c1, c2),
        (Shape::Aabb(r1), Shape::Aabb(r2)) => aabb_aabb(r1, r2),
    }
}

/// Circle vs box: squared distance from the center to the box's closest point
/// must be strictly less than radius².
///
/// A center inside the box has distance zero and always intersects.
#[inline]
pub fn circle_aabb(circle: &Circle, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(circle.center);
    (circle.center - closest).length_squared() < circle.radius * circle.radius
}

/// Circle vs circle
#[inline]
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    (a.center - b.center).length_squared() < reach * reach
}

/// Box vs box: open-interval overlap on both axes
#[inline]
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}
