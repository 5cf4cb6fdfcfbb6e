//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - No randomness
//! - Stable iteration order (bricks in row-major order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod shapes;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{aabb_aabb, circle_aabb, circle_circle, intersects};
pub use shapes::{Aabb, Circle, Shape};
pub use state::{
    Ball, BallView, Brick, BrickView, Paddle, PaddleAction, PaddleView, Snapshot, WinState, World,
};
pub use tick::tick;
pub use vector::{normalize, reflect};
