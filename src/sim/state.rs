//! World state and core simulation types
//!
//! The [`World`] exclusively owns the ball, paddle and bricks. Collaborators
//! only ever see owned [`Snapshot`]s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes::{Aabb, Circle};
use super::vector::reflect;
use crate::config::SimConfig;
use crate::error::SimError;

/// Episode outcome state machine
///
/// `Won` and `Lost` are absorbing until [`World::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WinState {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl WinState {
    pub fn is_terminal(self) -> bool {
        self != WinState::Ongoing
    }
}

/// Horizontal paddle command for a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaddleAction {
    Left,
    #[default]
    Stay,
    Right,
}

impl PaddleAction {
    /// All actions in policy-index order
    pub const ALL: [PaddleAction; 3] = [
        PaddleAction::Left,
        PaddleAction::Stay,
        PaddleAction::Right,
    ];

    /// Movement direction along x (-1, 0 or +1)
    pub fn direction(self) -> f32 {
        match self {
            PaddleAction::Left => -1.0,
            PaddleAction::Stay => 0.0,
            PaddleAction::Right => 1.0,
        }
    }

    /// Map a policy output index (0 = left, 1 = stay, 2 = right)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            PaddleAction::Left => 0,
            PaddleAction::Stay => 1,
            PaddleAction::Right => 2,
        }
    }
}

/// The ball
///
/// `position` is the single source of truth; the collision circle is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Collision circle at the current position
    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    /// Explicit Euler step. No substepping.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Reflect velocity across a unit `normal`
    pub fn bounce(&mut self, normal: Vec2) {
        self.velocity = reflect(self.velocity, normal);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Paddle {
    /// Create a paddle from its full size
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    /// Current bounding box, computed on every call
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }

    /// Shift horizontally, keeping the whole paddle inside [0, arena_width]
    pub fn move_by(&mut self, delta_x: f32, arena_width: f32) {
        let half_width = self.half_extents.x;
        let lo = half_width;
        let hi = (arena_width - half_width).max(lo);
        self.center.x = (self.center.x + delta_x).clamp(lo, hi);
    }

    /// Apply an action for `dt` seconds at `speed` units/s
    pub fn apply_action(&mut self, action: PaddleAction, speed: f32, dt: f32, arena_width: f32) {
        let delta = action.direction() * speed * dt;
        if delta != 0.0 {
            self.move_by(delta, arena_width);
        }
    }

    /// y coordinate of the paddle's top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half_extents.y
    }
}

/// A breakable brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub aabb: Aabb,
    pub alive: bool,
}

impl Brick {
    pub fn new(aabb: Aabb) -> Self {
        Self { aabb, alive: true }
    }

    /// Destroy the brick and return the outward normal of the side nearest
    /// to `point`. Calling it on a dead brick only reports the normal.
    pub fn hit(&mut self, point: Vec2) -> Vec2 {
        self.alive = false;
        self.aabb.closest_side(point)
    }
}

/// Read-only view of the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

/// Read-only view of the paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub aabb: Aabb,
}

/// Read-only view of a brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub aabb: Aabb,
    pub alive: bool,
}

/// Owned copy of the world state after a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: BallView,
    pub paddle: PaddleView,
    pub bricks: Vec<BrickView>,
    pub win_state: WinState,
    /// Simulated seconds since reset
    pub elapsed: f32,
    /// Steps since reset
    pub ticks: u64,
}

impl Snapshot {
    pub fn bricks_total(&self) -> usize {
        self.bricks.len()
    }

    pub fn bricks_alive(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn bricks_broken(&self) -> usize {
        self.bricks_total() - self.bricks_alive()
    }

    /// Fraction of bricks destroyed (0-1)
    pub fn fraction_broken(&self) -> f32 {
        if self.bricks.is_empty() {
            return 0.0;
        }
        self.bricks_broken() as f32 / self.bricks_total() as f32
    }
}

/// Complete simulation state (deterministic, no hidden globals)
#[derive(Debug, Clone)]
pub struct World {
    pub(super) config: SimConfig,
    pub(super) ball: Ball,
    pub(super) paddle: Paddle,
    /// Row-major, top row first. Collision order follows this order.
    pub(super) bricks: Vec<Brick>,
    pub(super) win_state: WinState,
    pub(super) elapsed: f32,
    pub(super) ticks: u64,
}

impl World {
    /// Validate `config` and build a world ready for its first episode
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut world = Self {
            ball: Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_radius),
            paddle: Paddle::new(Vec2::ZERO, config.paddle_size),
            bricks: Vec::with_capacity(config.brick_count()),
            win_state: WinState::Ongoing,
            elapsed: 0.0,
            ticks: 0,
            config,
        };
        world.reset();

        Ok(world)
    }

    /// Rebuild ball, paddle and bricks from config and start a new episode
    pub fn reset(&mut self) {
        let config = &self.config;
        let arena = config.arena_size;

        self.ball = Ball::new(arena * 0.5, config.initial_ball_velocity, config.ball_radius);

        // Centered horizontally, bottom edge on the arena floor
        let paddle_center = Vec2::new(arena.x * 0.5, arena.y - config.paddle_size.y * 0.5);
        self.paddle = Paddle::new(paddle_center, config.paddle_size);

        let columns = config.brick_columns();
        let size = config.brick_size;
        self.bricks.clear();
        for row in 0..config.brick_rows {
            for col in 0..columns {
                let min = Vec2::new(
                    col as f32 * size.x,
                    config.brick_top_margin + row as f32 * size.y,
                );
                self.bricks.push(Brick::new(Aabb::new(min, min + size)));
            }
        }

        self.win_state = WinState::Ongoing;
        self.elapsed = 0.0;
        self.ticks = 0;

        log::info!(
            "Episode reset: {} bricks ({} rows x {} columns)",
            self.bricks.len(),
            config.brick_rows,
            columns
        );
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: BallView {
                position: self.ball.position,
                velocity: self.ball.velocity,
                radius: self.ball.radius,
            },
            paddle: PaddleView {
                aabb: self.paddle.aabb(),
            },
            bricks: self
                .bricks
                .iter()
                .map(|b| BrickView {
                    aabb: b.aabb,
                    alive: b.alive,
                })
                .collect(),
            win_state: self.win_state,
            elapsed: self.elapsed,
            ticks: self.ticks,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn win_state(&self) -> WinState {
        self.win_state
    }

    pub fn is_terminal(&self) -> bool {
        self.win_state.is_terminal()
    }

    pub fn bricks_alive(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }
}
