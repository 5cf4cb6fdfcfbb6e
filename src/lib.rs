//! Reinforced Breakout - a deterministic brick-breaking simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, shapes, collisions, world state machine)
//! - `config`: Tunable simulation parameters
//! - `error`: Configuration and step errors
//!
//! Rendering, input and the learning agent live outside this crate. They read
//! [`sim::Snapshot`]s and drive the world with [`sim::PaddleAction`]s.

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::{ConfigError, SimError};
pub use sim::{PaddleAction, Snapshot, WinState, World};

/// Default simulation constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation rate (physics/logic)
    pub const SIM_HZ: u32 = 500;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;

    /// Arena dimensions (y grows downwards)
    pub const ARENA_SIZE: Vec2 = Vec2::new(800.0, 600.0);

    /// Brick grid
    pub const BRICK_ROWS: u32 = 6;
    pub const BRICK_SIZE: Vec2 = Vec2::new(64.0, 24.0);
    /// Upper bound on bricks in one grid, checked before the grid is allocated
    pub const MAX_BRICKS: usize = 10_000;
    /// Gap between the arena ceiling and the top brick row
    pub const BRICK_TOP_MARGIN: f32 = 48.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(50.0, 16.0);
    pub const PADDLE_SPEED: f32 = 420.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_INITIAL_VELOCITY: Vec2 = Vec2::new(180.0, -240.0);
}
