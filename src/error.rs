//! Error types for configuration and stepping
//!
//! Every failure is either a configuration problem caught before the first
//! step or a precondition violation by the caller. Nothing here is transient.

use thiserror::Error;

/// Rejected simulation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ball radius must be positive, got {0}")]
    NonPositiveBallRadius(f32),
    #[error("at least one brick row is required")]
    NoBrickRows,
    #[error("arena size must be positive in both dimensions, got {width}x{height}")]
    DegenerateArena { width: f32, height: f32 },
    #[error("brick size must be positive in both dimensions, got {width}x{height}")]
    DegenerateBrick { width: f32, height: f32 },
    #[error("paddle size must be positive in both dimensions, got {width}x{height}")]
    DegeneratePaddle { width: f32, height: f32 },
    #[error("paddle width {paddle} exceeds arena width {arena}")]
    PaddleWiderThanArena { paddle: f32, arena: f32 },
    #[error("ball diameter {diameter} does not fit in the arena")]
    BallLargerThanArena { diameter: f32 },
    #[error("brick width {brick} leaves no room for a column in arena width {arena}")]
    BricksWiderThanArena { brick: f32, arena: f32 },
    #[error("brick grid would hold {count} bricks, more than the limit of {}", crate::consts::MAX_BRICKS)]
    TooManyBricks { count: f64 },
    #[error("brick grid reaches y={bottom}, below the arena floor at {floor}")]
    BricksBelowFloor { bottom: f32, floor: f32 },
    #[error("paddle speed must not be negative, got {0}")]
    NegativeSpeed(f32),
    #[error("brick top margin must not be negative, got {0}")]
    NegativeTopMargin(f32),
    #[error("`{field}` must be finite")]
    NonFinite { field: &'static str },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by [`crate::World`] operations
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// `dt` must be finite and strictly positive
    #[error("timestep must be finite and positive, got {dt}")]
    InvalidTimestep { dt: f32 },
    /// The step would have left the ball at a non-finite position.
    /// The world is not modified.
    #[error("step would produce a non-finite ball position")]
    NonFiniteState,
}
