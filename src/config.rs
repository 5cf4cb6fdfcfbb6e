//! Simulation configuration
//!
//! Every tunable the world needs, passed explicitly to [`crate::World::new`].
//! Hosts can keep it in a JSON file next to their own settings.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable world parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width and height. The origin is the top-left corner, y grows downwards.
    pub arena_size: Vec2,
    /// Number of brick rows
    pub brick_rows: u32,
    /// Size of a single brick
    pub brick_size: Vec2,
    /// Gap between the arena ceiling and the first brick row
    pub brick_top_margin: f32,
    /// Full paddle width and height
    pub paddle_size: Vec2,
    /// Horizontal paddle speed (units/s)
    pub paddle_speed: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Ball velocity at the start of every episode (units/s)
    pub initial_ball_velocity: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_size: ARENA_SIZE,
            brick_rows: BRICK_ROWS,
            brick_size: BRICK_SIZE,
            brick_top_margin: BRICK_TOP_MARGIN,
            paddle_size: PADDLE_SIZE,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            initial_ball_velocity: BALL_INITIAL_VELOCITY,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of brick columns that fit across the arena
    pub fn brick_columns(&self) -> u32 {
        (self.arena_size.x / self.brick_size.x).floor() as u32
    }

    /// Total bricks in a freshly reset world
    pub fn brick_count(&self) -> usize {
        self.brick_rows as usize * self.brick_columns() as usize
    }

    /// Check that the config describes a playable world
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("arena_size", self.arena_size.is_finite()),
            ("brick_size", self.brick_size.is_finite()),
            ("brick_top_margin", self.brick_top_margin.is_finite()),
            ("paddle_size", self.paddle_size.is_finite()),
            ("paddle_speed", self.paddle_speed.is_finite()),
            ("ball_radius", self.ball_radius.is_finite()),
            ("initial_ball_velocity", self.initial_ball_velocity.is_finite()),
        ];
        if let Some((field, _)) = finite.into_iter().find(|&(_, ok)| !ok) {
            return Err(ConfigError::NonFinite { field });
        }

        let arena = self.arena_size;
        if arena.x <= 0.0 || arena.y <= 0.0 {
            return Err(ConfigError::DegenerateArena {
                width: arena.x,
                height: arena.y,
            });
        }
        if self.brick_size.x <= 0.0 || self.brick_size.y <= 0.0 {
            return Err(ConfigError::DegenerateBrick {
                width: self.brick_size.x,
                height: self.brick_size.y,
            });
        }
        if self.paddle_size.x <= 0.0 || self.paddle_size.y <= 0.0 {
            return Err(ConfigError::DegeneratePaddle {
                width: self.paddle_size.x,
                height: self.paddle_size.y,
            });
        }
        if self.ball_radius <= 0.0 {
            return Err(ConfigError::NonPositiveBallRadius(self.ball_radius));
        }
        if self.brick_rows == 0 {
            return Err(ConfigError::NoBrickRows);
        }
        if self.paddle_speed < 0.0 {
            return Err(ConfigError::NegativeSpeed(self.paddle_speed));
        }
        if self.brick_top_margin < 0.0 {
            return Err(ConfigError::NegativeTopMargin(self.brick_top_margin));
        }
        if self.paddle_size.x > arena.x {
            return Err(ConfigError::PaddleWiderThanArena {
                paddle: self.paddle_size.x,
                arena: arena.x,
            });
        }
        let diameter = self.ball_radius * 2.0;
        if diameter >= arena.x || diameter >= arena.y {
            return Err(ConfigError::BallLargerThanArena { diameter });
        }
        // Count in floating point so a huge ratio can't saturate the integer cast
        let columns = (arena.x / self.brick_size.x).floor();
        if columns < 1.0 {
            return Err(ConfigError::BricksWiderThanArena {
                brick: self.brick_size.x,
                arena: arena.x,
            });
        }
        let count = f64::from(columns) * f64::from(self.brick_rows);
        if count > MAX_BRICKS as f64 {
            return Err(ConfigError::TooManyBricks { count });
        }
        let bottom = self.brick_top_margin + self.brick_rows as f32 * self.brick_size.y;
        if bottom > arena.y {
            return Err(ConfigError::BricksBelowFloor {
                bottom,
                floor: arena.y,
            });
        }

        Ok(())
    }
}
