//! Fixed timestep simulation step
//!
//! Advances the world deterministically. The order within a step is fixed:
//! paddle, ball integration, paddle contact, brick contact, walls, terminal check.

use glam::Vec2;

use super::collision::circle_aabb;
use super::state::{PaddleAction, Snapshot, WinState, World};
use crate::error::SimError;

impl World {
    /// Advance the world by `dt` seconds and return the resulting snapshot
    ///
    /// Stepping a finished episode is a no-op until [`World::reset`].
    pub fn step(&mut self, dt: f32, action: PaddleAction) -> Result<Snapshot, SimError> {
        tick(self, action, dt)?;
        Ok(self.snapshot())
    }
}

/// Advance the world by one timestep in place
pub fn tick(world: &mut World, action: PaddleAction, dt: f32) -> Result<(), SimError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::InvalidTimestep { dt });
    }

    // Don't tick once the episode is decided
    if world.win_state.is_terminal() {
        return Ok(());
    }

    // Reject before mutating anything
    let next_position = world.ball.position + world.ball.velocity * dt;
    if !next_position.is_finite() {
        return Err(SimError::NonFiniteState);
    }

    let arena = world.config.arena_size;

    world
        .paddle
        .apply_action(action, world.config.paddle_speed, dt, arena.x);

    world.ball.integrate(dt);

    // Paddle always deflects straight up regardless of contact point
    let paddle_box = world.paddle.aabb();
    if circle_aabb(&world.ball.circle(), &paddle_box) {
        world.ball.position.y = paddle_box.min.y - world.ball.radius;
        world.ball.bounce(Vec2::NEG_Y);
        log::trace!("Paddle contact at x={:.1}", world.ball.position.x);
    }

    // At most one brick per step
    let circle = world.ball.circle();
    if let Some((index, brick)) = world
        .bricks
        .iter_mut()
        .enumerate()
        .find(|(_, b)| b.alive && circle_aabb(&circle, &b.aabb))
    {
        let normal = brick.hit(world.ball.position);
        world.ball.bounce(normal);
        log::debug!("Brick {} destroyed, normal {:?}", index, normal);
    }

    resolve_walls(world, arena);

    if world.win_state == WinState::Ongoing && world.bricks.iter().all(|b| !b.alive) {
        world.win_state = WinState::Won;
        log::info!(
            "Episode won after {} ticks ({:.2}s)",
            world.ticks + 1,
            world.elapsed + dt
        );
    }

    world.elapsed += dt;
    world.ticks += 1;

    Ok(())
}

/// Reflect off the side and top walls, detect the floor
fn resolve_walls(world: &mut World, arena: Vec2) {
    let ball = &mut world.ball;
    let pos = ball.position;
    let r = ball.radius;

    // Deliberately stricter than reflect-on-crossing: only reflect while
    // heading into the wall, so a ball still overlapping it on the following
    // step isn't flipped back outside
    let walls = [
        (pos.x - r < 0.0, Vec2::X),
        (pos.x + r > arena.x, Vec2::NEG_X),
        (pos.y - r < 0.0, Vec2::Y),
    ];
    for (crossed, normal) in walls {
        if crossed && ball.velocity.dot(normal) < 0.0 {
            ball.bounce(normal);
        }
    }

    if pos.y + r > arena.y {
        world.win_state = WinState::Lost;
        log::info!(
            "Episode lost at tick {} with {} bricks left",
            world.ticks + 1,
            world.bricks_alive()
        );
    }
}
