//! Reinforced Breakout headless runner
//!
//! Plays a few episodes with a ball-tracking policy and reports the results.
//! Usage: `reinforced-breakout [config.json]`

use std::error::Error;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use reinforced_breakout::consts::SIM_DT;
use reinforced_breakout::{PaddleAction, SimConfig, Snapshot, World};

/// Episodes to play
const EPISODES: u32 = 3;
/// Give up on an episode after this much simulated time (seconds)
const MAX_EPISODE_TIME: f32 = 300.0;
/// Chance of picking a random action instead of tracking the ball
const EXPLORATION: f64 = 0.05;
/// Dead zone around the paddle center before the policy moves
const TRACKING_SLACK: f32 = 4.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Reinforced Breakout (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {}", path);
            SimConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => SimConfig::default(),
    };

    let mut world = World::new(config)?;
    let mut rng = Pcg32::seed_from_u64(0x5eed);

    let mut last = world.snapshot();
    for episode in 1..=EPISODES {
        world.reset();
        last = play_episode(&mut world, &mut rng)?;
        println!(
            "Episode {}: {:?} after {:.1}s, {}/{} bricks broken ({:.0}%)",
            episode,
            last.win_state,
            last.elapsed,
            last.bricks_broken(),
            last.bricks_total(),
            last.fraction_broken() * 100.0
        );
    }

    println!("{}", serde_json::to_string_pretty(&last)?);
    Ok(())
}

/// Step the world until the episode ends or times out
fn play_episode(world: &mut World, rng: &mut Pcg32) -> Result<Snapshot, Box<dyn Error>> {
    let mut snapshot = world.snapshot();
    while !world.is_terminal() {
        if snapshot.elapsed >= MAX_EPISODE_TIME {
            log::warn!("Episode timed out after {:.0}s", snapshot.elapsed);
            break;
        }
        let action = choose_action(&snapshot, rng);
        snapshot = world.step(SIM_DT, action)?;
    }
    Ok(snapshot)
}

/// Move the paddle under the ball, with occasional random moves
fn choose_action(snapshot: &Snapshot, rng: &mut Pcg32) -> PaddleAction {
    if rng.random_bool(EXPLORATION) {
        return PaddleAction::ALL[rng.random_range(0..PaddleAction::ALL.len())];
    }

    let ball_x = snapshot.ball.position.x;
    let paddle_x = snapshot.paddle.aabb.center().x;
    if ball_x < paddle_x - TRACKING_SLACK {
        PaddleAction::Left
    } else if ball_x > paddle_x + TRACKING_SLACK {
        PaddleAction::Right
    } else {
        PaddleAction::Stay
    }
}
