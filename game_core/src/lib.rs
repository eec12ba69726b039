pub mod audio;
pub mod components;
pub mod config;
pub mod hud;
pub mod map;
pub mod math;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use simulation::LocalGame;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Shortest sub-step the physics loop will take
const MIN_SUBSTEP: f32 = 1e-4;

/// Run one frame of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    speed_record: &mut SpeedRecord,
    ai: &mut AiState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(config.max_dt);

    // Clear events at start of frame
    events.clear();

    // Micro-steps short enough that the ball never skips past a paddle
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(max_substep(world, config));
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ball vs paddles
        check_paddle_collisions(world, config, events);

        // 2. Ball vs top/bottom walls
        check_wall_collisions(world, map, events);

        // 3. Scoring (ball reached a side edge)
        if check_scoring(world, map, score, events, rng).is_some() {
            reset_round(world, map, config, rng, ai);
        }

        // 4. AI picks a direction
        steer_ai_paddle(world, map, ai);

        // 5. Integrate
        move_paddles(world, &step_time, map);
        move_ball(world, &step_time, map);

        if let Some(speed) = ball_speed(world) {
            speed_record.observe(speed);
        }
    }

    // Update time
    time.now += clamped_dt;
}

fn ball_speed(world: &World) -> Option<f32> {
    world
        .query::<(&Motion, &Ball)>()
        .iter()
        .next()
        .map(|(_e, (motion, _ball))| motion.speed)
}

/// Longest sub-step: the fixed physics rate, or the time the ball takes to
/// cross one radius if that is shorter
fn max_substep(world: &World, config: &Config) -> f32 {
    let limit = match ball_speed(world) {
        Some(speed) if speed > 0.0 => config.fixed_dt.min(config.ball_radius / speed),
        _ => config.fixed_dt,
    };
    limit.max(MIN_SUBSTEP)
}

/// Helper to create a paddle entity at its starting spot
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    world.spawn((
        Motion::new(config.paddle_spawn(side), Vec2::ZERO, config.paddle_speed),
        Paddle::new(side, config.paddle_size()),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: Vec2,
    direction: Vec2,
    speed: f32,
) -> hecs::Entity {
    world.spawn((
        Motion::new(pos, direction, speed),
        Ball::new(config.ball_radius),
    ))
}
