use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::systems::ai::rearm_ai;
use crate::{AiState, Config, GameMap, GameRng, Score, SpeedRecord};

/// Put the ball back in the middle and serve it towards the AI at base
/// speed with a random vertical slope
pub fn serve_ball(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    for (_entity, (motion, _ball)) in world.query_mut::<(&mut Motion, &Ball)>() {
        motion.position = map.ball_spawn();
        motion.direction = Vec2::new(AI_SIDE.facing(), rng.serve_slope());
        motion.speed = config.ball_speed_base;
    }
}

/// Return both paddles to their starting spots
pub fn reset_paddles(world: &mut World, config: &Config) {
    for (_entity, (motion, paddle)) in world.query_mut::<(&mut Motion, &Paddle)>() {
        motion.position = config.paddle_spawn(paddle.side);
        motion.direction = Vec2::ZERO;
    }
}

/// New serve after a point; scores are kept
pub fn reset_round(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    rng: &mut GameRng,
    ai: &mut AiState,
) {
    serve_ball(world, map, config, rng);
    rearm_ai(world, map, ai);
}

/// Start over: paddles, ball, score and speed record
pub fn reset_game(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    rng: &mut GameRng,
    ai: &mut AiState,
    score: &mut Score,
    speed_record: &mut SpeedRecord,
) {
    reset_paddles(world, config);
    score.reset();
    speed_record.reset();
    reset_round(world, map, config, rng, ai);
}
