//! Computer-controlled paddle.
//!
//! The AI reads the ball once, at the moment it turns towards the AI side,
//! and commits to that prediction. While the ball recedes the paddle drifts
//! back to the vertical center of the screen.

use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::map::GameMap;
use crate::math::{fold_into, heading};
use crate::AiState;

/// Y at which a ball at `position` heading along `direction` crosses the
/// vertical line `x = target_x`, bouncing off walls at `0` and `height`.
///
/// Extends the straight line without walls, then folds it back into the
/// court. `direction.x` must be non-zero.
pub fn predict_ball_y(position: Vec2, direction: Vec2, target_x: f32, height: f32) -> f32 {
    let dx = target_x - position.x;
    let dy = dx * (direction.y / direction.x);
    fold_into(position.y + dy, height)
}

fn ball_motion(world: &World) -> Option<Motion> {
    world
        .query::<(&Motion, &Ball)>()
        .iter()
        .next()
        .map(|(_e, (motion, _ball))| *motion)
}

/// Center X of the AI paddle, the line the predictor aims at
fn ai_target_x(world: &World) -> Option<f32> {
    world
        .query::<(&Motion, &Paddle)>()
        .iter()
        .find(|(_e, (_m, paddle))| paddle.side == AI_SIDE)
        .map(|(_e, (motion, paddle))| paddle.center(motion.position).x)
}

/// Re-read the ball immediately, e.g. after a serve
pub fn rearm_ai(world: &World, map: &GameMap, ai: &mut AiState) {
    let (Some(ball), Some(target_x)) = (ball_motion(world), ai_target_x(world)) else {
        return;
    };

    ai.predicted_y = predict_ball_y(ball.position, ball.direction, target_x, map.height);
    ai.last_ball_heading = heading(ball.direction.x);
    log::debug!("AI re-armed, predicting y={:.1}", ai.predicted_y);
}

/// Point the AI paddle at its current goal
pub fn steer_ai_paddle(world: &mut World, map: &GameMap, ai: &mut AiState) {
    let Some(ball) = ball_motion(world) else {
        return;
    };

    let ball_heading = heading(ball.direction.x);
    let approaching = ball_heading == AI_SIDE.facing();
    let turned_towards_ai = approaching && ai.last_ball_heading != ball_heading;

    for (_entity, (motion, paddle)) in world.query_mut::<(&mut Motion, &Paddle)>() {
        if paddle.side != AI_SIDE {
            continue;
        }

        if turned_towards_ai {
            let target_x = paddle.center(motion.position).x;
            ai.predicted_y = predict_ball_y(ball.position, ball.direction, target_x, map.height);
            log::debug!("ball incoming, AI predicts y={:.1}", ai.predicted_y);
        }

        let goal_y = if approaching {
            ai.predicted_y
        } else {
            map.center().y
        };
        // Aim the top-left corner so that the paddle center lands on goal_y
        let target = Vec2::new(motion.position.x, goal_y - paddle.half_height());
        motion.point_towards(target);
    }

    ai.last_ball_heading = ball_heading;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config};

    const HEIGHT: f32 = 450.0;

    /// Walk the ball in tiny steps and reflect it off the walls literally
    fn simulate_ball_y(position: Vec2, direction: Vec2, target_x: f32, height: f32) -> f32 {
        let steps = 50_000;
        let height = height as f64;
        let dx = (target_x - position.x) as f64 / steps as f64;
        let mut vy = dx * (direction.y as f64 / direction.x as f64);
        let mut y = position.y as f64;

        for _ in 0..steps {
            y += vy;
            if y < 0.0 {
                y = -y;
                vy = -vy;
            } else if y > height {
                y = 2.0 * height - y;
                vy = -vy;
            }
        }
        y as f32
    }

    #[test]
    fn test_prediction_without_bounce() {
        let y = predict_ball_y(Vec2::new(400.0, 225.0), Vec2::new(1.0, 0.5), 750.0, HEIGHT);
        assert_eq!(y, 400.0);
    }

    #[test]
    fn test_prediction_ignores_direction_length() {
        let a = predict_ball_y(Vec2::new(100.0, 50.0), Vec2::new(1.0, 0.8), 755.0, HEIGHT);
        let b = predict_ball_y(Vec2::new(100.0, 50.0), Vec2::new(0.78, 0.624), 755.0, HEIGHT);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn test_prediction_stays_on_screen() {
        let xs = [8.0, 120.0, 400.0, 701.5];
        let ys = [0.0, 7.0, 100.0, 225.0, 449.0, 450.0];
        let slopes = [-1.14, -1.0, -0.37, -0.001, 0.0, 0.25, 0.999, 1.2];
        let targets = [55.0, 755.0, 5000.0, -3000.0];

        for &x in &xs {
            for &y in &ys {
                for &slope in &slopes {
                    for &heading in &[-1.0, 1.0] {
                        for &target_x in &targets {
                            let predicted = predict_ball_y(
                                Vec2::new(x, y),
                                Vec2::new(heading, slope),
                                target_x,
                                HEIGHT,
                            );
                            assert!(
                                (0.0..=HEIGHT).contains(&predicted),
                                "({x}, {y}) slope {slope} -> {target_x}: {predicted}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_prediction_matches_literal_bounces() {
        let cases = [
            (Vec2::new(400.0, 225.0), Vec2::new(1.0, 0.5), 755.0),  // no bounce
            (Vec2::new(60.0, 225.0), Vec2::new(1.0, 1.0), 755.0),   // two bounces
            (Vec2::new(70.0, 30.0), Vec2::new(1.0, -1.07), 755.0),  // top, then bottom
            (Vec2::new(740.0, 400.0), Vec2::new(-1.0, 0.6), 55.0),  // heading left
            (Vec2::new(0.0, 10.0), Vec2::new(1.0, 0.9), 4000.0),    // many bounces
        ];

        for (position, direction, target_x) in cases {
            let predicted = predict_ball_y(position, direction, target_x, HEIGHT);
            let simulated = simulate_ball_y(position, direction, target_x, HEIGHT);
            assert!(
                (predicted - simulated).abs() < 0.05,
                "{position:?} {direction:?}: predicted {predicted}, simulated {simulated}"
            );
        }
    }

    fn setup(ball_pos: Vec2, ball_dir: Vec2) -> (World, GameMap, hecs::Entity, hecs::Entity) {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let paddle = create_paddle(&mut world, &config, Side::Right);
        let ball = create_ball(&mut world, &config, ball_pos, ball_dir, 400.0);
        (world, map, paddle, ball)
    }

    #[test]
    fn test_receding_ball_sends_paddle_to_center() {
        let (mut world, map, paddle, _ball) = setup(Vec2::new(400.0, 225.0), Vec2::new(-1.0, 0.2));
        world.get::<&mut Motion>(paddle).unwrap().position.y = 10.0;
        let mut ai = AiState::default();

        steer_ai_paddle(&mut world, &map, &mut ai);

        let motion = *world.get::<&Motion>(paddle).unwrap();
        assert!(
            (motion.direction - Vec2::Y).length() < 1e-6,
            "center is below the paddle"
        );
        assert_eq!(ai.last_ball_heading, -1.0);
    }

    #[test]
    fn test_turning_ball_triggers_one_prediction() {
        let (mut world, map, paddle, ball) = setup(Vec2::new(400.0, 225.0), Vec2::new(1.0, 0.5));
        let mut ai = AiState::default(); // last seen receding

        steer_ai_paddle(&mut world, &map, &mut ai);

        // Paddle center x is 755
        let expected = predict_ball_y(Vec2::new(400.0, 225.0), Vec2::new(1.0, 0.5), 755.0, 450.0);
        assert!((ai.predicted_y - expected).abs() < 1e-4);
        assert_eq!(ai.last_ball_heading, 1.0);
        let direction = world.get::<&Motion>(paddle).unwrap().direction;
        assert!((direction - Vec2::Y).length() < 1e-6);

        // The ball changes course mid-flight; the AI keeps its first read
        world.get::<&mut Motion>(ball).unwrap().direction = Vec2::new(1.0, -0.9);
        steer_ai_paddle(&mut world, &map, &mut ai);
        assert!((ai.predicted_y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_rearm_reads_ball_immediately() {
        let (world, map, _paddle, _ball) = setup(Vec2::new(400.0, 225.0), Vec2::new(1.0, -0.25));
        let mut ai = AiState::default();

        rearm_ai(&world, &map, &mut ai);

        // 355 px to the right at slope -0.25
        assert!((ai.predicted_y - 136.25).abs() < 1e-3);
        assert_eq!(ai.last_ball_heading, 1.0);
    }

    #[test]
    fn test_paddle_idles_when_already_on_target() {
        let (mut world, map, paddle, _ball) = setup(Vec2::new(400.0, 225.0), Vec2::new(-1.0, 0.0));
        let mut ai = AiState::default();

        steer_ai_paddle(&mut world, &map, &mut ai);

        assert_eq!(world.get::<&Motion>(paddle).unwrap().direction, Vec2::ZERO);
    }
}
