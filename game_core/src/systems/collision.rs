use hecs::World;

use crate::audio::SoundEffect;
use crate::components::*;
use crate::map::{Aabb, GameMap};
use crate::{Config, Events};

/// Paddle geometry captured before the ball is borrowed mutably
#[derive(Debug, Clone, Copy)]
struct PaddleSnapshot {
    side: Side,
    rect: Aabb,
    center_y: f32,
    half_height: f32,
}

/// Reflect the ball off a paddle.
///
/// The horizontal heading flips, the vertical component becomes the hit
/// offset from the paddle center scaled to the half-height (slightly past
/// +-1 on corner hits), and the speed grows in proportion to both the
/// current speed and the steepness of the new angle.
pub fn deflect_off_paddle(ball: &mut Motion, center_y: f32, half_height: f32, config: &Config) {
    ball.direction.x = -ball.direction.x;
    ball.direction.y = (ball.position.y - center_y) / half_height;
    ball.speed +=
        config.ball_speed_gain * (ball.speed / config.ball_speed_base) * ball.direction.y.abs();
}

/// Check ball collisions with both paddles (left first)
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<PaddleSnapshot> = world
        .query::<(&Motion, &Paddle)>()
        .iter()
        .map(|(_e, (motion, paddle))| PaddleSnapshot {
            side: paddle.side,
            rect: paddle.rect(motion.position),
            center_y: paddle.center(motion.position).y,
            half_height: paddle.half_height(),
        })
        .collect();
    paddles.sort_by_key(|p| p.side != Side::Left);

    for (_entity, (motion, ball)) in world.query_mut::<(&mut Motion, &Ball)>() {
        for paddle in &paddles {
            if !paddle.rect.intersects_circle(motion.position, ball.radius) {
                continue;
            }
            // Only bounce a ball that is still heading into this paddle, so a
            // ball that overlaps for several ticks is not flipped back
            if motion.direction.x * paddle.side.facing() <= 0.0 {
                continue;
            }

            deflect_off_paddle(motion, paddle.center_y, paddle.half_height, config);
            log::trace!(
                "ball hit {:?} paddle: direction {:?}, speed {:.1}",
                paddle.side,
                motion.direction,
                motion.speed
            );

            events.paddle_hits.push(paddle.side);
            events.sounds.push(match paddle.side {
                Side::Left => SoundEffect::PlayerPaddleHit.cue(),
                Side::Right => SoundEffect::AiPaddleHit.cue(),
            });
        }
    }
}

/// Check ball collisions with the top and bottom walls
pub fn check_wall_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, (motion, ball)) in world.query_mut::<(&mut Motion, &Ball)>() {
        let hits_top = motion.position.y - ball.radius <= 0.0 && motion.direction.y < 0.0;
        let hits_bottom =
            motion.position.y + ball.radius >= map.height && motion.direction.y > 0.0;

        if hits_top || hits_bottom {
            motion.direction.y = -motion.direction.y;
            events.ball_hit_wall = true;
        }
    }
}
