use hecs::World;

use crate::components::*;
use crate::map::GameMap;
use crate::Time;

/// Something that advances its own [`Motion`] each tick
pub trait Body {
    fn advance(&self, motion: &mut Motion, dt: f32, map: &GameMap);
}

impl Body for Paddle {
    /// Moves per axis, and drops an axis' step entirely if it would push any
    /// part of the paddle off screen. A fast paddle therefore stops short of
    /// the wall instead of snapping onto it.
    fn advance(&self, motion: &mut Motion, dt: f32, map: &GameMap) {
        let next = motion.position + motion.velocity() * dt;

        if next.y >= 0.0 && next.y + self.size.y <= map.height {
            motion.position.y = next.y;
        }
        if next.x >= 0.0 && next.x + self.size.x <= map.width {
            motion.position.x = next.x;
        }
    }
}

impl Body for Ball {
    fn advance(&self, motion: &mut Motion, dt: f32, _map: &GameMap) {
        motion.integrate(dt);
    }
}

/// Advance every entity carrying body kind `B`
pub fn advance_bodies<B: Body + hecs::Component>(world: &mut World, time: &Time, map: &GameMap) {
    for (_entity, (motion, body)) in world.query_mut::<(&mut Motion, &B)>() {
        body.advance(motion, time.dt, map);
    }
}

/// Apply paddle movement based on their current directions
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap) {
    advance_bodies::<Paddle>(world, time, map);
}

/// Move ball based on direction and speed
pub fn move_ball(world: &mut World, time: &Time, map: &GameMap) {
    advance_bodies::<Ball>(world, time, map);
}
