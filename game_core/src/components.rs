use glam::Vec2;

use crate::map::Aabb;
use crate::math::versor;

/// Which half of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of a horizontal direction that travels towards this side
    pub fn facing(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// The human plays the left paddle
pub const PLAYER_SIDE: Side = Side::Left;

/// The computer plays the right paddle
pub const AI_SIDE: Side = Side::Right;

/// Motion component - position, heading and scalar speed
///
/// `direction` need not be unit length; it is normalized whenever the
/// object moves, so the per-tick displacement is always
/// `versor(direction) * speed * dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub direction: Vec2,
    pub speed: f32,
}

impl Motion {
    pub fn new(position: Vec2, direction: Vec2, speed: f32) -> Self {
        Self {
            position,
            direction,
            speed,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        versor(self.direction) * self.speed
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity() * dt;
    }

    /// Aim the direction at `target`
    pub fn point_towards(&mut self, target: Vec2) {
        self.direction = versor(target - self.position);
    }
}

/// Paddle component - a rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, size: Vec2) -> Self {
        Self { side, size }
    }

    pub fn rect(&self, position: Vec2) -> Aabb {
        Aabb::from_min_size(position, self.size)
    }

    pub fn center(&self, position: Vec2) -> Vec2 {
        position + self.size * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }
}

/// Ball component - a circle anchored at its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}
