use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::resources::FrameInput;

/// One of the two vertical movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalKey {
    Up,
    Down,
}

impl VerticalKey {
    pub fn other(self) -> Self {
        match self {
            VerticalKey::Up => VerticalKey::Down,
            VerticalKey::Down => VerticalKey::Up,
        }
    }

    pub fn direction(self) -> Vec2 {
        match self {
            VerticalKey::Up => Vec2::NEG_Y,
            VerticalKey::Down => Vec2::Y,
        }
    }
}

/// Resolve held keys into a single movement key, newest press wins.
///
/// `latched` is the key that was last held on its own. While both keys are
/// down the other one must have been pressed after it, so that one wins;
/// releasing it falls back to the latched key. Returns the new latch and
/// the key to act on.
pub fn resolve_vertical_key(
    latched: Option<VerticalKey>,
    up: bool,
    down: bool,
) -> (Option<VerticalKey>, Option<VerticalKey>) {
    match (up, down) {
        (false, false) => (None, None),
        (true, false) => (Some(VerticalKey::Up), Some(VerticalKey::Up)),
        (false, true) => (Some(VerticalKey::Down), Some(VerticalKey::Down)),
        (true, true) => {
            let newest = match latched {
                Some(key) => key.other(),
                // Both went down on the same frame
                None => VerticalKey::Up,
            };
            (latched, Some(newest))
        }
    }
}

/// Per-player latch for [`resolve_vertical_key`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalInput {
    latched: Option<VerticalKey>,
}

impl VerticalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, up: bool, down: bool) -> Option<VerticalKey> {
        let (latched, active) = resolve_vertical_key(self.latched, up, down);
        self.latched = latched;
        active
    }
}

/// Apply the human player's keys to their paddle's direction
pub fn apply_player_input(
    world: &mut World,
    side: Side,
    input: &mut VerticalInput,
    frame: &FrameInput,
) {
    let direction = input
        .resolve(frame.up_held, frame.down_held)
        .map_or(Vec2::ZERO, VerticalKey::direction);

    for (_entity, (motion, paddle)) in world.query_mut::<(&mut Motion, &Paddle)>() {
        if paddle.side == side {
            motion.direction = direction;
        }
    }
}
