//! Keyboard input handling

use game_core::FrameInput;
use macroquad::prelude::*;

/// Snapshot the keys the game cares about
pub fn poll() -> FrameInput {
    FrameInput {
        up_held: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
        down_held: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        restart_pressed: is_key_pressed(KeyCode::R),
    }
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
