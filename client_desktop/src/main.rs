//! Desktop Pong client
//!
//! Human on the left (arrow keys or W/S, R restarts), predictive AI on the
//! right. All game rules live in `game_core`; this crate only polls keys,
//! plays sounds and draws.

mod audio;
mod input;
mod renderer;

use game_core::{LocalGame, Params};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Pong".to_owned(),
        window_width: Params::SCREEN_WIDTH as i32,
        window_height: Params::SCREEN_HEIGHT as i32,
        // Layout is fixed to the starting resolution
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = macroquad::miniquad::date::now().to_bits();
    let mut game = LocalGame::new(seed);
    log::info!("starting Pong (seed {seed:#x})");

    let audio = audio::AudioManager::load().await;
    audio.start_music();

    loop {
        if input::quit_requested() {
            break;
        }

        let frame = input::poll();
        let events = game.tick(&frame, get_frame_time());
        audio.play_events(events);

        renderer::draw_frame(&game);

        next_frame().await;
    }

    log::info!("final score {} - {}", game.score.left, game.score.right);
}
