//! Immediate-mode drawing with macroquad shapes and the default font

use game_core::hud::{centered_x, HudLine, TextTone};
use game_core::{Ball, LocalGame, Motion, Paddle};
use macroquad::prelude::*;

/// Entities that know how to draw themselves at a given motion state
pub trait Draw {
    fn draw(&self, motion: &Motion, color: Color);
}

impl Draw for Paddle {
    fn draw(&self, motion: &Motion, color: Color) {
        draw_rectangle(
            motion.position.x,
            motion.position.y,
            self.size.x,
            self.size.y,
            color,
        );
    }
}

impl Draw for Ball {
    fn draw(&self, motion: &Motion, color: Color) {
        draw_circle(motion.position.x, motion.position.y, self.radius, color);
    }
}

fn tone_color(tone: TextTone) -> Color {
    match tone {
        TextTone::Bright => WHITE,
        TextTone::Muted => LIGHTGRAY,
    }
}

fn draw_hud_line(line: &HudLine, screen_width: f32) {
    let dims = measure_text(&line.text, None, line.font_size, 1.0);
    let x = centered_x(screen_width, dims.width);
    // draw_text takes the baseline; HUD lines are anchored at their top
    draw_text(
        &line.text,
        x,
        line.top + dims.offset_y,
        line.font_size as f32,
        tone_color(line.tone),
    );
}

pub fn draw_frame(game: &LocalGame) {
    clear_background(BLACK);

    for (motion, paddle) in game.paddles() {
        paddle.draw(&motion, WHITE);
    }
    if let Some((motion, ball)) = game.ball() {
        ball.draw(&motion, WHITE);
    }

    for line in game.hud() {
        draw_hud_line(&line, game.map.width);
    }
}
