//! Heads-up text: what to print and where. Measuring and drawing the glyphs
//! is up to the client.

use crate::{GameMap, Score};

pub const RESTART_HINT: &str = "Press 'R' to Restart the Game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Bright,
    Muted,
}

/// One horizontally centered line of text; `top` is the top of the glyphs
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub top: f32,
    pub font_size: u16,
    pub tone: TextTone,
}

impl HudLine {
    fn new(text: String, top: f32, font_size: u16, tone: TextTone) -> Self {
        Self {
            text,
            top,
            font_size,
            tone,
        }
    }
}

pub fn score_text(score: &Score) -> String {
    format!("{} - {}", score.left, score.right)
}

pub fn speed_text(speed: f32) -> String {
    format!("Speed: {}", speed as i32)
}

pub fn speed_record_text(best: u32) -> String {
    format!("Speed Record: {best}")
}

/// Left X that centers text of `text_width` on a screen of `screen_width`
pub fn centered_x(screen_width: f32, text_width: f32) -> f32 {
    (screen_width - text_width) / 2.0
}

pub fn layout(score: &Score, speed: f32, speed_record: u32, map: &GameMap) -> Vec<HudLine> {
    vec![
        HudLine::new(score_text(score), 20.0, 30, TextTone::Bright),
        HudLine::new(speed_text(speed), 50.0, 20, TextTone::Muted),
        HudLine::new(speed_record_text(speed_record), 80.0, 10, TextTone::Muted),
        HudLine::new(RESTART_HINT.to_string(), map.height - 30.0, 10, TextTone::Muted),
    ]
}
