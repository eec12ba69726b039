use rand::Rng;

use crate::audio::{SoundCue, SoundEffect, SCORE_SOUND_VARIANTS};
use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Highest ball speed seen since the last full reset, in whole units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeedRecord {
    best: u32,
}

impl SpeedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, speed: f32) {
        let whole = speed.max(0.0) as u32;
        if whole > self.best {
            self.best = whole;
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn reset(&mut self) {
        self.best = 0;
    }
}

/// Cached AI read of the ball
///
/// `predicted_y` is where the ball center will cross the AI paddle's
/// center line; it is only refreshed when the ball turns towards the AI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiState {
    pub predicted_y: f32,
    pub last_ball_heading: f32, // -1 or +1
}

impl AiState {
    pub fn new(predicted_y: f32, last_ball_heading: f32) -> Self {
        Self {
            predicted_y,
            last_ball_heading,
        }
    }
}

impl Default for AiState {
    fn default() -> Self {
        // Treat the ball as receding so the first approach triggers a read
        Self::new(0.0, -1.0)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Vertical component for a serve, in thousandths within [-1, 1].
    /// Zero is remapped so the ball never travels purely horizontally.
    pub fn serve_slope(&mut self) -> f32 {
        let slope = self.0.gen_range(-1000..=1000) as f32 / 1000.0;
        if slope == 0.0 {
            -1.0
        } else {
            slope
        }
    }

    /// Pick one of the score recordings
    pub fn score_cue(&mut self) -> SoundCue {
        SoundEffect::ScorePoint.variant(self.0.gen_range(0..SCORE_SOUND_VARIANTS))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub paddle_hits: Vec<Side>,
    pub ball_hit_wall: bool,
    pub sounds: Vec<SoundCue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.paddle_hits.clear();
        self.ball_hit_wall = false;
        self.sounds.clear();
    }

    pub fn scored(&mut self, side: Side, cue: SoundCue) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
        self.sounds.push(cue);
    }
}

/// Key state polled by the client once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up_held: bool,
    pub down_held: bool,
    pub restart_pressed: bool,
}
