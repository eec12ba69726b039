/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0; // pixels per second
    pub const PADDLE_MARGIN: f32 = 50.0; // gap between side wall and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_SPEED_BASE: f32 = 400.0;
    pub const BALL_SPEED_GAIN: f32 = 20.0; // added at base speed on a full-angle hit

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
