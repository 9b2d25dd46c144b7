/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 30.0; // gap between paddle and its side wall
    pub const PADDLE_SPEED: f32 = 7.0; // pixels per tick
    pub const AI_TRACKING_BAND: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 7.0; // pixels per tick, never changes
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // 60°
    pub const PADDLE_CLEARANCE: f32 = 1.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timing
    pub const TICK_RATE: u32 = 60;

    // Audio
    pub const SAMPLE_RATE: u32 = 22_050;
}
