use crate::components::Side;
use crate::map::Rect;
use crate::params::Params;
use glam::Vec2;

/// Game configuration, built once and shared read-only by every component
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_tracking_band: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub max_bounce_angle: f32,
    pub paddle_clearance: f32,
    pub win_score: u8,
    pub tick_rate: u32,
    pub sample_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_tracking_band: Params::AI_TRACKING_BAND,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            paddle_clearance: Params::PADDLE_CLEARANCE,
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
            sample_rate: Params::SAMPLE_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole playfield as a rectangle at the origin
    pub fn playfield(&self) -> Rect {
        Rect::new(0.0, 0.0, self.arena_width, self.arena_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Get left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Starting rectangle of a paddle, vertically centred
    pub fn paddle_start(&self, side: Side) -> Rect {
        Rect::new(
            self.paddle_x(side),
            self.arena_height / 2.0 - self.paddle_height / 2.0,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Seconds per simulation tick
    pub fn tick_seconds(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }
}
