use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng, Rect};

/// Which half of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction pointing away from this side's wall
    pub fn outward(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Paddle component - vertical-only rectangle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub speed: f32, // pixels per tick
}

impl Paddle {
    pub fn new(side: Side, rect: Rect, speed: f32) -> Self {
        Self { side, rect, speed }
    }

    /// Step toward `target_y`, ignoring differences inside the tracking band
    pub fn move_toward(&mut self, target_y: f32, tracking_band: f32, bounds: &Rect) {
        let center_y = self.rect.center_y();
        if center_y < target_y - tracking_band {
            self.rect.pos.y += self.speed;
        } else if center_y > target_y + tracking_band {
            self.rect.pos.y -= self.speed;
        }
        self.rect.clamp_within(bounds);
    }

    /// Center the paddle on the pointer, no smoothing
    pub fn move_to_pointer(&mut self, pointer_y: f32, bounds: &Rect) {
        self.rect.pos.y = pointer_y - self.rect.size.y / 2.0;
        self.rect.clamp_within(bounds);
    }
}

/// What drives a paddle each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleControl {
    /// Follows the ball's vertical center
    Ai,
    /// Follows the pointer's vertical position
    Pointer,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2, // pixels per tick
}

impl Ball {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    /// A motionless ball at the center of the playfield
    pub fn centered(config: &Config) -> Self {
        let size = Vec2::splat(config.ball_size);
        Self::new(Rect::from_center_size(config.center(), size), Vec2::ZERO)
    }

    /// Reset ball to center with a random direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        let max = config.max_bounce_angle;
        let angle: f32 = rng.0.gen_range(-max..=max);
        let direction = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.launch(config, angle, direction);
    }

    /// Center the ball and send it along `angle` (radians from horizontal)
    /// toward `direction` (-1 = left, 1 = right) at the configured speed
    pub fn launch(&mut self, config: &Config, angle: f32, direction: f32) {
        self.rect.set_center(config.center());
        self.vel = Vec2::new(
            direction * config.ball_speed * angle.cos(),
            config.ball_speed * angle.sin(),
        );
    }

    pub fn integrate(&mut self) {
        self.rect.pos += self.vel;
    }

    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }
}
