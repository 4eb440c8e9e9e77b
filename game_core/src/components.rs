use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which player a paddle (or a control sample) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Map a handedness label from the hand tracker. Only "Left" is left.
    pub fn from_label(label: &str) -> Self {
        if label == "Left" {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Y position, clamped to the paddle travel range
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Center of the paddle in world space
    pub fn center(&self, config: &Config) -> Vec2 {
        Vec2::new(config.paddle_x(self.side), self.y)
    }

    /// Point-in-box test against the paddle's collision extents.
    ///
    /// The ball is treated as a point; its radius only matters for rendering.
    pub fn contains(&self, point: Vec2, config: &Config) -> bool {
        let center = self.center(config);
        point.x < center.x + config.paddle_half_width
            && point.x > center.x - config.paddle_half_width
            && point.y < center.y + config.paddle_half_height
            && point.y > center.y - config.paddle_half_height
    }
}

/// Ball component - the pong ball
///
/// Velocity is a per-tick displacement, not a per-second rate.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to center with a fresh serve velocity
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = Vec2::ZERO;

        let toward_right = rng.0.gen_bool(0.5);
        let vx = if toward_right {
            config.serve_speed_x
        } else {
            -config.serve_speed_x
        };
        let spread = config.serve_spread_y;
        let vy = if spread > 0.0 {
            rng.0.gen_range(-spread..=spread)
        } else {
            0.0
        };

        self.vel = Vec2::new(vx, vy);
    }
}
