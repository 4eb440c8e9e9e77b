use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::{Params, Side};

/// Failure while loading a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so a JSON file only needs
/// the keys it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paddle_x: f32,
    pub paddle_half_width: f32,
    pub paddle_half_height: f32,
    pub paddle_y_limit: f32,
    pub input_gain: f32,
    pub field_half_height: f32,
    pub miss_x: f32,
    pub ball_radius: f32,
    pub ball_opening_vel: [f32; 2],
    pub paddle_hit_multiplier: f32,
    /// Cap on |vx| after a paddle hit. `None` lets the speed compound forever.
    pub ball_speed_max: Option<f32>,
    pub serve_speed_x: f32,
    pub serve_spread_y: f32,
    pub control_queue_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_x: Params::PADDLE_X,
            paddle_half_width: Params::PADDLE_HALF_WIDTH,
            paddle_half_height: Params::PADDLE_HALF_HEIGHT,
            paddle_y_limit: Params::PADDLE_Y_LIMIT,
            input_gain: Params::INPUT_GAIN,
            field_half_height: Params::FIELD_HALF_HEIGHT,
            miss_x: Params::MISS_X,
            ball_radius: Params::BALL_RADIUS,
            ball_opening_vel: Params::BALL_OPENING_VEL,
            paddle_hit_multiplier: Params::PADDLE_HIT_MULTIPLIER,
            ball_speed_max: None,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_spread_y: Params::SERVE_SPREAD_Y,
            control_queue_capacity: Params::CONTROL_QUEUE_CAPACITY,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("paddle_x", self.paddle_x),
            ("paddle_half_width", self.paddle_half_width),
            ("paddle_half_height", self.paddle_half_height),
            ("paddle_y_limit", self.paddle_y_limit),
            ("input_gain", self.input_gain),
            ("field_half_height", self.field_half_height),
            ("miss_x", self.miss_x),
            ("ball_radius", self.ball_radius),
            ("paddle_hit_multiplier", self.paddle_hit_multiplier),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }

        if self.miss_x <= self.paddle_x + self.paddle_half_width {
            return Err(ConfigError::Invalid(format!(
                "miss_x ({}) must lie beyond the paddle face ({})",
                self.miss_x,
                self.paddle_x + self.paddle_half_width
            )));
        }

        if self.field_half_height > self.paddle_y_limit + self.paddle_half_height {
            return Err(ConfigError::Invalid(format!(
                "field_half_height ({}) is out of paddle reach ({})",
                self.field_half_height,
                self.paddle_y_limit + self.paddle_half_height
            )));
        }

        if let Some(max) = self.ball_speed_max {
            if !max.is_finite() || max <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "ball_speed_max must be a positive finite number, got {max}"
                )));
            }
        }

        if !self.serve_speed_x.is_finite()
            || !self.serve_spread_y.is_finite()
            || self.serve_spread_y < 0.0
            || self.ball_opening_vel.iter().any(|v| !v.is_finite())
        {
            return Err(ConfigError::Invalid(
                "serve and opening velocities must be finite".to_string(),
            ));
        }

        if self.control_queue_capacity == 0
            || self.control_queue_capacity > Params::MAX_CONTROL_QUEUE_CAPACITY
        {
            return Err(ConfigError::Invalid(format!(
                "control_queue_capacity must be between 1 and {}, got {}",
                Params::MAX_CONTROL_QUEUE_CAPACITY,
                self.control_queue_capacity
            )));
        }

        Ok(())
    }

    /// Get X position for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => -self.paddle_x,
            Side::Right => self.paddle_x,
        }
    }

    /// X coordinate of the face the ball is pushed back to after a hit
    pub fn paddle_face_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_x(side) + self.paddle_half_width,
            Side::Right => self.paddle_x(side) - self.paddle_half_width,
        }
    }

    /// Clamp paddle Y to its travel range
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(-self.paddle_y_limit, self.paddle_y_limit)
    }

    /// Map a normalized wrist height (0 = top of frame, 1 = bottom) to paddle Y
    ///
    /// Out-of-range input is not rejected; the output clamp bounds it.
    pub fn map_wrist_y(&self, wrist_y: f32) -> f32 {
        let y = (1.0 - wrist_y) * self.input_gain - self.paddle_y_limit;
        self.clamp_paddle_y(y)
    }
}
