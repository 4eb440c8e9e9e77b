//! Renderer seam
//!
//! The host pushes the current transforms to a [`Renderer`] once per frame,
//! after the tick and before the frame is presented. Drawing itself lives
//! outside this crate.

use game_core::{Config, Side, Snapshot};
use glam::Vec3;

/// Transforms for one presented frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub frame: u64,
    pub ball: Vec3,
    pub ball_radius: f32,
    pub left_paddle: Vec3,
    pub right_paddle: Vec3,
    pub paddle_size: Vec3,
}

impl FrameView {
    pub fn new(frame: u64, snapshot: &Snapshot, config: &Config) -> Self {
        let paddle = |side: Side| Vec3::new(config.paddle_x(side), snapshot.paddle_y(side), 0.0);
        Self {
            frame,
            ball: snapshot.ball_pos.extend(0.0),
            ball_radius: config.ball_radius,
            left_paddle: paddle(Side::Left),
            right_paddle: paddle(Side::Right),
            paddle_size: Vec3::from(game_core::Params::PADDLE_RENDER_SIZE),
        }
    }
}

pub trait Renderer {
    fn present(&mut self, view: &FrameView);
}

/// Renderer that writes transforms to the log
pub struct LogRenderer {
    summary_every: u64,
}

impl LogRenderer {
    pub fn new(summary_every: u64) -> Self {
        Self {
            summary_every: summary_every.max(1),
        }
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, view: &FrameView) {
        log::trace!(
            "frame {}: ball ({:.3}, {:.3}) paddles L {:.3} R {:.3}",
            view.frame,
            view.ball.x,
            view.ball.y,
            view.left_paddle.y,
            view.right_paddle.y
        );
        if view.frame % self.summary_every == 0 {
            log::debug!(
                "frame {}: ball at ({:.2}, {:.2}), paddles at {:.2} / {:.2}",
                view.frame,
                view.ball.x,
                view.ball.y,
                view.left_paddle.y,
                view.right_paddle.y
            );
        }
    }
}
