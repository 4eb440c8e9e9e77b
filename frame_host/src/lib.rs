//! Native frame host for hand-tracked Pong
//!
//! Owns the simulation, accepts perception batches at their own cadence and
//! presents one frame per tick through a [`render::Renderer`].

pub mod error;
pub mod game;
pub mod logging;
pub mod perception;
pub mod render;
pub mod tracker;

pub use error::HostError;
pub use game::{Game, MatchStats};
pub use perception::PerceptionFeed;
pub use render::{FrameView, LogRenderer, Renderer};
pub use tracker::{SyntheticTracker, TrackerSettings};

use game_core::Config;

/// Load a config file, or fall back to the defaults
pub fn load_config(path: Option<&std::path::Path>) -> Result<Config, HostError> {
    match path {
        Some(path) => {
            let config = Config::load(path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
