//! Synthetic hand tracker
//!
//! Stands in for camera capture plus landmark detection: both "hands" follow
//! the ball height with some jitter, and a camera frame is produced only every
//! `cadence` host frames.

use game_core::{Config, Snapshot};
use proto::{DetectedHand, HandBatch, Handedness, Landmark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::HostError;

/// Noise beyond a full frame height is meaningless
const MAX_JITTER: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct TrackerSettings {
    /// Host frames between camera frames
    pub cadence: u64,
    /// Max uniform noise added to the normalized wrist height
    pub jitter: f32,
    /// Chance that a hand goes undetected in a camera frame
    pub dropout: f64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            cadence: 2,
            jitter: 0.01,
            dropout: 0.0,
        }
    }
}

pub struct SyntheticTracker {
    settings: TrackerSettings,
    rng: StdRng,
    camera_frame: u32,
}

impl SyntheticTracker {
    pub fn new(settings: TrackerSettings, seed: u64) -> Self {
        Self {
            settings: TrackerSettings {
                cadence: settings.cadence.max(1),
                // `max` maps NaN to the lower bound; `min` bounds infinity
                jitter: settings.jitter.max(0.0).min(MAX_JITTER),
                dropout: settings.dropout.max(0.0).min(1.0),
            },
            rng: StdRng::seed_from_u64(seed),
            camera_frame: 0,
        }
    }

    /// Wrist height that would put a paddle exactly at `y`
    pub fn wrist_y_for(y: f32, config: &Config) -> f32 {
        1.0 - (y + config.paddle_y_limit) / config.input_gain
    }

    /// Look at the scene on this host frame. Returns an encoded batch when a
    /// camera frame is due.
    pub fn observe(
        &mut self,
        host_frame: u64,
        snapshot: &Snapshot,
        config: &Config,
    ) -> Result<Option<Vec<u8>>, HostError> {
        if host_frame % self.settings.cadence != 0 {
            return Ok(None);
        }

        let batch = self.capture(snapshot, config);
        batch.to_bytes().map(Some).map_err(HostError::Encode)
    }

    fn capture(&mut self, snapshot: &Snapshot, config: &Config) -> HandBatch {
        self.camera_frame = self.camera_frame.wrapping_add(1);
        let target = Self::wrist_y_for(snapshot.ball_pos.y, config);

        let mut hands = Vec::with_capacity(2);
        for (handedness, x) in [(Handedness::Left, 0.25), (Handedness::Right, 0.75)] {
            if self.settings.dropout > 0.0 && self.rng.gen_bool(self.settings.dropout) {
                continue;
            }
            let noise = if self.settings.jitter > 0.0 {
                self.rng.gen_range(-self.settings.jitter..=self.settings.jitter)
            } else {
                0.0
            };
            hands.push(DetectedHand::new(
                handedness,
                vec![Landmark::new(x, target + noise, 0.0)],
            ));
        }

        HandBatch::new(self.camera_frame, hands)
    }
}
