//! Perception feed: turns hand tracker batches into control samples

use game_core::{ControlBatch, ControlSample, ControlSender, Side};
use proto::{HandBatch, Handedness};

use crate::HostError;

/// Paddle controlled by a hand, decided by the tracker's handedness label
pub fn side_for(handedness: Handedness) -> Side {
    Side::from_label(handedness.label())
}

/// Extract one control sample per hand, in report order.
///
/// A hand with no landmarks carries no wrist height and is skipped, so its
/// paddle holds position.
pub fn to_control_batch(batch: &HandBatch) -> ControlBatch {
    batch
        .hands
        .iter()
        .filter_map(|hand| {
            let side = side_for(hand.handedness);
            match hand.wrist() {
                Some(wrist) => Some(ControlSample::new(side, wrist.y)),
                None => {
                    log::debug!("Frame {}: {:?} hand has no landmarks", batch.frame, side);
                    None
                }
            }
        })
        .collect()
}

/// Perception callback target
///
/// Owned by whatever delivers hand tracking results. It may be called at any
/// cadence; the simulation only sees the queued batches on its next tick.
#[derive(Debug, Clone)]
pub struct PerceptionFeed {
    sender: ControlSender,
}

impl PerceptionFeed {
    pub fn new(sender: ControlSender) -> Self {
        Self { sender }
    }

    /// Forward a decoded batch. Empty results are not queued.
    pub fn deliver(&self, batch: &HandBatch) -> usize {
        let controls = to_control_batch(batch);
        let count = controls.len();
        if count > 0 {
            self.sender.send(controls);
        }
        count
    }

    /// Decode and forward an encoded batch
    pub fn deliver_bytes(&self, bytes: &[u8]) -> Result<usize, HostError> {
        let batch = HandBatch::from_bytes(bytes).map_err(HostError::Decode)?;
        Ok(self.deliver(&batch))
    }
}
