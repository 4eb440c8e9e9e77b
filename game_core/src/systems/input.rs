use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::resources::*;

/// Write one control sample into the matching paddle.
///
/// Returns false when the sample carries no usable height (NaN), in which
/// case the paddle keeps its previous position.
pub fn apply_control(paddle: &mut Paddle, sample: &ControlSample, config: &Config) -> bool {
    if sample.wrist_y.is_nan() {
        log::debug!("Ignoring NaN wrist height for {:?} paddle", sample.side);
        return false;
    }
    paddle.y = config.map_wrist_y(sample.wrist_y);
    true
}

/// Apply a batch to the paddles in report order, so the last sample for a
/// side wins. Sides absent from the batch keep their position.
pub fn apply_batch(world: &mut World, batch: &[ControlSample], config: &Config) -> usize {
    let mut applied = 0;
    for sample in batch {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == sample.side && apply_control(paddle, sample, config) {
                applied += 1;
            }
        }
    }
    applied
}

/// Ingest every pending control batch and move the paddles
pub fn ingest_controls(world: &mut World, controls: &mut ControlQueue, config: &Config) -> usize {
    controls
        .drain()
        .iter()
        .map(|batch| apply_batch(world, batch, config))
        .sum()
}
