use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::sync::Arc;

use glam::Vec2;

use crate::Side;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub paddle_hit: Option<Side>, // Last paddle the ball bounced off
    pub wall_hit: bool,
    pub missed: Option<Side>, // Paddle the ball got past before the serve reset
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.paddle_hit = None;
        self.wall_hit = false;
        self.missed = None;
    }

    pub fn served(&self) -> bool {
        self.missed.is_some()
    }
}

/// One player's normalized wrist height from the hand tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSample {
    pub side: Side,
    pub wrist_y: f32, // 0 = top of frame, 1 = bottom
}

impl ControlSample {
    pub fn new(side: Side, wrist_y: f32) -> Self {
        Self { side, wrist_y }
    }
}

/// Every sample reported by one perception callback, in report order
pub type ControlBatch = Vec<ControlSample>;

/// Producer half of the control queue, handed to the perception callback
#[derive(Debug, Clone)]
pub struct ControlSender {
    tx: SyncSender<ControlBatch>,
    dropped: Arc<AtomicUsize>,
}

impl ControlSender {
    /// Queue a batch without blocking.
    ///
    /// A full queue drops the batch; a closed queue ignores it.
    pub fn send(&self, batch: ControlBatch) {
        match self.tx.try_send(batch) {
            Ok(()) => {}
            Err(TrySendError::Full(batch)) => {
                let total = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                log::warn!(
                    "Control queue full, dropping batch of {} samples ({} dropped so far)",
                    batch.len(),
                    total
                );
            }
            Err(TrySendError::Disconnected(_)) => {
                log::debug!("Control queue closed, ignoring batch");
            }
        }
    }
}

/// Bounded queue decoupling perception callbacks from the simulation tick
#[derive(Debug)]
pub struct ControlQueue {
    rx: Receiver<ControlBatch>,
    tx: SyncSender<ControlBatch>,
    dropped: Arc<AtomicUsize>,
}

impl ControlQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, crate::Params::MAX_CONTROL_QUEUE_CAPACITY);
        let (tx, rx) = mpsc::sync_channel(capacity);
        Self {
            rx,
            tx,
            dropped: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A new producer handle feeding this queue
    pub fn sender(&self) -> ControlSender {
        ControlSender {
            tx: self.tx.clone(),
            dropped: Arc::clone(&self.dropped),
        }
    }

    /// Take every pending batch in arrival order
    pub fn drain(&mut self) -> Vec<ControlBatch> {
        let mut batches = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(batch) => batches.push(batch),
                // The queue holds its own sender, so it never disconnects
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        batches
    }

    /// Number of batches dropped because the queue was full
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for ControlQueue {
    fn default() -> Self {
        Self::new(crate::Params::CONTROL_QUEUE_CAPACITY)
    }
}

/// Current ball and paddle state, read after a tick for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub left_y: f32,
    pub right_y: f32,
}

impl Snapshot {
    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_y,
            Side::Right => self.right_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.paddle_hit = Some(Side::Left);
        events.wall_hit = true;
        events.missed = Some(Side::Right);

        events.clear();

        assert!(events.paddle_hit.is_none());
        assert!(!events.wall_hit);
        assert!(events.missed.is_none());
        assert!(!events.served());
    }

    #[test]
    fn test_control_queue_preserves_order() {
        let mut queue = ControlQueue::new(4);
        let sender = queue.sender();
        sender.send(vec![ControlSample::new(Side::Left, 0.1)]);
        sender.send(vec![ControlSample::new(Side::Right, 0.9)]);

        let batches = queue.drain();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0][0].side, Side::Left);
        assert_eq!(batches[1][0].side, Side::Right);
        assert!(queue.drain().is_empty(), "Drain empties the queue");
    }

    #[test]
    fn test_control_queue_drops_when_full() {
        let mut queue = ControlQueue::new(2);
        let sender = queue.sender();
        for i in 0..5 {
            sender.send(vec![ControlSample::new(Side::Left, i as f32 / 10.0)]);
        }

        assert_eq!(queue.dropped(), 3, "Batches past capacity are dropped");
        let batches = queue.drain();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1][0].wrist_y, 0.1);
    }

    #[test]
    fn test_control_queue_capacity_is_bounded() {
        let mut queue = ControlQueue::new(usize::MAX);
        let sender = queue.sender();
        for _ in 0..crate::Params::MAX_CONTROL_QUEUE_CAPACITY + 3 {
            sender.send(vec![ControlSample::new(Side::Left, 0.5)]);
        }

        assert_eq!(queue.dropped(), 3);
        assert_eq!(queue.drain().len(), crate::Params::MAX_CONTROL_QUEUE_CAPACITY);
    }

    #[test]
    fn test_sender_outlives_queue() {
        let queue = ControlQueue::new(1);
        let sender = queue.sender();
        drop(queue);
        // Must not panic once the receiving side is gone
        sender.send(vec![ControlSample::new(Side::Right, 0.5)]);
    }

    #[test]
    fn test_control_sender_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<ControlSender>();
    }

    #[test]
    fn test_snapshot_paddle_y() {
        let snapshot = Snapshot {
            ball_pos: Vec2::ZERO,
            ball_vel: Vec2::ZERO,
            left_y: -1.0,
            right_y: 2.0,
        };
        assert_eq!(snapshot.paddle_y(Side::Left), -1.0);
        assert_eq!(snapshot.paddle_y(Side::Right), 2.0);
    }
}
