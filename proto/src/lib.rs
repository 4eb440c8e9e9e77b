//! Perception protocol for hand-tracked Pong
//!
//! One [`HandBatch`] is what the hand tracker reports for a single camera
//! frame. Uses postcard for compact binary serialization.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Hand tracking results
// ============================================================================

/// Lateral classification of a detected hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Tracker label as reported upstream
    pub fn label(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

/// Normalized landmark: x/y in [0, 1] of the camera frame (y = 0 at the top),
/// z relative depth. Trackers can report values slightly outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One detected hand; landmark 0 is the wrist
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetectedHand {
    pub handedness: Handedness,
    pub landmarks: Vec<Landmark>,
}

impl DetectedHand {
    pub fn new(handedness: Handedness, landmarks: Vec<Landmark>) -> Self {
        Self {
            handedness,
            landmarks,
        }
    }

    /// Wrist landmark, if the tracker reported any landmarks at all
    pub fn wrist(&self) -> Option<&Landmark> {
        self.landmarks.first()
    }
}

/// Every hand reported for one camera frame
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandBatch {
    /// Camera frame counter from the tracker
    pub frame: u32,
    pub hands: Vec<DetectedHand>,
}

impl HandBatch {
    pub fn new(frame: u32, hands: Vec<DetectedHand>) -> Self {
        Self { frame, hands }
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl HandBatch {
    /// Serialize batch to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize batch from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
