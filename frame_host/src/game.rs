use game_core::{
    snapshot, spawn_match, step, Config, ControlQueue, ControlSender, Events, GameRng, Side,
    Snapshot,
};
use hecs::World;

use crate::perception::PerceptionFeed;
use crate::HostError;
use crate::render::{FrameView, Renderer};

/// Running totals, for the end-of-run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub frames: u64,
    pub left_hits: u32,
    pub right_hits: u32,
    pub wall_hits: u32,
    pub serves: u32,
}

impl MatchStats {
    fn record(&mut self, events: &Events) {
        self.frames += 1;
        match events.paddle_hit {
            Some(Side::Left) => self.left_hits += 1,
            Some(Side::Right) => self.right_hits += 1,
            None => {}
        }
        if events.wall_hit {
            self.wall_hits += 1;
        }
        if events.served() {
            self.serves += 1;
        }
    }
}

/// The simulation plus everything the host needs to drive it frame by frame
pub struct Game {
    pub world: World,
    pub config: Config,
    pub controls: ControlQueue,
    pub events: Events,
    pub rng: GameRng,
    pub stats: MatchStats,
}

impl Game {
    /// Build a match from a config, rejecting values the simulation cannot run
    pub fn new(config: Config, seed: u64) -> Result<Self, HostError> {
        config.validate()?;

        let mut world = World::new();
        spawn_match(&mut world, &config);
        let controls = ControlQueue::new(config.control_queue_capacity);

        Ok(Self {
            world,
            config,
            controls,
            events: Events::new(),
            rng: GameRng::new(seed),
            stats: MatchStats::default(),
        })
    }

    pub fn control_sender(&self) -> ControlSender {
        self.controls.sender()
    }

    /// Callback target for the perception subsystem
    pub fn perception_feed(&self) -> PerceptionFeed {
        PerceptionFeed::new(self.control_sender())
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        snapshot(&self.world)
    }

    /// Run one tick and present the result
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> &Events {
        step(
            &mut self.world,
            &self.config,
            &mut self.controls,
            &mut self.events,
            &mut self.rng,
        );
        self.stats.record(&self.events);

        if let Some(side) = self.events.missed {
            log::info!(
                "Frame {}: ball got past the {:?} paddle, re-serving",
                self.stats.frames,
                side
            );
        }

        if let Some(snap) = self.snapshot() {
            renderer.present(&FrameView::new(self.stats.frames, &snap, &self.config));
        }

        &self.events
    }
}
