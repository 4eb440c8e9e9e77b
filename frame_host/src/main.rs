use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use frame_host::{load_config, logging, Game, LogRenderer, SyntheticTracker, TrackerSettings};

/// Headless hand-tracked Pong: runs the fixed-tick simulation against a
/// synthetic hand tracker and logs every presented frame
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to run
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Seed for serves and tracker noise
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// JSON file overriding game tuning values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame pacing in frames per second (0 runs unpaced)
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Host frames between perception batches
    #[arg(long, default_value_t = 2)]
    cadence: u64,

    /// Max noise on the normalized wrist height
    #[arg(long, default_value_t = 0.01)]
    jitter: f32,

    /// Chance a hand goes undetected in a camera frame
    #[arg(long, default_value_t = 0.0)]
    dropout: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    if !args.jitter.is_finite() || !args.dropout.is_finite() {
        anyhow::bail!(
            "--jitter and --dropout must be finite (got {} and {})",
            args.jitter,
            args.dropout
        );
    }

    let config = load_config(args.config.as_deref())?;
    let mut game = Game::new(config, args.seed)?;
    let feed = game.perception_feed();
    let mut tracker = SyntheticTracker::new(
        TrackerSettings {
            cadence: args.cadence,
            jitter: args.jitter,
            dropout: args.dropout,
        },
        args.seed.wrapping_add(1),
    );
    let mut renderer = LogRenderer::default();

    let frame_time = (args.fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(args.fps)));
    log::info!(
        "Running {} frames (seed {}, perception every {} frames)",
        args.frames,
        args.seed,
        args.cadence.max(1)
    );

    for frame in 0..args.frames {
        let started = Instant::now();

        if let Some(snap) = game.snapshot() {
            if let Some(bytes) = tracker.observe(frame, &snap, &game.config)? {
                if let Err(err) = feed.deliver_bytes(&bytes) {
                    log::warn!("Dropping perception batch: {err}");
                }
            }
        }

        game.frame(&mut renderer);

        if let Some(frame_time) = frame_time {
            if let Some(remaining) = frame_time.checked_sub(started.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    let stats = game.stats;
    log::info!(
        "Done after {} frames: {} left hits, {} right hits, {} wall bounces, {} serves",
        stats.frames,
        stats.left_hits,
        stats.right_hits,
        stats.wall_hits,
        stats.serves
    );
    if game.controls.dropped() > 0 {
        log::warn!("{} perception batches were dropped", game.controls.dropped());
    }

    Ok(())
}
