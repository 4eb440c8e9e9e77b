pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the simulation by one fixed tick
///
/// Pending control batches are applied to the paddles first, then the ball
/// moves, collides, and is re-served if it got past a paddle. There is no
/// delta time: one call is one tick.
pub fn step(
    world: &mut World,
    config: &Config,
    controls: &mut ControlQueue,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest hand-tracking samples (latest value wins)
    ingest_controls(world, controls, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then left and right paddles)
    check_collisions(world, config, events);

    // 4. Re-serve if the ball got past a paddle
    check_miss(world, config, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn both paddles at center height and the ball at the origin with its
/// opening velocity
pub fn spawn_match(world: &mut World, config: &Config) -> hecs::Entity {
    create_paddle(world, Side::Left, 0.0);
    create_paddle(world, Side::Right, 0.0);
    let [vx, vy] = config.ball_opening_vel;
    create_ball(world, Vec2::ZERO, Vec2::new(vx, vy))
}

/// Current paddle heights as (left, right). Missing paddles read as 0.
pub fn snapshot_paddles(world: &World) -> (f32, f32) {
    let mut left_y = 0.0;
    let mut right_y = 0.0;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left_y = paddle.y,
            Side::Right => right_y = paddle.y,
        }
    }
    (left_y, right_y)
}

/// Collect the state a renderer needs, if a ball exists
pub fn snapshot(world: &World) -> Option<Snapshot> {
    let ball = {
        let mut query = world.query::<&Ball>();
        let ball = query.iter().next().map(|(_e, ball)| *ball);
        ball
    }?;
    let (left_y, right_y) = snapshot_paddles(world);
    Some(Snapshot {
        ball_pos: ball.pos,
        ball_vel: ball.vel,
        left_y,
        right_y,
    })
}
