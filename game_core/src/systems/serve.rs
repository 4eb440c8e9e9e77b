use crate::{Ball, Config, Events, GameRng, Side};
use hecs::World;

/// Re-serve the ball once it has passed either paddle
pub fn check_miss(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let missed = if ball.pos.x > config.miss_x {
            Some(Side::Right)
        } else if ball.pos.x < -config.miss_x {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = missed {
            ball.serve(config, rng);
            events.missed = Some(side);
            log::debug!(
                "Ball got past the {:?} paddle, serving with vel ({:.3}, {:.3})",
                side,
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, GameRng};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events, GameRng) {
        let world = hecs::World::new();
        let config = Config::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, events, rng)
    }

    fn assert_served(world: &hecs::World, config: &Config) {
        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::ZERO, "Ball should reset to center");
            assert_eq!(ball.vel.x.abs(), config.serve_speed_x);
            assert!(ball.vel.y.abs() <= config.serve_spread_y);
        }
    }

    #[test]
    fn test_serve_after_ball_passes_right_paddle() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(6.01, 0.3), Vec2::new(0.4, 0.0));

        check_miss(&mut world, &config, &mut events, &mut rng);

        assert_eq!(events.missed, Some(Side::Right));
        assert_served(&world, &config);
    }

    #[test]
    fn test_serve_after_ball_passes_left_paddle() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-6.5, -1.0), Vec2::new(-0.4, 0.02));

        check_miss(&mut world, &config, &mut events, &mut rng);

        assert_eq!(events.missed, Some(Side::Left));
        assert_served(&world, &config);
    }

    #[test]
    fn test_no_serve_when_ball_in_bounds() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(5.9, 0.0), Vec2::new(0.05, 0.0));

        check_miss(&mut world, &config, &mut events, &mut rng);

        assert!(events.missed.is_none(), "No serve when ball in bounds");
        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(5.9, 0.0));
    }

    #[test]
    fn test_ball_exactly_on_miss_bound_stays() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-6.0, 0.0), Vec2::new(-0.05, 0.0));

        check_miss(&mut world, &config, &mut events, &mut rng);

        assert!(events.missed.is_none());
    }

    #[test]
    fn test_same_seed_serves_identically() {
        let config = Config::new();
        let serve_with = |seed| {
            let mut world = hecs::World::new();
            let mut events = Events::new();
            let mut rng = GameRng::new(seed);
            let ball = create_ball(&mut world, Vec2::new(7.0, 0.0), Vec2::ZERO);
            check_miss(&mut world, &config, &mut events, &mut rng);
            let vel = world.get::<&Ball>(ball).unwrap().vel;
            vel
        };

        assert_eq!(serve_with(42), serve_with(42));
    }
}
