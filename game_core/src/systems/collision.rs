use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom of the play field
pub fn check_wall_collision(world: &mut World, config: &Config, events: &mut Events) {
    let limit = config.field_half_height;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y > limit || ball.pos.y < -limit {
            ball.vel.y = -ball.vel.y;
            // Clamp position so the ball cannot sink further on the next tick
            ball.pos.y = if ball.pos.y > 0.0 { limit } else { -limit };
            events.wall_hit = true;
            log::trace!("Ball bounced off wall at x={:.3}", ball.pos.x);
        }
    }
}

/// Bounce the ball off either paddle, left first then right
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding a borrow on the world
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| match paddle.side {
        Side::Left => 0,
        Side::Right => 1,
    });

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !paddle.contains(ball.pos, config) {
                continue;
            }

            // Reverse and speed up; the multiplier compounds on every hit
            let mut vx = ball.vel.x * -config.paddle_hit_multiplier;
            // An unvalidated config may carry a negative or non-finite cap
            if let Some(max) = config.ball_speed_max.filter(|max| max.is_finite()) {
                let max = max.abs();
                vx = vx.clamp(-max, max);
            }
            ball.vel.x = vx;

            // Push the ball back onto the paddle face so it cannot tunnel or stick
            ball.pos.x = config.paddle_face_x(paddle.side);

            events.paddle_hit = Some(paddle.side);
            log::trace!("Ball hit {:?} paddle, vx now {:.4}", paddle.side, ball.vel.x);
        }
    }
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    check_wall_collision(world, config, events);
    check_paddle_collisions(world, config, events);
}
