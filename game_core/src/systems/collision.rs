use crate::{Ball, Config, Events, GameEvent, Paddle, Rect, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            events.push(GameEvent::WallBounce);
        }

        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                events.push(GameEvent::PaddleHit { side: paddle.side });
            }
        }
    }
}

/// Reflect off the top or bottom wall. Returns true on a bounce.
///
/// Only a ball heading into a wall is reflected, and it is put back inside
/// the playfield so it cannot bounce twice.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    if ball.rect.top() <= 0.0 && ball.vel.y < 0.0 {
        ball.reflect_vertical();
        ball.rect.pos.y = 0.0;
        true
    } else if ball.rect.bottom() >= config.arena_height && ball.vel.y > 0.0 {
        ball.reflect_vertical();
        ball.rect.pos.y = config.arena_height - ball.rect.size.y;
        true
    } else {
        false
    }
}

/// Vertical hit position on the paddle: -1 at the top edge, 1 at the bottom
pub fn hit_offset(ball: &Rect, paddle: &Rect) -> f32 {
    let half_height = paddle.size.y / 2.0;
    ((ball.center_y() - paddle.center_y()) / half_height).clamp(-1.0, 1.0)
}

/// Deflect the ball off a paddle. Returns true on a hit.
///
/// Speed never changes; the hit offset alone picks the outgoing angle.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if !approaching || !ball.rect.intersects(&paddle.rect) {
        return false;
    }

    let angle = hit_offset(&ball.rect, &paddle.rect) * config.max_bounce_angle;
    ball.vel.x = paddle.side.outward() * config.ball_speed * angle.cos();
    ball.vel.y = config.ball_speed * angle.sin();

    // Flush against the paddle face so the next tick starts clear of it
    ball.rect.pos.x = match paddle.side {
        Side::Left => paddle.rect.right() + config.paddle_clearance,
        Side::Right => paddle.rect.left() - config.paddle_clearance - ball.rect.size.x,
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, PaddleControl};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let events = Events::new();
        (world, config, events)
    }

    fn paddle_at(config: &Config, side: Side) -> Paddle {
        Paddle::new(side, config.paddle_start(side), config.paddle_speed)
    }

    /// Ball whose vertical center sits `dy` below the paddle center, overlapping its face
    fn ball_touching(config: &Config, paddle: &Paddle, dy: f32, vel: Vec2) -> Ball {
        let size = config.ball_size;
        let x = match paddle.side {
            Side::Left => paddle.rect.right() - 2.0,
            Side::Right => paddle.rect.left() - size + 2.0,
        };
        let y = paddle.rect.center_y() + dy - size / 2.0;
        Ball::new(Rect::new(x, y, size, size), vel)
    }

    fn only_ball(world: &hecs::World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball exists");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball_vel = Vec2::new(4.0, -5.0);
        create_ball(
            &mut world,
            Ball::new(Rect::new(400.0, -2.0, 15.0, 15.0), ball_vel),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!(ball.vel.y > 0.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, ball_vel.x, "X velocity should be unchanged");
        assert_eq!(ball.rect.top(), 0.0, "Ball should be pushed out of wall");
        assert!(events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball_vel = Vec2::new(4.0, 5.0);
        create_ball(
            &mut world,
            Ball::new(Rect::new(400.0, 590.0, 15.0, 15.0), ball_vel),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!(ball.vel.y < 0.0, "Ball should bounce up after hitting bottom wall");
        assert_eq!(ball.rect.bottom(), config.arena_height);
        assert!(events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_ball_leaving_wall_is_not_reflected_again() {
        let config = Config::new();
        let mut ball = Ball::new(Rect::new(400.0, 0.0, 15.0, 15.0), Vec2::new(4.0, 5.0));

        assert!(!bounce_off_walls(&mut ball, &config));
        assert_eq!(ball.vel.y, 5.0);
    }

    #[test]
    fn test_centre_hit_returns_straight() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        let mut ball = ball_touching(&config, &paddle, 0.0, Vec2::new(-7.0, 0.0));

        assert!(bounce_off_paddle(&mut ball, &paddle, &config));

        assert_eq!(ball.vel, Vec2::new(7.0, 0.0));
        assert_eq!(ball.rect.left(), paddle.rect.right() + 1.0);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Right, PaddleControl::Pointer);
        let paddle = paddle_at(&config, Side::Right);
        create_ball(
            &mut world,
            ball_touching(&config, &paddle, 20.0, Vec2::new(7.0, 0.0)),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!(ball.vel.x < 0.0, "Ball should bounce left after hitting right paddle");
        assert_eq!(ball.rect.right(), paddle.rect.left() - 1.0);
        assert_eq!(
            events.as_slice(),
            &[GameEvent::PaddleHit { side: Side::Right }]
        );
    }

    #[test]
    fn test_speed_conserved_for_every_offset() {
        let config = Config::new();
        let speed_sq = config.ball_speed * config.ball_speed;

        for side in [Side::Left, Side::Right] {
            let paddle = paddle_at(&config, side);
            for step in -11..=11 {
                let dy = step as f32 * 5.0;
                let incoming = Vec2::new(-side.outward() * 5.0, 4.9);
                let mut ball = ball_touching(&config, &paddle, dy, incoming);

                assert!(bounce_off_paddle(&mut ball, &paddle, &config));

                assert!(
                    (ball.vel.length_squared() - speed_sq).abs() < 1e-3,
                    "{:?} dy {} gave speed^2 {}",
                    side,
                    dy,
                    ball.vel.length_squared()
                );
                assert_eq!(
                    ball.vel.x.signum(),
                    side.outward(),
                    "Ball must leave away from the {:?} paddle",
                    side
                );
            }
        }
    }

    #[test]
    fn test_trajectory_follows_hit_position() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);

        let mut top = ball_touching(&config, &paddle, -40.0, Vec2::new(-7.0, 0.0));
        bounce_off_paddle(&mut top, &paddle, &config);
        assert!(top.vel.y < 0.0, "Top-half hit deflects upward");

        let mut bottom = ball_touching(&config, &paddle, 40.0, Vec2::new(-7.0, 0.0));
        bounce_off_paddle(&mut bottom, &paddle, &config);
        assert!(bottom.vel.y > 0.0, "Bottom-half hit deflects downward");
    }

    #[test]
    fn test_offset_is_clamped_past_paddle_edge() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        // Center 56 px below the paddle center: outside the 50 px half-height
        let mut ball = ball_touching(&config, &paddle, 56.0, Vec2::new(-7.0, 0.0));

        assert_eq!(hit_offset(&ball.rect, &paddle.rect), 1.0);
        bounce_off_paddle(&mut ball, &paddle, &config);

        let max = config.max_bounce_angle;
        assert!((ball.vel.x - config.ball_speed * max.cos()).abs() < 1e-4);
        assert!((ball.vel.y - config.ball_speed * max.sin()).abs() < 1e-4);
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        let mut ball = ball_touching(&config, &paddle, 0.0, Vec2::new(7.0, 0.0));
        let before = ball;

        assert!(!bounce_off_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, before.vel, "Ball should not bounce when moving away");
        assert_eq!(ball.rect, before.rect);
    }

    #[test]
    fn test_no_bounce_without_overlap() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        let mut ball = Ball::new(
            Rect::new(paddle.rect.right(), 290.0, 15.0, 15.0),
            Vec2::new(-7.0, 0.0),
        );

        assert!(!bounce_off_paddle(&mut ball, &paddle, &config), "Edge contact only");
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left, PaddleControl::Ai);

        check_collisions(&mut world, &config, &mut events);

        assert!(events.is_empty());
    }
}
