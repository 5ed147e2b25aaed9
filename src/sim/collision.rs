//! Collision detection and response
//!
//! Ball vs. paddle uses the paddle box expanded by the ball radius (Minkowski
//! sum) and resolves along the axis of least penetration.

use glam::Vec2;

use super::state::{Ball, Paddle, PaddleFace, ScreenBounds};
use crate::tuning::Tuning;

/// Result of a ball/paddle overlap test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Signed horizontal gap (negative = overlapping)
    pub dx: f32,
    /// Signed vertical gap (negative = overlapping)
    pub dy: f32,
}

impl PaddleContact {
    pub fn hit(&self) -> bool {
        self.dx < 0.0 && self.dy < 0.0
    }

    /// Face of least penetration
    pub fn face(&self) -> PaddleFace {
        if self.dx > self.dy {
            PaddleFace::Side
        } else {
            PaddleFace::Cap
        }
    }
}

/// Gap between the ball and a paddle's expanded box along each axis
pub fn ball_paddle_contact(ball: &Ball, paddle: &Paddle) -> PaddleContact {
    let delta = (ball.pos - paddle.pos).abs();
    PaddleContact {
        dx: delta.x - (paddle.half_width + ball.radius),
        dy: delta.y - (paddle.half_height + ball.radius),
    }
}

/// Which horizontal wall the ball is touching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Bottom,
    Top,
}

/// Check the ball against the bottom (y = 0) and top (y = height) walls
pub fn ball_wall_collision(ball: &Ball, bounds: ScreenBounds) -> Option<Wall> {
    if ball.pos.y - ball.radius <= 0.0 {
        Some(Wall::Bottom)
    } else if ball.pos.y + ball.radius >= bounds.height {
        Some(Wall::Top)
    } else {
        None
    }
}

/// Bounce off a wall: send vy back into the field and nudge toward the center
pub fn resolve_wall_collision(ball: &mut Ball, wall: Wall, push_out: f32) {
    match wall {
        Wall::Bottom => {
            if ball.vel.y < 0.0 {
                ball.vel.y = -ball.vel.y;
            }
            ball.pos.y += push_out;
        }
        Wall::Top => {
            if ball.vel.y > 0.0 {
                ball.vel.y = -ball.vel.y;
            }
            ball.pos.y -= push_out;
        }
    }
}

/// Clamp a velocity component's magnitude into `[min, max]`, keeping its sign
#[inline]
pub fn clamp_component(v: f32, min: f32, max: f32) -> f32 {
    v.abs().clamp(min, max).copysign(v)
}

/// Clamp both velocity components independently
#[inline]
pub fn clamp_velocity(vel: Vec2, min: f32, max: f32) -> Vec2 {
    Vec2::new(clamp_component(vel.x, min, max), clamp_component(vel.y, min, max))
}

/// Direction to push the ball away from the paddle along one axis
///
/// Falls back to opposing the incoming velocity when the centers coincide.
#[inline]
fn away(ball_coord: f32, paddle_coord: f32, incoming_vel: f32) -> f32 {
    let d = ball_coord - paddle_coord;
    if d != 0.0 {
        d.signum()
    } else if incoming_vel != 0.0 {
        -incoming_vel.signum()
    } else {
        1.0
    }
}

/// Bounce the ball off a paddle it overlaps
///
/// Inverts the velocity on the struck face, pushes the ball clear, speeds up
/// the horizontal component, adds spin from the paddle's motion and clamps
/// both components into the allowed speed band.
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Paddle,
    contact: PaddleContact,
    tuning: &Tuning,
) -> PaddleFace {
    let face = contact.face();
    match face {
        PaddleFace::Side => {
            let dir = away(ball.pos.x, paddle.pos.x, ball.vel.x);
            ball.vel.x = -ball.vel.x;
            ball.pos.x += dir * (-contact.dx + tuning.push_out);
        }
        PaddleFace::Cap => {
            let dir = away(ball.pos.y, paddle.pos.y, ball.vel.y);
            ball.vel.y = -ball.vel.y;
            ball.pos.y += dir * (-contact.dy + tuning.push_out);
        }
    }

    ball.vel.x *= tuning.paddle_hit_speedup;
    ball.vel.y += tuning.paddle_spin_factor * paddle.velocity_y;
    ball.vel = clamp_velocity(ball.vel, tuning.ball_min_velocity, tuning.ball_max_velocity);

    face
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle_at(x: f32, y: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(x, y),
            velocity_y: 0.0,
            half_width: 10.0,
            half_height: 50.0,
        }
    }

    #[test]
    fn test_contact_miss_and_hit() {
        let paddle = paddle_at(40.0, 300.0);

        let far = Ball::new(Vec2::new(200.0, 300.0), Vec2::ZERO, 10.0);
        assert!(!ball_paddle_contact(&far, &paddle).hit());

        let overlapping = Ball::new(Vec2::new(55.0, 300.0), Vec2::ZERO, 10.0);
        let contact = ball_paddle_contact(&overlapping, &paddle);
        assert!(contact.hit());
        assert_eq!(contact.dx, -5.0);
        assert_eq!(contact.face(), PaddleFace::Side);
    }

    #[test]
    fn test_contact_cap_face() {
        let paddle = paddle_at(40.0, 300.0);
        // Just above the top of the paddle, well inside horizontally
        let ball = Ball::new(Vec2::new(42.0, 358.0), Vec2::new(0.0, -50.0), 10.0);
        let contact = ball_paddle_contact(&ball, &paddle);
        assert!(contact.hit());
        assert_eq!(contact.face(), PaddleFace::Cap);
    }

    #[test]
    fn test_side_hit_speeds_up_and_flips() {
        let tuning = Tuning::default();
        let paddle = paddle_at(760.0, 300.0);
        let mut ball = Ball::new(Vec2::new(742.0, 300.0), Vec2::new(100.0, 40.0), 10.0);

        let contact = ball_paddle_contact(&ball, &paddle);
        let face = resolve_paddle_hit(&mut ball, &paddle, contact, &tuning);

        assert_eq!(face, PaddleFace::Side);
        assert!((ball.vel.x + 105.0).abs() < 1e-3);
        // Pushed left of the paddle by penetration + 0.1
        assert!((ball.pos.x - (740.0 - 0.1)).abs() < 1e-3);
    }

    #[test]
    fn test_cap_hit_flips_vy_and_pushes_up() {
        let tuning = Tuning::default();
        let paddle = paddle_at(40.0, 300.0);
        let mut ball = Ball::new(Vec2::new(42.0, 358.0), Vec2::new(-60.0, -80.0), 10.0);

        let contact = ball_paddle_contact(&ball, &paddle);
        let face = resolve_paddle_hit(&mut ball, &paddle, contact, &tuning);

        assert_eq!(face, PaddleFace::Cap);
        assert!(ball.vel.y > 0.0);
        assert!(ball.pos.y >= 360.0 + 0.1 - 1e-3);
    }

    #[test]
    fn test_paddle_motion_adds_spin() {
        let tuning = Tuning::default();
        let mut paddle = paddle_at(40.0, 300.0);
        paddle.velocity_y = 200.0;
        let mut ball = Ball::new(Vec2::new(58.0, 300.0), Vec2::new(-100.0, 30.0), 10.0);

        let contact = ball_paddle_contact(&ball, &paddle);
        resolve_paddle_hit(&mut ball, &paddle, contact, &tuning);

        assert!((ball.vel.y - 130.0).abs() < 1e-3);
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let mut ball = Ball::new(Vec2::new(400.0, -10.0 + 0.5), Vec2::new(80.0, -50.0), 10.0);
        let bounds = ScreenBounds::new(800.0, 600.0);
        let wall = ball_wall_collision(&ball, bounds).unwrap();
        assert_eq!(wall, Wall::Bottom);

        let y_before = ball.pos.y;
        resolve_wall_collision(&mut ball, wall, 0.1);
        assert_eq!(ball.vel.y, 50.0);
        assert!(ball.pos.y - y_before >= 0.1 - 1e-4);
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut ball = Ball::new(Vec2::new(400.0, 595.0), Vec2::new(80.0, 50.0), 10.0);
        let wall = ball_wall_collision(&ball, ScreenBounds::new(800.0, 600.0)).unwrap();
        assert_eq!(wall, Wall::Top);

        resolve_wall_collision(&mut ball, wall, 0.1);
        assert_eq!(ball.vel.y, -50.0);
        assert!(ball.pos.y < 595.0);
    }

    #[test]
    fn test_clamp_component_examples() {
        assert_eq!(clamp_component(5.0, 20.0, 300.0), 20.0);
        assert_eq!(clamp_component(-5.0, 20.0, 300.0), -20.0);
        assert_eq!(clamp_component(-400.0, 20.0, 300.0), -300.0);
        assert_eq!(clamp_component(150.0, 20.0, 300.0), 150.0);
    }

    proptest! {
        #[test]
        fn prop_clamp_bounds_and_sign(v in -10_000.0f32..10_000.0) {
            let c = clamp_component(v, 20.0, 300.0);
            prop_assert!(c.abs() >= 20.0 && c.abs() <= 300.0);
            prop_assert_eq!(c.is_sign_negative(), v.is_sign_negative());
        }
    }
}
