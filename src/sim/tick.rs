//! Per-frame simulation tick
//!
//! Advances the match by a wall-clock `dt`. Step order is fixed so that
//! simultaneous collisions always resolve the same way:
//! input → walls → side-out → reset → cooldown → paddles → integration.

use super::collision::{
    ball_paddle_contact, ball_wall_collision, resolve_paddle_hit, resolve_wall_collision,
};
use super::input::{KeyState, map_input};
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, ScreenBounds, Side, SimulationState};

/// Advance the simulation by `dt` seconds
///
/// Returns the events produced by this tick.
pub fn tick<'a, K, R>(
    state: &'a mut SimulationState,
    keys: &K,
    rng: &mut R,
    dt: f32,
) -> &'a [GameEvent]
where
    K: KeyState + ?Sized,
    R: RandomSource + ?Sized,
{
    state.events.clear();
    if state.phase != GamePhase::Active {
        return &state.events;
    }

    // Bounds are read once so every check in this tick sees the same field
    let bounds = state.bounds;

    map_input(
        keys,
        &mut state.paddles,
        &state.tuning.controls,
        bounds,
        state.tuning.paddle_speed,
        dt,
    );

    // Top/bottom walls
    if let Some(wall) = ball_wall_collision(&state.ball, bounds) {
        resolve_wall_collision(&mut state.ball, wall, state.tuning.push_out);
        state.events.push(GameEvent::WallBounce);
    }

    // Side-out
    let ball = &state.ball;
    let scorer = if ball.pos.x - ball.radius <= 0.0 {
        Some(Side::Right)
    } else if ball.pos.x + ball.radius >= bounds.width {
        Some(Side::Left)
    } else {
        None
    };

    // Reset takes priority over paddle hits
    if let Some(winner) = scorer {
        award_point(state, winner);
        serve(state, winner, rng);
    }

    if state.collision_cooldown > 0 {
        state.collision_cooldown -= 1;
    }

    if scorer.is_none() && state.collision_cooldown == 0 {
        for side in [Side::Left, Side::Right] {
            let paddle = &state.paddles[side.index()];
            let contact = ball_paddle_contact(&state.ball, paddle);
            if contact.hit() {
                let face = resolve_paddle_hit(&mut state.ball, paddle, contact, &state.tuning);
                state.collision_cooldown = state.tuning.collision_threshold;
                state.events.push(GameEvent::PaddleHit { side, face });
                break;
            }
        }
    }

    integrate(state, bounds, dt, scorer.is_none());

    &state.events
}

/// Re-center the ball and give it a fresh random velocity toward `toward`
///
/// `|vx|` is drawn from the serve range, `|vy|` from `[0, serve_vy_max]` with a
/// random sign.
pub fn serve<R: RandomSource + ?Sized>(state: &mut SimulationState, toward: Side, rng: &mut R) {
    let tuning = &state.tuning;
    let vx = rng.next_float_range(tuning.serve_vx_min, tuning.serve_vx_max);
    let vy = rng.next_float_range(0.0, tuning.serve_vy_max);
    let vy_sign = if rng.next_float_range(0.0, 1.0) < 0.5 {
        -1.0
    } else {
        1.0
    };
    let vx_sign = match toward {
        Side::Left => -1.0,
        Side::Right => 1.0,
    };

    state.ball.pos = state.bounds.center();
    state.ball.vel.x = vx * vx_sign;
    state.ball.vel.y = vy * vy_sign;
}

/// Serve toward a randomly chosen side (match start)
pub fn serve_random<R: RandomSource + ?Sized>(state: &mut SimulationState, rng: &mut R) {
    let toward = if rng.next_float_range(0.0, 1.0) < 0.5 {
        Side::Left
    } else {
        Side::Right
    };
    serve(state, toward, rng);
}

fn award_point(state: &mut SimulationState, winner: Side) {
    state.scores[winner.index()] += 1;
    state.last_winner = Some(winner);
    state.events.push(GameEvent::Scored { winner });
    log::debug!(
        "{:?} scores ({} - {})",
        winner,
        state.scores[0],
        state.scores[1]
    );

    if let Some(target) = state.tuning.winning_score {
        if state.scores[winner.index()] >= target {
            state.phase = GamePhase::Win;
            state.events.push(GameEvent::MatchWon { winner });
        }
    }
}

fn integrate(state: &mut SimulationState, bounds: ScreenBounds, dt: f32, move_ball: bool) {
    for paddle in &mut state.paddles {
        paddle.pos.y += paddle.velocity_y * dt;
        paddle.clamp_to(bounds);
    }
    if move_ball {
        state.ball.pos += state.ball.vel * dt;
    }
}
