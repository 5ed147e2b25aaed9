//! Whole-rally scenarios driven through the public simulation API

use glam::Vec2;
use ortho_pong::Tuning;
use ortho_pong::renderer::RenderFrame;
use ortho_pong::sim::{
    GameEvent, Key, ScreenBounds, SequenceRng, Side, SimulationState, seeded, tick,
};

const NO_KEYS: [Key; 0] = [];

fn parked_field() -> SimulationState {
    let mut state = SimulationState::new(ScreenBounds::new(800.0, 600.0), Tuning::default());
    for paddle in &mut state.paddles {
        paddle.pos.y = paddle.half_height;
    }
    state
}

#[test]
fn ball_crossing_right_edge_scores_and_recenters() {
    let mut state = parked_field();
    state.ball.pos = Vec2::new(400.0, 300.0);
    state.ball.vel = Vec2::new(100.0, 0.0);
    // Serve draws: |vx| at the top of its range, |vy| halfway, negative vy
    let mut rng = SequenceRng::new(vec![1.0, 0.5, 0.0]);

    for _ in 0..4 {
        let events = tick(&mut state, &NO_KEYS[..], &mut rng, 1.0);
        assert!(events.is_empty());
    }
    assert!(state.ball.pos.x >= 800.0);

    let events = tick(&mut state, &NO_KEYS[..], &mut rng, 1.0).to_vec();
    assert_eq!(events, vec![GameEvent::Scored { winner: Side::Left }]);
    assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(state.scores, [1, 0]);
    assert_eq!(state.ball.vel, Vec2::new(-150.0, -75.0));
}

#[test]
fn rally_off_right_paddle_returns_the_ball() {
    let mut state = SimulationState::new(ScreenBounds::new(800.0, 600.0), Tuning::default());
    state.ball.pos = Vec2::new(600.0, 300.0);
    state.ball.vel = Vec2::new(200.0, 0.0);
    let mut rng = seeded(7);

    let mut hits = 0;
    for _ in 0..120 {
        for event in tick(&mut state, &NO_KEYS[..], &mut rng, 1.0 / 60.0) {
            if matches!(event, GameEvent::PaddleHit { side: Side::Right, .. }) {
                hits += 1;
            }
        }
    }

    assert_eq!(hits, 1);
    assert!(state.ball.vel.x < 0.0);
    assert_eq!(state.scores, [0, 0]);
}

#[test]
fn held_keys_move_paddles_and_frame_follows() {
    let mut state = SimulationState::new(ScreenBounds::new(800.0, 600.0), Tuning::default());
    state.ball.vel = Vec2::ZERO;
    let keys = [Key::W, Key::Down];
    let mut rng = seeded(3);

    tick(&mut state, &keys[..], &mut rng, 0.1);

    let left = state.paddle(Side::Left).pos.y;
    let right = state.paddle(Side::Right).pos.y;
    assert!((left - 330.0).abs() < 1e-3);
    assert!((right - 270.0).abs() < 1e-3);

    let frame = RenderFrame::from_state(&state);
    assert_eq!(frame.paddles[0].offset[1], left);
    assert_eq!(frame.paddles[1].offset[1], right);
    assert_eq!(frame.ball[0].offset, [400.0, 300.0]);
}
