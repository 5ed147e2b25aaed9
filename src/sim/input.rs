//! Keyboard → paddle velocity mapping

use serde::{Deserialize, Serialize};

use super::state::{Paddle, ScreenBounds};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    Space,
    Escape,
}

/// "Is key K currently pressed" poll
pub trait KeyState {
    fn is_down(&self, key: Key) -> bool;
}

impl KeyState for [Key] {
    fn is_down(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

/// Up/down keys for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleBindings {
    pub up: Key,
    pub down: Key,
}

/// Left paddle on W/S, right paddle on the arrow keys
pub const DEFAULT_BINDINGS: [PaddleBindings; 2] = [
    PaddleBindings {
        up: Key::W,
        down: Key::S,
    },
    PaddleBindings {
        up: Key::Up,
        down: Key::Down,
    },
];

/// Set each paddle's velocity for this tick from the keyboard
///
/// Up and down are checked independently. A paddle already at a boundary
/// whose key pushes further is clamped in place instead of moving. The
/// velocity is also limited so that `y + v * dt` lands on the boundary rather
/// than past it.
pub fn map_input<K: KeyState + ?Sized>(
    keys: &K,
    paddles: &mut [Paddle; 2],
    bindings: &[PaddleBindings; 2],
    bounds: ScreenBounds,
    speed: f32,
    dt: f32,
) -> [f32; 2] {
    let mut velocities = [0.0; 2];

    for (i, (paddle, binding)) in paddles.iter_mut().zip(bindings.iter()).enumerate() {
        let (lower, upper) = paddle.y_range(bounds);
        let mut velocity = 0.0;

        if keys.is_down(binding.up) {
            if paddle.pos.y < upper {
                velocity = limit_step(speed, upper - paddle.pos.y, dt);
            } else {
                paddle.pos.y = upper;
            }
        }
        if keys.is_down(binding.down) {
            if paddle.pos.y > lower {
                velocity = -limit_step(speed, paddle.pos.y - lower, dt);
            } else {
                paddle.pos.y = lower;
            }
        }

        paddle.velocity_y = velocity;
        velocities[i] = velocity;
    }

    velocities
}

/// Largest speed (≤ `speed`) that covers at most `room` in `dt`
#[inline]
fn limit_step(speed: f32, room: f32, dt: f32) -> f32 {
    if dt > 0.0 {
        speed.min(room / dt)
    } else {
        speed
    }
}
