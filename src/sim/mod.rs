//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Explicit state, passed by reference into each tick
//! - Randomness only through an injected [`RandomSource`]
//! - Fixed left-then-right paddle order

pub mod collision;
pub mod input;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, ball_paddle_contact, clamp_component, clamp_velocity};
pub use input::{DEFAULT_BINDINGS, Key, KeyState, PaddleBindings, map_input};
pub use rng::{RandomSource, SequenceRng, seeded};
pub use state::{
    Ball, GameEvent, GamePhase, Paddle, PaddleFace, ScreenBounds, Side, SimulationState,
};
pub use tick::{serve, serve_random, tick};
