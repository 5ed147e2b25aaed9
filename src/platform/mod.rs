//! Platform layer
//!
//! Native window, keyboard, frame timing and the resize handoff. Everything
//! winit-specific stays in here; the simulation only sees [`crate::sim::KeyState`].

pub mod app;
pub mod bounds;
pub mod clock;
pub mod keyboard;

pub use app::run;
pub use bounds::SharedBounds;
pub use clock::FrameClock;
pub use keyboard::{KeyboardState, map_key};
