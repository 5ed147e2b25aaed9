//! Ortho Pong - two-paddle Pong on an orthographic, instanced wgpu renderer
//!
//! Core modules:
//! - `sim`: Simulation step (input mapping, collisions, scoring)
//! - `renderer`: wgpu pipeline, disc/quad meshes and per-frame buffer sync
//! - `platform`: winit window, keyboard state, frame clock
//! - `settings`: JSON configuration
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::AppError;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Mat4;

/// Game configuration constants
pub mod consts {
    /// Initial window / field size
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_HALF_WIDTH: f32 = 10.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 50.0;
    /// Distance of each paddle center from its screen edge
    pub const PADDLE_EDGE_OFFSET: f32 = 40.0;
    /// Paddle speed (units/s)
    pub const PADDLE_SPEED: f32 = 300.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_MIN_VELOCITY: f32 = 20.0;
    pub const BALL_MAX_VELOCITY: f32 = 300.0;

    /// Serve velocity ranges (magnitudes)
    pub const SERVE_VX_MIN: f32 = 50.0;
    pub const SERVE_VX_MAX: f32 = 150.0;
    pub const SERVE_VY_MAX: f32 = 150.0;

    /// Ticks during which paddle collisions are ignored after a hit
    pub const COLLISION_THRESHOLD: u32 = 3;
    /// Extra separation applied after a collision
    pub const PUSH_OUT: f32 = 0.1;
    /// Horizontal speed-up on every paddle hit (multiplicative)
    pub const PADDLE_HIT_SPEEDUP: f32 = 1.05;
    /// Share of paddle velocity transferred to the ball
    pub const PADDLE_SPIN_FACTOR: f32 = 0.5;

    /// Ball mesh resolution
    pub const DISC_TRIANGLES: u32 = 32;
    /// Upper bound on a single frame's dt (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
    /// Largest `max_frame_dt` a settings file may ask for (seconds)
    pub const MAX_FRAME_DT_LIMIT: f32 = 1.0;
}

/// Orthographic projection for a field with the origin at the bottom-left
///
/// left = 0, right = width, bottom = 0, top = height, near = 0, far = 1
#[inline]
pub fn field_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, 0.0, height, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_projection_maps_corners_to_ndc() {
        let proj = field_projection(800.0, 600.0);

        let bottom_left = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((bottom_left.x + 1.0).abs() < 1e-5);
        assert!((bottom_left.y + 1.0).abs() < 1e-5);

        let top_right = proj * Vec4::new(800.0, 600.0, 0.0, 1.0);
        assert!((top_right.x - 1.0).abs() < 1e-5);
        assert!((top_right.y - 1.0).abs() < 1e-5);

        let center = proj * Vec4::new(400.0, 300.0, 0.0, 1.0);
        assert!(center.x.abs() < 1e-5);
        assert!(center.y.abs() < 1e-5);
        // Depth stays inside wgpu's [0, 1] clip range
        assert!(center.z >= 0.0 && center.z <= 1.0);
    }
}
