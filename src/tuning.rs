//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a settings file
//! can override it. Defaults mirror [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;
use crate::sim::{DEFAULT_BINDINGS, PaddleBindings};

/// Gameplay parameters for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle_half_width: f32,
    pub paddle_half_height: f32,
    /// Distance of each paddle center from its screen edge
    pub paddle_edge_offset: f32,
    pub paddle_speed: f32,

    pub ball_radius: f32,
    pub ball_min_velocity: f32,
    pub ball_max_velocity: f32,

    pub serve_vx_min: f32,
    pub serve_vx_max: f32,
    pub serve_vy_max: f32,

    pub collision_threshold: u32,
    pub push_out: f32,
    pub paddle_hit_speedup: f32,
    pub paddle_spin_factor: f32,

    /// Points needed to win the match (`None` = endless)
    pub winning_score: Option<u32>,

    /// Up/down keys, left paddle first
    pub controls: [PaddleBindings; 2],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_half_width: PADDLE_HALF_WIDTH,
            paddle_half_height: PADDLE_HALF_HEIGHT,
            paddle_edge_offset: PADDLE_EDGE_OFFSET,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_min_velocity: BALL_MIN_VELOCITY,
            ball_max_velocity: BALL_MAX_VELOCITY,

            serve_vx_min: SERVE_VX_MIN,
            serve_vx_max: SERVE_VX_MAX,
            serve_vy_max: SERVE_VY_MAX,

            collision_threshold: COLLISION_THRESHOLD,
            push_out: PUSH_OUT,
            paddle_hit_speedup: PADDLE_HIT_SPEEDUP,
            paddle_spin_factor: PADDLE_SPIN_FACTOR,

            winning_score: None,

            controls: DEFAULT_BINDINGS,
        }
    }
}

impl Tuning {
    /// Reject values the physics step cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.ball_min_velocity > 0.0 && self.ball_min_velocity <= self.ball_max_velocity) {
            return Err(TuningError::VelocityBounds {
                min: self.ball_min_velocity,
                max: self.ball_max_velocity,
            });
        }
        if !(self.serve_vx_min >= 0.0 && self.serve_vx_min <= self.serve_vx_max) {
            return Err(TuningError::ServeRange {
                min: self.serve_vx_min,
                max: self.serve_vx_max,
            });
        }
        if !(self.serve_vy_max >= 0.0) {
            return Err(TuningError::ServeVy(self.serve_vy_max));
        }
        if !(self.ball_radius > 0.0 && self.paddle_half_width > 0.0 && self.paddle_half_height > 0.0)
        {
            return Err(TuningError::Dimensions);
        }
        if !(self.paddle_speed >= 0.0) {
            return Err(TuningError::PaddleSpeed(self.paddle_speed));
        }
        if self.winning_score == Some(0) {
            return Err(TuningError::WinningScore);
        }
        for (paddle, binding) in self.controls.iter().enumerate() {
            if binding.up == binding.down {
                return Err(TuningError::Bindings {
                    paddle,
                    key: binding.up,
                });
            }
        }
        Ok(())
    }
}
