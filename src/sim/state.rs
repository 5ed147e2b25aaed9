//! Simulation state and core types
//!
//! Everything the physics step reads or writes lives in [`SimulationState`];
//! there is no global game state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// One side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into paddle/score arrays (left first)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running
    #[default]
    Active,
    /// Paused
    Menu,
    /// A side reached the winning score
    Win,
}

/// Which face of a paddle the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleFace {
    /// Left/right face; horizontal velocity inverted
    Side,
    /// Top/bottom face; vertical velocity inverted
    Cap,
}

/// Things that happened during a tick (for logging and effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side, face: PaddleFace },
    Scored { winner: Side },
    MatchWon { winner: Side },
}

/// Field size in simulation units (bottom-left origin, y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A player paddle (axis-aligned box)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    /// Vertical velocity for this tick (set by input mapping)
    pub velocity_y: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Paddle {
    pub fn new(side: Side, bounds: ScreenBounds, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(Self::x_for(side, bounds, tuning), bounds.height / 2.0),
            velocity_y: 0.0,
            half_width: tuning.paddle_half_width,
            half_height: tuning.paddle_half_height,
        }
    }

    /// Fixed x coordinate for a side
    pub fn x_for(side: Side, bounds: ScreenBounds, tuning: &Tuning) -> f32 {
        match side {
            Side::Left => tuning.paddle_edge_offset,
            Side::Right => bounds.width - tuning.paddle_edge_offset,
        }
    }

    /// Allowed y range `(lower, upper)` for the paddle center
    ///
    /// Collapses to the field center when the window is shorter than the paddle.
    pub fn y_range(&self, bounds: ScreenBounds) -> (f32, f32) {
        let lower = self.half_height;
        let upper = bounds.height - self.half_height;
        if lower <= upper {
            (lower, upper)
        } else {
            let mid = bounds.height / 2.0;
            (mid, mid)
        }
    }

    /// Keep the paddle inside its range
    pub fn clamp_to(&mut self, bounds: ScreenBounds) {
        let (lower, upper) = self.y_range(bounds);
        self.pos.y = self.pos.y.clamp(lower, upper);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Left paddle first, then right
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Ticks remaining before paddle collisions are tested again
    pub collision_cooldown: u32,
    /// Field size, replaced on resize
    pub bounds: ScreenBounds,
    /// Points per side (left, right)
    pub scores: [u32; 2],
    /// Winner of the most recent rally
    pub last_winner: Option<Side>,
    pub phase: GamePhase,
    pub tuning: Tuning,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl SimulationState {
    /// Create a match with the ball at rest in the center
    ///
    /// Call [`crate::sim::serve`] (or let a side-out happen) to set it moving.
    pub fn new(bounds: ScreenBounds, tuning: Tuning) -> Self {
        let paddles = [
            Paddle::new(Side::Left, bounds, &tuning),
            Paddle::new(Side::Right, bounds, &tuning),
        ];
        let ball = Ball::new(bounds.center(), Vec2::ZERO, tuning.ball_radius);
        Self {
            paddles,
            ball,
            collision_cooldown: 0,
            bounds,
            scores: [0, 0],
            last_winner: None,
            phase: GamePhase::Active,
            tuning,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    /// Apply new screen bounds: move the right paddle to its edge and clamp
    /// both paddles into the new range
    pub fn resize(&mut self, bounds: ScreenBounds) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        for side in [Side::Left, Side::Right] {
            let x = Paddle::x_for(side, bounds, &self.tuning);
            let paddle = &mut self.paddles[side.index()];
            paddle.pos.x = x;
            paddle.clamp_to(bounds);
        }
    }

    /// Start a new match, keeping bounds and tuning
    pub fn restart(&mut self) {
        *self = Self::new(self.bounds, self.tuning.clone());
    }

    /// Space bar: pause/resume, or start over once a match is won
    ///
    /// Returns true when a new match was started (the caller serves).
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Active => {
                self.phase = GamePhase::Menu;
                false
            }
            GamePhase::Menu => {
                self.phase = GamePhase::Active;
                false
            }
            GamePhase::Win => {
                self.restart();
                true
            }
        }
    }
}
