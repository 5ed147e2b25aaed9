//! Simulation state → per-frame instance data

use glam::Vec2;

use super::vertex::InstanceData;
use crate::sim::{Side, SimulationState};

/// Instance data for one frame
///
/// The disc mesh is built at ball radius, so the ball instance keeps unit
/// scale. Paddles scale the unit quad to their full extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub ball: [InstanceData; 1],
    /// Left paddle first
    pub paddles: [InstanceData; 2],
}

impl RenderFrame {
    pub fn from_state(state: &SimulationState) -> Self {
        let paddle = |side: Side| {
            let p = state.paddle(side);
            InstanceData::new(p.pos, Vec2::new(p.half_width * 2.0, p.half_height * 2.0))
        };

        Self {
            ball: [InstanceData::new(state.ball.pos, Vec2::ONE)],
            paddles: [paddle(Side::Left), paddle(Side::Right)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ScreenBounds;
    use crate::tuning::Tuning;

    #[test]
    fn test_frame_mirrors_state() {
        let mut state = SimulationState::new(ScreenBounds::new(800.0, 600.0), Tuning::default());
        state.ball.pos = Vec2::new(123.0, 456.0);
        state.paddle_mut(Side::Right).pos.y = 80.0;

        let frame = RenderFrame::from_state(&state);

        assert_eq!(frame.ball[0].offset, [123.0, 456.0]);
        assert_eq!(frame.ball[0].size, [1.0, 1.0]);
        assert_eq!(frame.paddles[0].offset, [40.0, 300.0]);
        assert_eq!(frame.paddles[1].offset, [760.0, 80.0]);
        assert_eq!(frame.paddles[1].size, [20.0, 100.0]);
    }
}
