//! Screen bounds shared between the resize handler and the frame loop

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::sim::ScreenBounds;

/// Width/height pair packed into one atomic word
///
/// Both halves are stored and loaded together, so a reader can never see a
/// width from one resize paired with a height from another.
#[derive(Debug, Clone)]
pub struct SharedBounds(Arc<AtomicU64>);

impl SharedBounds {
    pub fn new(bounds: ScreenBounds) -> Self {
        Self(Arc::new(AtomicU64::new(pack(bounds))))
    }

    pub fn store(&self, bounds: ScreenBounds) {
        self.0.store(pack(bounds), Ordering::Release);
    }

    pub fn load(&self) -> ScreenBounds {
        unpack(self.0.load(Ordering::Acquire))
    }
}

fn pack(bounds: ScreenBounds) -> u64 {
    ((bounds.width.to_bits() as u64) << 32) | bounds.height.to_bits() as u64
}

fn unpack(bits: u64) -> ScreenBounds {
    ScreenBounds::new(
        f32::from_bits((bits >> 32) as u32),
        f32::from_bits(bits as u32),
    )
}
