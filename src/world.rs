use crate::animation::orbit::AngleAccumulator;
use crate::overlay::CockpitOverlay;
use crate::scene::Scene;

/// Everything the per-frame tasks read and write
#[derive(Debug, Default)]
pub struct World {
    pub scene: Scene,
    /// Orbit phase shared by every orbiting entity
    pub angle: AngleAccumulator,
    pub overlay: CockpitOverlay,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }
}
