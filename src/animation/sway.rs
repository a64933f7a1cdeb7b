use anyhow::Result;

use crate::core::FrameTask;
use crate::frame::FrameInfo;
use crate::scene::Entity;
use crate::world::World;

pub const DEFAULT_SWAY_AMPLITUDE: f32 = 0.1;

/// Tilt for a given total elapsed time. One phase for the whole scene.
pub fn sway_tilt(elapsed: f64, amplitude: f32) -> f32 {
    amplitude * elapsed.cos() as f32
}

pub fn tick_sway(entities: &mut [Entity], elapsed: f64, amplitude: f32) {
    let tilt = sway_tilt(elapsed, amplitude);
    for entity in entities {
        entity.transform.rotation.x = tilt;
    }
}

/// Frame task tilting one named group back and forth
pub struct SwayAnimator {
    group: String,
    amplitude: f32,
}

impl SwayAnimator {
    pub fn new(group: impl Into<String>, amplitude: f32) -> Self {
        Self {
            group: group.into(),
            amplitude,
        }
    }
}

impl FrameTask for SwayAnimator {
    fn name(&self) -> &str {
        "sway"
    }

    fn run(&mut self, frame: &FrameInfo, world: &mut World) -> Result<()> {
        if let Some(group) = world.scene.group(&self.group) {
            tick_sway(group.borrow_mut().entities_mut(), frame.time, self.amplitude);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Model, Species, Transform};
    use glam::Vec3;
    use std::rc::Rc;

    fn kelp(yaw: f32) -> Entity {
        Entity::new(
            Species::Kelp,
            Rc::new(Model::new("kelp", vec![])),
            Transform::new(Vec3::new(4.0, 1.0, -2.0), yaw, 3.0),
        )
    }

    #[test]
    fn test_sway_tilt_at_rest_and_peak() {
        assert!((sway_tilt(0.0, DEFAULT_SWAY_AMPLITUDE) - 0.1).abs() < 1e-6);
        assert!((sway_tilt(std::f64::consts::PI, DEFAULT_SWAY_AMPLITUDE) + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_sway_is_uniform_and_touches_only_tilt() {
        let mut group = vec![kelp(0.0), kelp(1.2), kelp(2.5)];

        tick_sway(&mut group, 2.0, DEFAULT_SWAY_AMPLITUDE);

        let expected = 0.1 * 2.0f32.cos();
        for (entity, yaw) in group.iter().zip([0.0, 1.2, 2.5]) {
            assert!((entity.transform.tilt() - expected).abs() < 1e-6);
            assert_eq!(entity.transform.yaw(), yaw);
            assert_eq!(entity.transform.position, Vec3::new(4.0, 1.0, -2.0));
        }
    }
}
