use anyhow::Result;
use glam::Vec3;

use crate::core::FrameTask;
use crate::frame::FrameInfo;
use crate::scene::Entity;
use crate::world::World;

/// Fixed orbit parameters drawn once when an entity is created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// The initial position. Positions are offset from this point, so it is
    /// not the geometric center of the circle the entity traces.
    pub center: Vec3,
    pub radius: f32,
    /// Same value as `center.y`
    pub height: f32,
    pub angular_speed: f32,
    pub clockwise: bool,
}

impl Orbit {
    /// +1 for clockwise, -1 otherwise
    pub fn sign(&self) -> f32 {
        if self.clockwise {
            1.0
        } else {
            -1.0
        }
    }

    /// World position for a given shared phase
    pub fn position_at(&self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        self.center + self.sign() * self.radius * Vec3::new(cos as f32, 0.0, sin as f32)
    }
}

/// The single orbit phase shared by all orbiting entities.
/// Starts at zero and only ever moves forward. Held in f64 so the small
/// per-entity steps still register after hours of running.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AngleAccumulator {
    angle: f64,
}

impl AngleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(angle: f64) -> Self {
        Self { angle }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advance by `speed * delta` and return the new phase
    pub fn advance(&mut self, speed: f32, delta: f32) -> f64 {
        self.angle += speed as f64 * delta as f64;
        self.angle
    }
}

/// Move every orbiting entity along its circle.
///
/// The accumulator is advanced once per entity, by that entity's own speed,
/// before the entity is positioned. A tick over N entities therefore moves the
/// phase N times, and later entities in the slice see a larger phase than
/// earlier ones. Entities without an orbit are skipped.
pub fn tick_orbits(entities: &mut [Entity], accumulator: &mut AngleAccumulator, delta: f32) {
    for entity in entities {
        let Some(orbit) = entity.orbit else {
            continue;
        };

        let angle = accumulator.advance(orbit.angular_speed, delta);
        entity.transform.position = orbit.position_at(angle);
        entity.transform.rotation.y = -angle as f32;
    }
}

/// Frame task driving one named group of orbiting entities
pub struct OrbitAnimator {
    group: String,
}

impl OrbitAnimator {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
        }
    }
}

impl FrameTask for OrbitAnimator {
    fn name(&self) -> &str {
        "orbit"
    }

    fn run(&mut self, frame: &FrameInfo, world: &mut World) -> Result<()> {
        // Group not attached yet behaves like an empty one
        if let Some(group) = world.scene.group(&self.group) {
            tick_orbits(group.borrow_mut().entities_mut(), &mut world.angle, frame.delta);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Model, Species, Transform};
    use std::f32::consts::PI;
    use std::rc::Rc;

    fn shark(orbit: Orbit) -> Entity {
        Entity::new(
            Species::Shark,
            Rc::new(Model::new("shark", vec![])),
            Transform::new(orbit.center, 0.0, 1.0),
        )
        .with_orbit(orbit)
    }

    fn orbit(speed: f32, clockwise: bool) -> Orbit {
        Orbit {
            center: Vec3::new(0.0, 20.0, 0.0),
            radius: 10.0,
            height: 20.0,
            angular_speed: speed,
            clockwise,
        }
    }

    #[test]
    fn test_single_shark_half_turn() {
        let mut sharks = vec![shark(orbit(1.0, true))];
        let mut acc = AngleAccumulator::new();

        tick_orbits(&mut sharks, &mut acc, PI);

        assert!((acc.angle() - PI as f64).abs() < 1e-6);
        let p = sharks[0].transform.position;
        assert!((p - Vec3::new(-10.0, 20.0, 0.0)).length() < 1e-4);
        assert!((sharks[0].transform.yaw() + PI).abs() < 1e-6);
    }

    #[test]
    fn test_counter_clockwise_mirrors_offset() {
        let o = orbit(1.0, false);
        assert_eq!(o.sign(), -1.0);
        let p = o.position_at(0.0);
        assert!((p - Vec3::new(-10.0, 20.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_accumulator_advances_once_per_entity() {
        let mut sharks = vec![shark(orbit(0.5, true)), shark(orbit(0.25, false))];
        let mut acc = AngleAccumulator::new();

        tick_orbits(&mut sharks, &mut acc, 2.0);

        // 0.5*2 + 0.25*2
        assert!((acc.angle() - 1.5).abs() < 1e-6);
        // The second shark saw the phase after both advances
        assert!((sharks[0].transform.yaw() + 1.0).abs() < 1e-6);
        assert!((sharks[1].transform.yaw() + 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_entities_without_orbit_are_skipped() {
        let mut entities = vec![Entity::new(
            Species::Kelp,
            Rc::new(Model::new("kelp", vec![])),
            Transform::new(Vec3::new(1.0, 2.0, 3.0), 0.3, 1.0),
        )];
        let mut acc = AngleAccumulator::new();

        tick_orbits(&mut entities, &mut acc, 1.0);

        assert_eq!(acc.angle(), 0.0);
        assert_eq!(entities[0].transform.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_empty_group_is_noop() {
        let mut acc = AngleAccumulator::starting_at(0.7);
        tick_orbits(&mut [], &mut acc, 1.0);
        assert_eq!(acc.angle(), 0.7);
    }

    #[test]
    fn test_phase_keeps_advancing_after_hours() {
        let mut sharks: Vec<Entity> = (0..30).map(|_| shark(orbit(0.0102, true))).collect();
        let mut acc = AngleAccumulator::starting_at(4096.0);

        for _ in 0..600 {
            tick_orbits(&mut sharks, &mut acc, 1.0 / 60.0);
        }

        // 30 sharks * 0.0102 rad/s * 10 s
        assert!((acc.angle() - (4096.0 + 3.06)).abs() < 1e-4, "phase = {}", acc.angle());
    }

    #[test]
    fn test_long_run_independent_of_tick_size() {
        let mut one = vec![shark(orbit(0.005, false))];
        let mut whole = AngleAccumulator::starting_at(500.0);
        tick_orbits(&mut one, &mut whole, 3600.0);

        let mut many = vec![shark(orbit(0.005, false))];
        let mut split = AngleAccumulator::starting_at(500.0);
        for _ in 0..216_000 {
            tick_orbits(&mut many, &mut split, 1.0 / 60.0);
        }

        assert!((whole.angle() - 518.0).abs() < 1e-6);
        assert!((split.angle() - whole.angle()).abs() < 1e-3, "{} vs {}", split.angle(), whole.angle());
        assert!((one[0].transform.position - many[0].transform.position).length() < 1e-2);
    }
}
