use std::f32::consts::TAU;
use std::rc::Rc;

use glam::Vec3;
use rand::Rng;

use super::SharedRng;
use crate::animation::Orbit;
use crate::config::SharkConfig;
use crate::core::LoadSpawner;
use crate::loaders::ModelSource;
use crate::scene::{Entity, Group, SharedGroup};
use crate::types::{Species, Transform};

/// Draw one orbit and the scale of the entity riding it.
/// The starting point on the circle becomes the orbit's reference center.
pub fn draw_orbit<R: Rng + ?Sized>(config: &SharkConfig, rng: &mut R) -> (Orbit, f32) {
    let scale = config.scale.sample(rng);
    let clockwise = rng.random_bool(0.5);

    let radius = config.radius.sample(rng);
    let angle = rng.random_range(0.0..TAU);
    let height = config.height.sample(rng);
    let center = Vec3::new(radius * angle.cos(), height, radius * angle.sin());

    let angular_speed = config.angular_speed.sample(rng);

    let orbit = Orbit {
        center,
        radius,
        height,
        angular_speed,
        clockwise,
    };
    (orbit, scale)
}

/// Populate a group of orbiting sharks.
///
/// Returns the empty group at once. When the single reference model arrives,
/// all `count` sharks are cloned from it and added in one go, each resting at
/// its orbit center until the first animation tick.
pub fn init_orbits(
    spawner: &LoadSpawner,
    models: Rc<dyn ModelSource>,
    rng: SharedRng,
    config: SharkConfig,
) -> SharedGroup {
    let group = Group::shared(Species::Shark.group_name());

    let target = group.clone();
    spawner.spawn(async move {
        let reference = match models.load(Species::Shark).await {
            Ok(model) => model,
            Err(e) => {
                log::error!("Failed to load shark model: {:#}", e);
                return;
            }
        };

        let mut rng = rng.borrow_mut();
        let mut group = target.borrow_mut();
        for _ in 0..config.count {
            let (orbit, scale) = draw_orbit(&config, &mut *rng);
            let shark = Entity::new(
                Species::Shark,
                reference.clone(),
                Transform::new(orbit.center, 0.0, scale),
            )
            .with_orbit(orbit);
            group.push(shark);
        }

        log::info!("{} sharks ready", group.len());
    });

    group
}
