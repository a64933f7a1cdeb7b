use std::f32::consts::{FRAC_PI_2, TAU};
use std::rc::Rc;

use glam::Vec3;
use rand::Rng;

use super::SharedRng;
use crate::config::ValueRange;
use crate::core::LoadSpawner;
use crate::loaders::ModelSource;
use crate::scene::{Entity, Group, SharedGroup};
use crate::terrain::Terrain;
use crate::types::{Model, Species, Transform};

/// Where and how one scattered entity sits on the seabed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub scale: f32,
    pub yaw: f32,
}

/// Random point on the terrain surface.
///
/// Draws (x, z) uniformly over the terrain's square and drops a ray from
/// `ray_height`. A miss yields the world origin, so callers may see the
/// occasional entity sitting at (0, 0, 0).
pub fn place_on_terrain<R: Rng + ?Sized>(terrain: &Terrain, ray_height: f32, rng: &mut R) -> Vec3 {
    let half = terrain.half_size();
    let x = rng.random_range(-half..half);
    let z = rng.random_range(-half..half);

    terrain.cast_down(x, z, ray_height).unwrap_or(Vec3::ZERO)
}

/// Scale, then surface point, then yaw in `[0, 2π)`
pub fn draw_placement<R: Rng + ?Sized>(
    terrain: &Terrain,
    scale: ValueRange,
    ray_height: f32,
    rng: &mut R,
) -> Placement {
    let scale = scale.sample(rng);
    let position = place_on_terrain(terrain, ray_height, rng);
    let yaw = rng.random_range(0.0..TAU);
    Placement {
        position,
        scale,
        yaw,
    }
}

/// Two crossed copies sharing position and scale, the second turned a further 90°
pub fn crossed_pair(species: Species, model: Rc<Model>, placement: Placement) -> (Entity, Entity) {
    let first = Entity::new(
        species,
        model,
        Transform::new(placement.position, placement.yaw, placement.scale),
    );

    let mut second = first.clone();
    second.transform.rotation.y = first.transform.rotation.y + FRAC_PI_2;

    (first, second)
}

/// Everything a scatter job needs besides the load handle
#[derive(Clone)]
pub struct ScatterJob {
    pub species: Species,
    pub count: usize,
    pub scale: ValueRange,
    pub ray_height: f32,
}

/// Populate a group with `count` crossed pairs placed on the terrain.
///
/// Returns the group immediately and empty. Once the reference model loads,
/// one instance load is queued per placement; each pair lands in the group
/// when its own load completes, so the group grows to `2 * count` over time
/// in no promised order. A failed load is logged and leaves the group short.
pub fn scatter(
    spawner: &LoadSpawner,
    models: Rc<dyn ModelSource>,
    terrain: Rc<Terrain>,
    rng: SharedRng,
    job: ScatterJob,
) -> SharedGroup {
    let group = Group::shared(job.species.group_name());

    let instances = spawner.clone();
    let target = group.clone();
    spawner.spawn(async move {
        if let Err(e) = models.load(job.species).await {
            log::error!("Failed to load {} reference model: {:#}", job.species.name(), e);
            return;
        }

        for _ in 0..job.count {
            let models = models.clone();
            let terrain = terrain.clone();
            let rng = rng.clone();
            let group = target.clone();
            let job = job.clone();

            instances.spawn(async move {
                let model = match models.load(job.species).await {
                    Ok(model) => model,
                    Err(e) => {
                        log::error!("Failed to load {} instance: {:#}", job.species.name(), e);
                        return;
                    }
                };

                let placement =
                    draw_placement(&terrain, job.scale, job.ray_height, &mut *rng.borrow_mut());
                let (first, second) = crossed_pair(job.species, model, placement);

                let mut group = group.borrow_mut();
                group.push(first);
                group.push(second);
            });
        }
    });

    group
}
