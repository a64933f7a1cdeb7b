use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use rand::rngs::SmallRng;

use super::{init_orbits, place_treasure, scatter, ScatterJob, SharedRng};
use crate::config::SceneConfig;
use crate::core::LoadSpawner;
use crate::loaders::ModelSource;
use crate::scene::{Scene, SharedGroup};
use crate::terrain::Terrain;
use crate::types::Species;

/// Handles to the three populated groups
pub struct Reef {
    pub kelp: SharedGroup,
    pub sharks: SharedGroup,
    pub treasure: SharedGroup,
}

impl Reef {
    /// Entities that have landed so far across all groups
    pub fn loaded(&self) -> usize {
        self.kelp.borrow().len() + self.sharks.borrow().len() + self.treasure.borrow().len()
    }

    /// Entity count once every load has succeeded
    pub fn expected(config: &SceneConfig) -> usize {
        config.kelp.count * 2 + config.sharks.count + 1
    }
}

/// Queue every population load and attach the (still empty) groups to the scene.
/// Nothing lands until the load queue is polled.
pub fn build_reef(
    config: &SceneConfig,
    terrain: Rc<Terrain>,
    models: Rc<dyn ModelSource>,
    spawner: &LoadSpawner,
    scene: &mut Scene,
    rng: SmallRng,
) -> Reef {
    let rng: SharedRng = Rc::new(RefCell::new(rng));

    let treasure = place_treasure(
        spawner,
        models.clone(),
        Vec3::from_array(config.treasure.position),
    );

    let kelp = scatter(
        spawner,
        models.clone(),
        terrain,
        rng.clone(),
        ScatterJob {
            species: Species::Kelp,
            count: config.kelp.count,
            scale: config.kelp.scale,
            ray_height: config.terrain.ray_height,
        },
    );

    let sharks = init_orbits(spawner, models, rng, config.sharks.clone());

    scene.add(treasure.clone());
    scene.add(kelp.clone());
    scene.add(sharks.clone());

    log::info!(
        "Reef queued: {} kelp placements, {} sharks, 1 treasure",
        config.kelp.count,
        config.sharks.count
    );

    Reef {
        kelp,
        sharks,
        treasure,
    }
}
