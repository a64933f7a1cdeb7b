use std::rc::Rc;

use glam::Vec3;

use crate::core::LoadSpawner;
use crate::loaders::ModelSource;
use crate::scene::{Entity, Group, SharedGroup};
use crate::types::{Species, Transform};

/// Single treasure chest at a fixed point, in its own group
pub fn place_treasure(
    spawner: &LoadSpawner,
    models: Rc<dyn ModelSource>,
    position: Vec3,
) -> SharedGroup {
    let group = Group::shared(Species::Treasure.group_name());

    let target = group.clone();
    spawner.spawn(async move {
        match models.load(Species::Treasure).await {
            Ok(model) => {
                let chest = Entity::new(Species::Treasure, model, Transform::new(position, 0.0, 1.0));
                target.borrow_mut().push(chest);
                log::info!("Treasure placed at {:?}", position);
            }
            Err(e) => log::error!("Failed to load treasure model: {:#}", e),
        }
    });

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoadQueue;
    use crate::loaders::ProceduralModelSource;

    #[test]
    fn test_treasure_lands_after_poll() {
        let mut queue = LoadQueue::new();
        let group = place_treasure(
            &queue.spawner(),
            Rc::new(ProceduralModelSource),
            Vec3::new(0.0, 9.0, 0.0),
        );

        assert!(group.borrow().is_empty());
        queue.poll();

        let group = group.borrow();
        assert_eq!(group.name(), "treasure");
        assert_eq!(group.len(), 1);
        assert_eq!(group.entities()[0].transform.position, Vec3::new(0.0, 9.0, 0.0));
    }
}
