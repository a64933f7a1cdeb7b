use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::orbit::Orbit;
use crate::types::{Model, Species, Transform};

/// One placed instance of a reference model
#[derive(Debug, Clone)]
pub struct Entity {
    pub species: Species,
    pub transform: Transform,
    pub model: Rc<Model>,
    /// Present only on orbiting entities
    pub orbit: Option<Orbit>,
}

impl Entity {
    pub fn new(species: Species, model: Rc<Model>, transform: Transform) -> Self {
        Self {
            species,
            transform,
            model,
            orbit: None,
        }
    }

    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self
    }
}

/// Named, append-only collection of entities.
/// Its length is how the rest of the program learns that loads have landed.
#[derive(Debug, Default)]
pub struct Group {
    name: String,
    entities: Vec<Entity>,
}

/// Groups are shared between the scene and the load tasks filling them
pub type SharedGroup = Rc<RefCell<Group>>;

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
        }
    }

    pub fn shared(name: impl Into<String>) -> SharedGroup {
        Rc::new(RefCell::new(Self::new(name)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Members can be moved in place but the membership itself never shrinks
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }
}

/// Ordered set of groups making up the scene graph
#[derive(Debug, Default)]
pub struct Scene {
    groups: Vec<SharedGroup>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a group. Groups are attached before their members arrive.
    pub fn add(&mut self, group: SharedGroup) {
        self.groups.push(group);
    }

    pub fn group(&self, name: &str) -> Option<SharedGroup> {
        self.groups
            .iter()
            .find(|g| g.borrow().name() == name)
            .cloned()
    }

    pub fn groups(&self) -> &[SharedGroup] {
        &self.groups
    }

    pub fn entity_count(&self) -> usize {
        self.groups.iter().map(|g| g.borrow().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn entity() -> Entity {
        Entity::new(
            Species::Kelp,
            Rc::new(Model::new("blade", vec![])),
            Transform::new(Vec3::ZERO, 0.0, 1.0),
        )
    }

    #[test]
    fn test_group_lookup_by_name() {
        let mut scene = Scene::new();
        scene.add(Group::shared("kelp"));
        scene.add(Group::shared("sharks"));

        assert!(scene.group("sharks").is_some());
        assert!(scene.group("whales").is_none());
    }

    #[test]
    fn test_group_is_shared_with_scene() {
        let mut scene = Scene::new();
        let group = Group::shared("kelp");
        scene.add(group.clone());

        assert_eq!(scene.entity_count(), 0);
        group.borrow_mut().push(entity());
        group.borrow_mut().push(entity());

        assert_eq!(scene.group("kelp").unwrap().borrow().len(), 2);
        assert_eq!(scene.entity_count(), 2);
    }

    #[test]
    fn test_entity_with_orbit() {
        let orbit = Orbit {
            center: Vec3::new(0.0, 20.0, 0.0),
            radius: 10.0,
            height: 20.0,
            angular_speed: 1.0,
            clockwise: true,
        };
        let e = entity().with_orbit(orbit);
        assert_eq!(e.orbit, Some(orbit));
    }
}
