// snapshot.rs - JSON dump of the scene state for inspection
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::animation::Orbit;
use crate::frame::FrameInfo;
use crate::types::{Species, Transform};
use crate::world::World;

#[derive(Debug, Clone, Serialize)]
pub struct OrbitSnapshot {
    pub center: [f32; 3],
    pub radius: f32,
    pub height: f32,
    pub angular_speed: f32,
    pub clockwise: bool,
}

impl From<&Orbit> for OrbitSnapshot {
    fn from(orbit: &Orbit) -> Self {
        Self {
            center: orbit.center.to_array(),
            radius: orbit.radius,
            height: orbit.height,
            angular_speed: orbit.angular_speed,
            clockwise: orbit.clockwise,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntitySnapshot {
    pub species: Species,
    pub position: [f32; 3],
    pub yaw: f32,
    pub tilt: f32,
    pub scale: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit: Option<OrbitSnapshot>,
}

impl EntitySnapshot {
    fn new(species: Species, transform: &Transform, orbit: Option<&Orbit>) -> Self {
        Self {
            species,
            position: transform.position.to_array(),
            yaw: transform.yaw(),
            tilt: transform.tilt(),
            scale: transform.scale,
            orbit: orbit.map(OrbitSnapshot::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupSnapshot {
    pub name: String,
    pub entities: Vec<EntitySnapshot>,
}

/// Point-in-time copy of every group plus the shared animation state
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub captured_at: DateTime<Utc>,
    pub frame: u64,
    pub elapsed: f64,
    pub accumulator: f64,
    pub cockpit_visible: bool,
    pub groups: Vec<GroupSnapshot>,
}

impl SceneSnapshot {
    pub fn capture(world: &World, frame: &FrameInfo) -> Self {
        let groups = world
            .scene
            .groups()
            .iter()
            .map(|group| {
                let group = group.borrow();
                GroupSnapshot {
                    name: group.name().to_string(),
                    entities: group
                        .entities()
                        .iter()
                        .map(|e| EntitySnapshot::new(e.species, &e.transform, e.orbit.as_ref()))
                        .collect(),
                }
            })
            .collect();

        Self {
            captured_at: Utc::now(),
            frame: frame.number,
            elapsed: frame.time,
            accumulator: world.angle.angle(),
            cockpit_visible: world.overlay.is_visible(),
            groups,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.groups.iter().map(|g| g.entities.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scene snapshot")
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot to {:?}", path))?;
        log::info!("Snapshot of {} entities written to {:?}", self.entity_count(), path);
        Ok(())
    }
}
