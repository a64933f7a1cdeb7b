use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::math::AABB;

/// Placeable entity kinds, one reference model each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Kelp,
    Shark,
    Treasure,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Kelp, Species::Shark, Species::Treasure];

    /// Asset name, also the folder and file stem under the asset directory
    pub fn name(self) -> &'static str {
        match self {
            Species::Kelp => "kelp",
            Species::Shark => "shark",
            Species::Treasure => "treasure",
        }
    }

    /// Name of the scene group holding this species
    pub fn group_name(self) -> &'static str {
        match self {
            Species::Kelp => "kelp",
            Species::Shark => "sharks",
            Species::Treasure => "treasure",
        }
    }

    /// Stable id written into instance records
    pub fn id(self) -> u32 {
        match self {
            Species::Kelp => 0,
            Species::Shark => 1,
            Species::Treasure => 2,
        }
    }
}

/// Reference geometry shared by every instance of a species
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub triangles: Vec<[Vec3; 3]>,
    pub bounds: AABB,
}

impl Model {
    /// Build a model from triangles. Empty meshes get a degenerate box at the origin.
    pub fn new(name: impl Into<String>, triangles: Vec<[Vec3; 3]>) -> Self {
        let bounds = AABB::from_points(triangles.iter().flatten().copied())
            .unwrap_or(AABB::new(Vec3::ZERO, Vec3::ZERO));
        Self {
            name: name.into(),
            triangles,
            bounds,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Position, Euler rotation and uniform scale of one entity.
/// `rotation.x` is the tilt written by sway, `rotation.y` the yaw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, yaw: f32, scale: f32) -> Self {
        Self {
            position,
            rotation: Vec3::new(0.0, yaw, 0.0),
            scale,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    pub fn tilt(&self) -> f32 {
        self.rotation.x
    }

    /// Local-to-world matrix, rotations applied in XYZ order
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, self.position)
    }
}

/// Per-instance record for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub species: u32,
    pub _pad: [u32; 3],
}

impl InstanceRaw {
    pub fn new(transform: &Transform, species: Species) -> Self {
        Self {
            model: transform.matrix().to_cols_array_2d(),
            species: species.id(),
            _pad: [0; 3],
        }
    }
}
