// terrain.rs - Heightfield seabed and surface queries
use anyhow::{bail, Result};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::nearest_intersection;
use crate::math::{cell_of, ray_aabb, AABB};

/// Height grid as stored on disk: `dimx` columns by `dimz` rows,
/// one altitude per vertex, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainDescriptor {
    #[serde(rename = "dimx")]
    pub width: usize,
    #[serde(rename = "dimz")]
    pub depth: usize,
    pub altitudes: Vec<f32>,
}

impl TerrainDescriptor {
    pub fn flat(width: usize, depth: usize, height: f32) -> Self {
        Self {
            width,
            depth,
            altitudes: vec![height; width * depth],
        }
    }

    /// Gentle rolling sand, used when no descriptor file is given
    pub fn dunes(width: usize, depth: usize) -> Self {
        let altitudes = (0..depth)
            .flat_map(|row| {
                (0..width).map(move |col| {
                    let (c, r) = (col as f32, row as f32);
                    3.0 * (c * 0.21).sin() * (r * 0.17).cos() + 1.5 * (c * 0.05 + r * 0.08).sin()
                })
            })
            .collect();
        Self {
            width,
            depth,
            altitudes,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.depth < 2 {
            bail!(
                "terrain grid must be at least 2x2 samples, got {}x{}",
                self.width,
                self.depth
            );
        }
        if self.altitudes.len() != self.width * self.depth {
            bail!(
                "terrain has {} altitudes but a {}x{} grid needs {}",
                self.altitudes.len(),
                self.width,
                self.depth,
                self.width * self.depth
            );
        }
        if let Some(bad) = self.altitudes.iter().position(|a| !a.is_finite()) {
            bail!("terrain altitude {} is not finite", bad);
        }
        Ok(())
    }
}

/// Static triangle mesh over a square centered on the origin.
/// Columns run along +x, rows along +z, each cell split into two triangles.
#[derive(Debug, Clone)]
pub struct Terrain {
    width: usize,
    depth: usize,
    size: f32,
    vertices: Vec<Vec3>,
    cell_size: Vec2,
    bounds: AABB,
}

impl Terrain {
    pub fn new(descriptor: &TerrainDescriptor, size: f32) -> Result<Self> {
        descriptor.validate()?;
        if !(size > 0.0) {
            bail!("terrain size must be positive, got {}", size);
        }

        let (width, depth) = (descriptor.width, descriptor.depth);
        let half = size * 0.5;
        let cell_size = Vec2::new(size / (width - 1) as f32, size / (depth - 1) as f32);

        let vertices: Vec<Vec3> = descriptor
            .altitudes
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let (col, row) = (i % width, i / width);
                Vec3::new(
                    -half + col as f32 * cell_size.x,
                    y,
                    -half + row as f32 * cell_size.y,
                )
            })
            .collect();

        let bounds = AABB::from_points(vertices.iter().copied())
            .unwrap_or(AABB::new(Vec3::ZERO, Vec3::ZERO));

        log::debug!(
            "Terrain built: {}x{} samples, {} triangles, heights {:.2}..{:.2}",
            width,
            depth,
            (width - 1) * (depth - 1) * 2,
            bounds.min.y,
            bounds.max.y
        );

        Ok(Self {
            width,
            depth,
            size,
            vertices,
            cell_size,
            bounds,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn half_size(&self) -> f32 {
        self.size * 0.5
    }

    pub fn bounds(&self) -> AABB {
        self.bounds
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        (self.width - 1) * (self.depth - 1) * 2
    }

    fn vertex(&self, col: usize, row: usize) -> Vec3 {
        self.vertices[row * self.width + col]
    }

    /// The two triangles of cell (col, row), with their global indices
    fn cell_triangles(&self, col: usize, row: usize) -> [(usize, [Vec3; 3]); 2] {
        let a = self.vertex(col, row);
        let b = self.vertex(col, row + 1);
        let c = self.vertex(col + 1, row + 1);
        let d = self.vertex(col + 1, row);
        let base = (row * (self.width - 1) + col) * 2;
        [(base, [a, b, d]), (base + 1, [b, c, d])]
    }

    /// Every triangle of the mesh
    pub fn triangles(&self) -> impl Iterator<Item = (usize, [Vec3; 3])> + '_ {
        (0..self.depth - 1).flat_map(move |row| {
            (0..self.width - 1).flat_map(move |col| self.cell_triangles(col, row))
        })
    }

    /// Nearest surface hit for an arbitrary ray
    pub fn raycast(&self, origin: Vec3, dir: Vec3) -> Option<Vec3> {
        ray_aabb(origin, dir, self.bounds.min, self.bounds.max)?;
        nearest_intersection(origin, dir, self.triangles()).map(|(_, hit)| hit.point(origin, dir))
    }

    /// First surface point below (x, from_height, z) along a straight-down ray.
    /// Only the cell under the ray and its neighbours are tested.
    pub fn cast_down(&self, x: f32, z: f32, from_height: f32) -> Option<Vec3> {
        if !self.bounds.contains_xz(x, z) || from_height < self.bounds.min.y {
            return None;
        }
        let origin = Vec3::new(x, from_height, z);

        let (col, row) = cell_of(
            Vec2::new(x, z),
            Vec2::splat(-self.half_size()),
            self.cell_size,
        );

        let max_col = (self.width - 2) as i32;
        let max_row = (self.depth - 2) as i32;
        let cols = (col - 1).clamp(0, max_col)..=(col + 1).clamp(0, max_col);
        let rows = (row - 1).clamp(0, max_row)..=(row + 1).clamp(0, max_row);

        let candidates = rows.flat_map(|r| {
            cols.clone()
                .flat_map(move |c| self.cell_triangles(c as usize, r as usize))
        });

        nearest_intersection(origin, Vec3::NEG_Y, candidates)
            .map(|(_, hit)| hit.point(origin, Vec3::NEG_Y))
    }

    /// Surface height at a horizontal location, `None` outside the terrain
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        self.cast_down(x, z, self.bounds.max.y + 1.0).map(|p| p.y)
    }
}
