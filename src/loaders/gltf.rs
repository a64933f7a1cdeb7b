use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use futures::future::{FutureExt, LocalBoxFuture};
use glam::{Mat4, Vec3};

use super::ModelSource;
use crate::types::{Model, Species};

/// Loads a glTF file and flattens all of its meshes into one triangle list
pub fn load_gltf_model(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    log::debug!("Loading glTF model: {:?}", path);

    let (gltf, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    let mut triangles = Vec::new();

    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut triangles)?;
        }
    }

    if triangles.is_empty() {
        log::warn!("No geometry found in glTF file {:?}", path);
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());

    log::debug!("Extracted {} triangles from {:?}", triangles.len(), path);
    Ok(Model::new(name, triangles))
}

/// Recursively processes glTF nodes, accumulating transforms
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    triangles: &mut Vec<[Vec3; 3]>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, triangles)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, triangles)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    triangles: &mut Vec<[Vec3; 3]>,
) -> Result<()> {
    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions = reader
            .read_positions()
            .context("Mesh primitive has no positions")?;

        let vertices: Vec<Vec3> = positions
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
            .collect();

        if vertices.is_empty() {
            continue;
        }

        match reader.read_indices() {
            Some(indices) => {
                let indices: Vec<u32> = indices.into_u32().collect();
                for tri in indices.chunks_exact(3) {
                    let corner = |i: u32| {
                        vertices
                            .get(i as usize)
                            .copied()
                            .with_context(|| format!("Index {} out of range", i))
                    };
                    triangles.push([corner(tri[0])?, corner(tri[1])?, corner(tri[2])?]);
                }
            }
            // No indices - plain triangle list
            None => {
                for tri in vertices.chunks_exact(3) {
                    triangles.push([tri[0], tri[1], tri[2]]);
                }
            }
        }
    }

    Ok(())
}

/// Reads `<asset_dir>/<species>/<species>.gltf`
#[derive(Debug, Clone)]
pub struct GltfModelSource {
    asset_dir: PathBuf,
}

impl GltfModelSource {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }

    pub fn path_for(&self, species: Species) -> PathBuf {
        self.asset_dir
            .join(species.name())
            .join(format!("{}.gltf", species.name()))
    }
}

impl ModelSource for GltfModelSource {
    fn load(&self, species: Species) -> LocalBoxFuture<'static, Result<Rc<Model>>> {
        let path = self.path_for(species);
        async move { load_gltf_model(&path).map(Rc::new) }.boxed_local()
    }
}
