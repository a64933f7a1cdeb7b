pub mod gltf;
pub mod procedural;
pub mod terrain;

use std::rc::Rc;

use anyhow::Result;
use futures::future::LocalBoxFuture;

use crate::types::{Model, Species};

pub use self::gltf::{load_gltf_model, GltfModelSource};
pub use procedural::ProceduralModelSource;
pub use terrain::{load_terrain_descriptor, load_terrain_or_flat};

/// Asynchronous provider of reference geometry.
/// Every call is an independent load; nothing is cached.
pub trait ModelSource {
    fn load(&self, species: Species) -> LocalBoxFuture<'static, Result<Rc<Model>>>;
}
