pub mod animation;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod loaders;
pub mod math;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod snapshot;
pub mod terrain;
pub mod types;
pub mod world;

pub use scene::{Entity, Group, Scene, SharedGroup};
pub use terrain::{Terrain, TerrainDescriptor};
pub use world::World;
