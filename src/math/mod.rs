mod aabb;
mod grid;
mod ray;

pub use aabb::AABB;
pub use grid::{cell_of, CellCoord};
pub use ray::ray_aabb;
