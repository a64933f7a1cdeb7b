use std::rc::Rc;

use anyhow::Result;
use futures::future::{self, FutureExt, LocalBoxFuture};
use glam::Vec3;

use super::ModelSource;
use crate::types::{Model, Species};

/// Placeholder meshes for running without an asset directory
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralModelSource;

impl ModelSource for ProceduralModelSource {
    fn load(&self, species: Species) -> LocalBoxFuture<'static, Result<Rc<Model>>> {
        let model = match species {
            Species::Kelp => kelp_blade(),
            Species::Shark => shark_body(),
            Species::Treasure => treasure_chest(),
        };
        future::ready(Ok(Rc::new(model))).boxed_local()
    }
}

/// Single upright quad, unit height, rooted at the origin
pub fn kelp_blade() -> Model {
    let (w, h) = (0.08, 1.0);
    let p0 = Vec3::new(-w, 0.0, 0.0);
    let p1 = Vec3::new(w, 0.0, 0.0);
    let p2 = Vec3::new(w, h, 0.0);
    let p3 = Vec3::new(-w, h, 0.0);
    Model::new("kelp", vec![[p0, p1, p2], [p0, p2, p3]])
}

/// Square pyramid stretched along +x, nose forward
pub fn shark_body() -> Model {
    let nose = Vec3::new(4.0, 0.0, 0.0);
    let base = [
        Vec3::new(-2.0, -0.5, -0.6),
        Vec3::new(-2.0, -0.5, 0.6),
        Vec3::new(-2.0, 0.7, 0.6),
        Vec3::new(-2.0, 0.7, -0.6),
    ];

    let mut triangles: Vec<[Vec3; 3]> = (0..4)
        .map(|i| [base[i], base[(i + 1) % 4], nose])
        .collect();
    triangles.push([base[0], base[2], base[1]]);
    triangles.push([base[0], base[3], base[2]]);

    Model::new("shark", triangles)
}

/// Axis-aligned box resting on the origin
pub fn treasure_chest() -> Model {
    let min = Vec3::new(-1.5, 0.0, -1.0);
    let max = Vec3::new(1.5, 1.8, 1.0);
    let corner = |i: usize| {
        Vec3::new(
            if i & 1 == 0 { min.x } else { max.x },
            if i & 2 == 0 { min.y } else { max.y },
            if i & 4 == 0 { min.z } else { max.z },
        )
    };

    // Two triangles per face, corners indexed by their (x, y, z) bits
    const FACES: [[usize; 4]; 6] = [
        [0, 2, 3, 1],
        [4, 5, 7, 6],
        [0, 1, 5, 4],
        [2, 6, 7, 3],
        [0, 4, 6, 2],
        [1, 3, 7, 5],
    ];

    let triangles = FACES
        .iter()
        .flat_map(|&[a, b, c, d]| {
            [
                [corner(a), corner(b), corner(c)],
                [corner(a), corner(c), corner(d)],
            ]
        })
        .collect();

    Model::new("treasure", triangles)
}
