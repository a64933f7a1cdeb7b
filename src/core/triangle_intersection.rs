use glam::Vec3;

/// Result of a ray/triangle test
#[derive(Debug, Clone, Copy)]
pub struct TriangleIntersection {
    pub t: f32,       // Distance along ray
    pub u: f32,       // Barycentric weight of v1
    pub v: f32,       // Barycentric weight of v2
    pub normal: Vec3, // Geometric normal (counter-clockwise winding)
}

impl TriangleIntersection {
    /// Get barycentric coordinates (u, v, w) where w = 1 - u - v
    pub fn barycentric(&self) -> (f32, f32, f32) {
        (self.u, self.v, 1.0 - self.u - self.v)
    }

    /// World-space hit point for the ray that produced this intersection
    pub fn point(&self, ray_origin: Vec3, ray_dir: Vec3) -> Vec3 {
        ray_origin + ray_dir * self.t
    }
}

/// Möller-Trumbore ray-triangle intersection. Double sided.
pub fn moller_trumbore_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<TriangleIntersection> {
    const EPSILON: f32 = 1e-7;
    // Barycentric slack so rays through shared edges hit at least one neighbour
    const EDGE_SLACK: f32 = 1e-5;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray_origin - v0;
    let u = f * s.dot(h);
    if !(-EDGE_SLACK..=1.0 + EDGE_SLACK).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);
    if v < -EDGE_SLACK || u + v > 1.0 + EDGE_SLACK {
        return None;
    }

    let t = f * edge2.dot(q);

    // Intersection behind origin
    if t < EPSILON {
        return None;
    }

    let normal = edge1.cross(edge2).normalize();

    Some(TriangleIntersection { t, u, v, normal })
}

/// Closest hit across a set of triangles, with the index of the triangle hit
pub fn nearest_intersection<I>(
    ray_origin: Vec3,
    ray_dir: Vec3,
    triangles: I,
) -> Option<(usize, TriangleIntersection)>
where
    I: IntoIterator<Item = (usize, [Vec3; 3])>,
{
    let mut closest: Option<(usize, TriangleIntersection)> = None;

    for (idx, [v0, v1, v2]) in triangles {
        if let Some(hit) = moller_trumbore_intersect(ray_origin, ray_dir, v0, v1, v2) {
            if closest.map_or(true, |(_, best)| hit.t < best.t) {
                closest = Some((idx, hit));
            }
        }
    }

    closest
}
