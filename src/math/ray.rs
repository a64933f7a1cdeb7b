use glam::Vec3;

/// Slab test. Returns the entry distance along the ray, or the exit distance
/// when the origin is inside the box, or `None` when the box is missed.
/// Box faces count as inside, so rays grazing an edge still hit.
pub fn ray_aabb(origin: Vec3, dir: Vec3, box_min: Vec3, box_max: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let (o, d) = (origin[axis], dir[axis]);
        let (lo, hi) = (box_min[axis], box_max[axis]);

        // Axis-parallel: either always inside this slab or never
        if d.abs() < EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let t0 = (lo - o) / d;
        let t1 = (hi - o) / d;
        t_near = t_near.max(t0.min(t1));
        t_far = t_far.min(t0.max(t1));
    }

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    Some(if t_near < 0.0 { t_far } else { t_near })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_aabb_hit_from_above() {
        let t = ray_aabb(
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::NEG_Y,
            Vec3::new(-100.0, -2.0, -100.0),
            Vec3::new(100.0, 8.0, 100.0),
        );
        assert!((t.unwrap() - 92.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_aabb_flat_box() {
        // Zero-height boxes are what flat terrains produce
        let t = ray_aabb(
            Vec3::new(3.0, 10.0, -3.0),
            Vec3::NEG_Y,
            Vec3::new(-10.0, 5.0, -10.0),
            Vec3::new(10.0, 5.0, 10.0),
        );
        assert!((t.unwrap() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_aabb_miss() {
        let t = ray_aabb(
            Vec3::new(200.0, 100.0, 0.0),
            Vec3::NEG_Y,
            Vec3::new(-100.0, 0.0, -100.0),
            Vec3::new(100.0, 8.0, 100.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_aabb_on_box_edge() {
        let t = ray_aabb(
            Vec3::new(10.0, 10.0, -10.0),
            Vec3::NEG_Y,
            Vec3::new(-10.0, 0.0, -10.0),
            Vec3::new(10.0, 5.0, 10.0),
        );
        assert!((t.unwrap() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_aabb_pointing_away() {
        let t = ray_aabb(
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::Y,
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        assert!(t.is_none());
    }
}
