use glam::Vec2;

/// Column/row of a cell in a horizontal grid
pub type CellCoord = (i32, i32);

/// Maps a horizontal position to the grid cell containing it.
/// The result is unclamped; callers decide how to treat cells outside the grid.
pub fn cell_of(pos: Vec2, origin: Vec2, cell_size: Vec2) -> CellCoord {
    let rel = (pos - origin) / cell_size;
    (rel.x.floor() as i32, rel.y.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_of_origin() {
        let cell = cell_of(Vec2::ZERO, Vec2::ZERO, Vec2::splat(16.0));
        assert_eq!(cell, (0, 0));
    }

    #[test]
    fn test_cell_of_non_square_cells() {
        let cell = cell_of(Vec2::new(25.0, 25.0), Vec2::ZERO, Vec2::new(10.0, 5.0));
        assert_eq!(cell, (2, 5));
    }

    #[test]
    fn test_cell_of_negative() {
        let cell = cell_of(Vec2::new(-100.0, 99.9), Vec2::splat(-100.0), Vec2::splat(100.0));
        assert_eq!(cell, (0, 1));

        let outside = cell_of(Vec2::new(-101.0, 0.0), Vec2::splat(-100.0), Vec2::splat(100.0));
        assert_eq!(outside, (-1, 1));
    }
}
