use std::collections::HashMap;

use crate::catalog::StateId;

/// A cell coordinate, `(y, x)`, always a multiple of the cell size per axis.
pub type Coord = (isize, isize);

/// Cell extent in world units, `(height, width)` to match the `(y, x)` axes.
pub type CellSize = (isize, isize);

/// Sparse cell store: only non-default cells are present. An absent coordinate
/// implicitly holds the catalog's default state.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Grid {
    cells: HashMap<Coord, StateId>,
}

impl Grid {
    pub fn get(&self, p: Coord) -> Option<StateId> {
        self.cells.get(&p).copied()
    }

    pub fn insert(&mut self, p: Coord, state: StateId) {
        self.cells.insert(p, state);
    }

    pub fn remove(&mut self, p: Coord) {
        self.cells.remove(&p);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, StateId)> {
        self.cells.iter().map(|(&p, &id)| (p, id))
    }
}

impl FromIterator<(Coord, StateId)> for Grid {
    fn from_iter<T: IntoIterator<Item = (Coord, StateId)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

// Floored modulus; `%` rounds toward zero for negative operands.
fn floor_mod(a: isize, b: isize) -> isize {
    ((a % b) + b) % b
}

/// Snaps a world position to the origin of the cell containing it. Works for
/// negative positions too, snapping toward negative infinity.
pub fn snap(world: (f64, f64), cell_size: CellSize) -> Coord {
    let (y, x) = (world.0.floor() as isize, world.1.floor() as isize);
    (y - floor_mod(y, cell_size.0), x - floor_mod(x, cell_size.1))
}

/// A renderer's view transform: where the screen center sits in the world and
/// how many world units one pixel covers.
#[derive(Clone, Copy, Debug)]
pub struct View {
    pub center: (f64, f64),
    pub scale: f64,
}

impl View {
    /// World position under a screen pixel, for a screen of the given size.
    pub fn world(&self, pixel: (f64, f64), screen: (f64, f64)) -> (f64, f64) {
        (
            self.center.0 + (pixel.0 - screen.0 / 2.0) * self.scale,
            self.center.1 + (pixel.1 - screen.1 / 2.0) * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap() {
        assert_eq!(snap((0.0, 0.0), (4, 4)), (0, 0));
        assert_eq!(snap((3.9, 5.0), (4, 4)), (0, 4));
        assert_eq!(snap((-0.5, -4.0), (4, 4)), (-4, -4));
        assert_eq!(snap((-4.1, 7.9), (4, 4)), (-8, 4));
    }

    #[test]
    fn test_snap_non_square() {
        // Height 2, width 4: the axes snap independently.
        assert_eq!(snap((3.0, 3.0), (2, 4)), (2, 0));
        assert_eq!(snap((-1.0, -1.0), (2, 4)), (-2, -4));
    }

    #[test]
    fn test_view_world() {
        let view = View {
            center: (10.0, -10.0),
            scale: 2.0,
        };
        // The screen center maps to the view center.
        assert_eq!(view.world((50.0, 50.0), (100.0, 100.0)), (10.0, -10.0));
        assert_eq!(view.world((0.0, 0.0), (100.0, 100.0)), (-90.0, -110.0));
    }

    #[test]
    fn test_store_roundtrip() {
        let mut grid = Grid::default();
        grid.insert((0, 4), StateId(1));
        assert_eq!(grid.get((0, 4)), Some(StateId(1)));
        assert_eq!(grid.get((4, 0)), None);
        grid.remove((0, 4));
        assert!(grid.is_empty());
    }
}
