use std::collections::HashSet;

use itertools::Itertools;
use log::debug;

use crate::{
    catalog::Catalog,
    grid::{CellSize, Coord, Grid},
    rule,
};

/// The shape of the offset set used when counting neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighborhood {
    /// The 8 offsets at Chebyshev distance 1.
    Moore,
    /// The 4 orthogonal unit offsets.
    VonNeumann,
}

impl Neighborhood {
    /// Integer code used in definition-file headers.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Moore),
            1 => Some(Self::VonNeumann),
            _ => None,
        }
    }

    /// Unit offsets, `(dy, dx)`. A definition's radius is recorded but does
    /// not widen this set; this is the extension point if it ever should.
    pub fn offsets(self) -> Vec<(isize, isize)> {
        match self {
            Self::Moore => (-1..=1)
                .cartesian_product(-1..=1)
                .filter(|&d| d != (0, 0))
                .collect(),
            Self::VonNeumann => vec![(-1, 0), (0, -1), (0, 1), (1, 0)],
        }
    }
}

/// Computes one full generation and returns the replacement store.
///
/// Read-only over its inputs: every rule evaluation sees the same input
/// snapshot, so the update is simultaneous across the whole grid. Stored cells
/// whose rules don't match keep their state; a default-state result removes
/// the coordinate, keeping the store sparse. Absent coordinates next to at
/// least one stored cell are boundary candidates, evaluated for birth against
/// the default state's rules.
pub fn step(grid: &Grid, catalog: &Catalog, neighborhood: Neighborhood, cell_size: CellSize) -> Grid {
    let offsets: Vec<Coord> = neighborhood
        .offsets()
        .into_iter()
        .map(|(dy, dx)| (dy * cell_size.0, dx * cell_size.1))
        .collect();
    let default = catalog.default_state();

    let mut next = grid.clone();
    let mut boundary = HashSet::new();
    for (pos, id) in grid.iter() {
        let mut live = 0;
        for &(dy, dx) in &offsets {
            let neighbor = (pos.0 + dy, pos.1 + dx);
            match grid.get(neighbor) {
                None => {
                    boundary.insert(neighbor);
                }
                Some(n) if catalog.state(n).counts_as_live => live += 1,
                Some(_) => (),
            }
        }
        if let Some(result) = rule::outcome(&catalog.state(id).rules, live) {
            if result == default {
                next.remove(pos);
            } else {
                next.insert(pos, result);
            }
        }
    }

    let birth_rules = &catalog.state(default).rules;
    let mut births = 0;
    for pos in boundary {
        let live = offsets
            .iter()
            .filter(|&&(dy, dx)| {
                grid.get((pos.0 + dy, pos.1 + dx))
                    .is_some_and(|id| catalog.state(id).counts_as_live)
            })
            .count() as isize;
        if let Some(result) = rule::outcome(birth_rules, live) {
            if result != default {
                next.insert(pos, result);
                births += 1;
            }
        }
    }
    debug!(
        "generation: {} -> {} cells ({births} born)",
        grid.len(),
        next.len()
    );
    next
}
