//! Data-driven sparse cellular automata.
//!
//! States, their colors and their transition rules come from a definition
//! file; the engine steps a sparse grid of named-state cells one synchronous
//! generation at a time. Rendering and input stay outside: a host paints
//! cells through [`Automaton::set_cell`], drives [`Automaton::step`] on a
//! timer, and iterates live cells with [`Automaton::for_each_live_cell`].

mod catalog;
mod definition;
mod engine;
mod error;
mod grid;
mod rule;


use std::path::Path;

pub use crate::{
    catalog::{Catalog, Rgba, StateDef, StateId},
    definition::{DEFAULT_STATE, Definition, LIVE_STATE},
    engine::Neighborhood,
    error::{DefinitionError, UnknownState},
    grid::{CellSize, Coord, Grid, View},
    rule::{Comparison, Rule},
};

/// A running automaton: the immutable definition plus the current cell grid.
#[derive(Clone, Debug)]
pub struct Automaton {
    definition: Definition,
    cell_size: CellSize,
    grid: Grid,
}

impl Automaton {
    /// Loads a definition file and starts with an empty grid. `cell_size` is
    /// `(height, width)` of one cell in world units; stored coordinates are
    /// multiples of it on both axes.
    pub fn load(path: impl AsRef<Path>, cell_size: CellSize) -> Result<Self, DefinitionError> {
        Ok(Self::new(Definition::load(path)?, cell_size))
    }

    pub fn new(definition: Definition, cell_size: CellSize) -> Self {
        Self {
            definition,
            cell_size,
            grid: Grid::default(),
        }
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State names in definition order; stable across runs, so a host's state
    /// picker always lists them the same way.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.definition.catalog.names()
    }

    /// Paints `pos` with the named state. A fully transparent state erases
    /// the cell instead, which is how the default state gets painted.
    pub fn set_cell(&mut self, pos: Coord, state: &str) -> Result<(), UnknownState> {
        let catalog = &self.definition.catalog;
        let id = catalog.resolve(state)?;
        if catalog.state(id).color.is_transparent() {
            self.grid.remove(pos);
        } else {
            self.grid.insert(pos, id);
        }
        Ok(())
    }

    /// The state name at `pos`; absent coordinates hold the default state.
    pub fn cell(&self, pos: Coord) -> &str {
        let catalog = &self.definition.catalog;
        let id = self.grid.get(pos).unwrap_or(catalog.default_state());
        &catalog.state(id).name
    }

    /// The grid cell under a screen pixel, given the renderer's view
    /// transform. Pure coordinate math; no automaton state is touched.
    pub fn cell_at_pixel(&self, view: View, pixel: (f64, f64), screen: (f64, f64)) -> Coord {
        grid::snap(view.world(pixel, screen), self.cell_size)
    }

    /// Advances one generation. The new grid replaces the old one only once
    /// it is fully computed, so readers never see a partial generation.
    pub fn step(&mut self) {
        self.grid = engine::step(
            &self.grid,
            &self.definition.catalog,
            self.definition.neighborhood,
            self.cell_size,
        );
    }

    /// Visits every stored cell that passes the caller's visibility test,
    /// handing the visitor what a renderer needs: position, state name, color.
    pub fn for_each_live_cell(
        &self,
        mut visible: impl FnMut(Coord) -> bool,
        mut visit: impl FnMut(Coord, &str, Rgba),
    ) {
        for (pos, id) in self.grid.iter() {
            if !visible(pos) {
                continue;
            }
            let state = self.definition.catalog.state(id);
            visit(pos, &state.name, state.color);
        }
    }
}
