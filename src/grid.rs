//! The grid value: a rectangular (or single-row) array of symbol cells.
//!
//! Grids are plain immutable-by-convention values. The engine never mutates a
//! grid it was handed; each tick produces a fresh grid and the caller swaps
//! whole values. Row-major storage, no wraparound at the edges.

use serde::{Deserialize, Serialize};

use crate::alphabet::Symbol;

/// One grid cell: its current symbol and how many consecutive ticks the
/// symbol has survived unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub symbol: Symbol,
    pub age: u32,
}

/// Which neighbors participate in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Neighborhood {
    /// Up to 8 adjacent cells (horizontal, vertical, diagonal).
    #[default]
    Moore,
    /// Left and right only; the 1-D double-helix variant.
    Line,
}

/// Neighbor offsets in row-major scan order. Tie-breaking in the majority
/// rule depends on this order staying fixed.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
const LINE_OFFSETS: [(i32, i32); 2] = [(-1, 0), (1, 0)];

/// Rectangular grid of [`Cell`]s with fixed dimensions.
///
/// The zero-area grid (`Grid::default()`) is a valid value; stepping it is a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn from_cells(width: u16, height: u16, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    /// Cell at (x, y), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Row-major view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % self.width as usize) as u16;
            let y = (i / self.width as usize) as u16;
            (x, y, cell)
        })
    }

    /// In-bounds neighbors of (x, y) in fixed row-major scan order.
    ///
    /// Out-of-bounds positions are simply absent; there is no wraparound, so
    /// a corner cell of a Moore grid yields exactly 3 neighbors.
    pub fn neighbors(
        &self,
        x: u16,
        y: u16,
        neighborhood: Neighborhood,
    ) -> impl Iterator<Item = &Cell> + '_ {
        let offsets: &'static [(i32, i32)] = match neighborhood {
            Neighborhood::Moore => &MOORE_OFFSETS,
            Neighborhood::Line => &LINE_OFFSETS,
        };
        offsets.iter().filter_map(move |&(dx, dy)| {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx >= 0 && nx < self.width as i32 && ny >= 0 && ny < self.height as i32 {
                Some(&self.cells[self.index(nx as u16, ny as u16)])
            } else {
                None
            }
        })
    }

    /// Stamps an explicit `(x, y, symbol)` pattern onto the grid, resetting
    /// the age of touched cells. Out-of-bounds entries are skipped.
    pub fn apply_overlay(&mut self, overlay: &[(u16, u16, Symbol)]) {
        for &(x, y, symbol) in overlay {
            if x < self.width && y < self.height {
                let idx = self.index(x, y);
                self.cells[idx] = Cell { symbol, age: 0 };
            }
        }
    }
}
