//! Grid evolution: uniform seeding plus the two step rules.
//!
//! The majority rule makes every cell adopt the most frequent symbol among
//! its in-bounds neighbors; the binary rule is strict Conway Game of Life.
//! Both produce a fresh [`Grid`] each tick and never touch the input.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::alphabet::{Alphabet, Symbol};
use crate::error::{GridError, Result};
use crate::grid::{Cell, Grid, Neighborhood};

/// Evolution engine for one alphabet/neighborhood configuration.
///
/// Holds the only RNG in the system. Seeding consumes randomness; stepping
/// consumes it only for the degenerate zero-neighbor case (a 1×1 grid), so
/// for any larger grid `step` is a pure function of its input.
#[derive(Debug, Clone)]
pub struct GridEngine {
    alphabet: Alphabet,
    neighborhood: Neighborhood,
    rng: ChaCha8Rng,
}

impl GridEngine {
    /// Creates an engine. `seed` pins the RNG for reproducible runs; `None`
    /// draws a fresh seed from OS entropy.
    #[must_use]
    pub fn new(alphabet: Alphabet, neighborhood: Neighborhood, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            alphabet,
            neighborhood,
            rng,
        }
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Seeds a grid with every cell drawn independently and uniformly from
    /// the alphabet, age 0.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] when either dimension is 0.
    pub fn seed(&mut self, width: u16, height: u16) -> Result<Grid> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let area = width as usize * height as usize;
        let cells = (0..area)
            .map(|_| Cell {
                symbol: self.alphabet.sample(&mut self.rng),
                age: 0,
            })
            .collect();
        Ok(Grid::from_cells(width, height, cells))
    }

    /// Seeds a grid, then stamps an explicit `(x, y, symbol)` pattern on top.
    /// Used when re-seeding from accumulated external history instead of
    /// pure randomness.
    pub fn seed_with_overlay(
        &mut self,
        width: u16,
        height: u16,
        overlay: &[(u16, u16, Symbol)],
    ) -> Result<Grid> {
        let mut grid = self.seed(width, height)?;
        grid.apply_overlay(overlay);
        Ok(grid)
    }

    /// Seeds a binary-mode grid where each cell is alive with probability
    /// `fill` (clamped to [0, 1]) and dead otherwise.
    pub fn seed_life(&mut self, width: u16, height: u16, fill: f64) -> Result<Grid> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let fill = fill.clamp(0.0, 1.0);
        let area = width as usize * height as usize;
        let cells = (0..area)
            .map(|_| Cell {
                symbol: if self.rng.gen_bool(fill) {
                    Alphabet::ALIVE
                } else {
                    Alphabet::DEAD
                },
                age: 0,
            })
            .collect();
        Ok(Grid::from_cells(width, height, cells))
    }

    /// One majority-rule tick.
    ///
    /// Each cell adopts the symbol with the strictly highest count among its
    /// neighbors; ties go to the symbol encountered first in the fixed
    /// row-major neighbor scan. A cell with zero neighbors draws a fresh
    /// symbol from the alphabet. Age increments when the symbol is retained
    /// and resets to 0 when it changes.
    pub fn step(&mut self, grid: &Grid) -> Grid {
        if grid.is_empty() {
            return grid.clone();
        }
        let (width, height) = grid.dimensions();
        let mut cells = Vec::with_capacity(grid.len());
        for y in 0..height {
            for x in 0..width {
                let cell = &grid.cells()[y as usize * width as usize + x as usize];
                let symbols = grid.neighbors(x, y, self.neighborhood).map(|n| n.symbol);
                let next_symbol = match dominant(symbols) {
                    Some(symbol) => symbol,
                    None => self.alphabet.sample(&mut self.rng),
                };
                let age = if next_symbol == cell.symbol {
                    cell.age + 1
                } else {
                    0
                };
                cells.push(Cell {
                    symbol: next_symbol,
                    age,
                });
            }
        }
        Grid::from_cells(width, height, cells)
    }

    /// One strict Game-of-Life tick over the binary alphabet.
    ///
    /// Alive survives on 2 or 3 live Moore neighbors; dead births on exactly
    /// 3; everything else dies. Age follows the same retained/changed rule as
    /// the majority mode.
    pub fn step_life(&self, grid: &Grid) -> Grid {
        if grid.is_empty() {
            return grid.clone();
        }
        let (width, height) = grid.dimensions();
        let mut cells = Vec::with_capacity(grid.len());
        for y in 0..height {
            for x in 0..width {
                let cell = &grid.cells()[y as usize * width as usize + x as usize];
                let live = grid
                    .neighbors(x, y, Neighborhood::Moore)
                    .filter(|n| n.symbol == Alphabet::ALIVE)
                    .count();
                let alive_now = cell.symbol == Alphabet::ALIVE;
                let next_symbol = if matches!((alive_now, live), (true, 2 | 3) | (false, 3)) {
                    Alphabet::ALIVE
                } else {
                    Alphabet::DEAD
                };
                let age = if next_symbol == cell.symbol {
                    cell.age + 1
                } else {
                    0
                };
                cells.push(Cell {
                    symbol: next_symbol,
                    age,
                });
            }
        }
        Grid::from_cells(width, height, cells)
    }
}

/// Symbol with the strictly highest count, ties broken by first-seen order.
///
/// Counting preserves the order symbols first appear in, so for identical
/// neighbor-order input the winner is always the same. `None` for an empty
/// neighbor set.
pub(crate) fn dominant<I>(symbols: I) -> Option<Symbol>
where
    I: IntoIterator<Item = Symbol>,
{
    let mut counts: Vec<(Symbol, u32)> = Vec::with_capacity(8);
    for symbol in symbols {
        match counts.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, count)) => *count += 1,
            None => counts.push((symbol, 1)),
        }
    }
    let mut best: Option<(Symbol, u32)> = None;
    for (symbol, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((symbol, count)),
        }
    }
    best.map(|(symbol, _)| symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_prefers_strict_majority() {
        let alphabet = Alphabet::mnality();
        let a = alphabet.symbol_of('Ω').unwrap();
        let b = alphabet.symbol_of('∅').unwrap();
        assert_eq!(dominant([b, a, a]), Some(a));
    }

    #[test]
    fn test_dominant_tie_goes_to_first_seen() {
        let alphabet = Alphabet::mnality();
        let a = alphabet.symbol_of('Ω').unwrap();
        let b = alphabet.symbol_of('∅').unwrap();
        assert_eq!(dominant([b, a, b, a]), Some(b));
        assert_eq!(dominant([a, b, a, b]), Some(a));
    }

    #[test]
    fn test_dominant_of_nothing_is_none() {
        assert_eq!(dominant(std::iter::empty::<Symbol>()), None);
    }

    #[test]
    fn test_seed_rejects_zero_dimensions() {
        let mut engine = GridEngine::new(Alphabet::mnality(), Neighborhood::Moore, Some(1));
        assert_eq!(
            engine.seed(0, 5),
            Err(GridError::InvalidDimension {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            engine.seed(5, 0),
            Err(GridError::InvalidDimension {
                width: 5,
                height: 0
            })
        );
    }

    #[test]
    fn test_step_on_zero_area_grid_is_noop() {
        let mut engine = GridEngine::new(Alphabet::mnality(), Neighborhood::Moore, Some(1));
        let empty = Grid::default();
        assert_eq!(engine.step(&empty), empty);
        assert_eq!(engine.step_life(&empty), empty);
    }

    #[test]
    fn test_one_by_one_grid_redraws_deterministically() {
        let mut a = GridEngine::new(Alphabet::mnality(), Neighborhood::Moore, Some(42));
        let mut b = GridEngine::new(Alphabet::mnality(), Neighborhood::Moore, Some(42));
        let grid_a = a.seed(1, 1).unwrap();
        let grid_b = b.seed(1, 1).unwrap();
        assert_eq!(a.step(&grid_a), b.step(&grid_b));
    }
}
