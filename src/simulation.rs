//! Imperative shell around the pure engine.
//!
//! Owns the current grid and replaces it wholesale on every tick; partial
//! grids are never visible to callers. The host drives `tick` at whatever
//! wall-clock interval it likes — there is no timer in here.

use std::time::Instant;

use crate::alphabet::{Alphabet, Symbol};
use crate::config::{EvolutionMode, SimConfig};
use crate::engine::{dominant, GridEngine};
use crate::entropy::SymbolStream;
use crate::grid::Grid;
use crate::metrics::Metrics;

/// A running grid simulation: engine, current grid, entropy gauge, metrics.
pub struct Simulation {
    config: SimConfig,
    engine: GridEngine,
    grid: Grid,
    stream: SymbolStream,
    entropy_history: Vec<(u64, f64)>,
    metrics: Metrics,
}

impl Simulation {
    /// Seeds a new simulation from configuration.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or an empty alphabet.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        let alphabet = match config.grid.mode {
            EvolutionMode::Life => Alphabet::binary(),
            EvolutionMode::Majority => config.grid.alphabet()?,
        };
        let mut engine = GridEngine::new(alphabet, config.grid.neighborhood, config.grid.seed);
        let grid = match config.grid.mode {
            EvolutionMode::Life => {
                engine.seed_life(config.grid.width, config.grid.height, config.grid.life_fill)?
            }
            EvolutionMode::Majority => engine.seed(config.grid.width, config.grid.height)?,
        };
        let stream = SymbolStream::new(config.gauge.stream_capacity);
        Ok(Self {
            config,
            engine,
            grid,
            stream,
            entropy_history: Vec::new(),
            metrics: Metrics::new(),
        })
    }

    /// The current grid. Always a complete, consistent value.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Entropy of the recent modal-symbol stream.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        self.stream.entropy(self.config.gauge.window)
    }

    /// Per-tick entropy readings, oldest first, capped by configuration.
    #[must_use]
    pub fn entropy_history(&self) -> &[(u64, f64)] {
        &self.entropy_history
    }

    /// Advances the simulation one tick and returns the new grid.
    pub fn tick(&mut self) -> &Grid {
        let started = Instant::now();
        let next = match self.config.grid.mode {
            EvolutionMode::Majority => self.engine.step(&self.grid),
            EvolutionMode::Life => self.engine.step_life(&self.grid),
        };
        let changed = self
            .grid
            .cells()
            .iter()
            .zip(next.cells())
            .filter(|(before, after)| before.symbol != after.symbol)
            .count();

        // Whole-value swap; callers never observe a half-stepped grid.
        self.grid = next;

        if let Some(modal) = dominant(self.grid.cells().iter().map(|c| c.symbol)) {
            self.stream.push(modal);
        }
        let entropy = self.entropy();
        let tick = self.metrics.tick_count() + 1;
        self.entropy_history.push((tick, entropy));
        if self.entropy_history.len() > self.config.gauge.history_capacity {
            let excess = self.entropy_history.len() - self.config.gauge.history_capacity;
            self.entropy_history.drain(..excess);
        }
        self.metrics.record_tick(started.elapsed(), changed, entropy);
        tracing::debug!(tick = tick, changed = changed, entropy = entropy, "tick");
        &self.grid
    }

    /// Re-seeds the grid from an explicit `(x, y, symbol)` pattern, e.g.
    /// accumulated external history, keeping dimensions and rule.
    pub fn reseed_with_overlay(&mut self, overlay: &[(u16, u16, Symbol)]) -> anyhow::Result<()> {
        self.grid = self.engine.seed_with_overlay(
            self.config.grid.width,
            self.config.grid.height,
            overlay,
        )?;
        Ok(())
    }
}
