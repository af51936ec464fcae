//! # Glyphgrid
//!
//! A symbolic cellular-automaton grid engine with majority-rule evolution,
//! age-weighted decay, and a windowed Shannon-entropy gauge.
//!
//! This crate is the computational core of a family of display widgets: a
//! typed grid of glyph cells evolved by neighbor majority vote (or strict
//! Game of Life in binary mode), plus the entropy-over-a-trailing-window
//! calculation those widgets chart. Rendering, timers, and everything else
//! presentational live with the caller.
//!
//! ## Design
//!
//! - **Functional core**: [`GridEngine::step`] is a pure function from grid
//!   to grid; nothing is mutated in place and the output never aliases the
//!   input. The caller owns "the current grid" and swaps whole values.
//! - **Injected randomness**: the only RNG is a seedable `ChaCha8Rng` inside
//!   the engine, consumed at seed time and for the degenerate zero-neighbor
//!   case, so runs are reproducible from a `u64` seed.
//! - **Closed alphabets**: cells hold [`Symbol`] indices into a fixed
//!   [`Alphabet`], not bare strings, so the state space is checked at
//!   construction time.
//!
//! ## Example
//!
//! ```
//! use glyphgrid::{Alphabet, GridEngine, Neighborhood};
//!
//! let mut engine = GridEngine::new(Alphabet::mnality(), Neighborhood::Moore, Some(42));
//! let grid = engine.seed(15, 15)?;
//! let next = engine.step(&grid);
//! assert_eq!(next.dimensions(), grid.dimensions());
//! # Ok::<(), glyphgrid::GridError>(())
//! ```

/// Symbol alphabets and index-backed symbols
pub mod alphabet;
/// Configuration structures mapping to `glyphgrid.toml`
pub mod config;
/// Seeding and the majority-rule / Game-of-Life step functions
pub mod engine;
/// Windowed Shannon entropy and the trailing symbol stream
pub mod entropy;
/// Error types for grid construction
pub mod error;
/// The grid value and neighborhood queries
pub mod grid;
/// Tick metrics and logging setup
pub mod metrics;
/// Imperative shell owning the current grid across ticks
pub mod simulation;

pub use alphabet::{Alphabet, Symbol};
pub use config::{EvolutionMode, GaugeConfig, GridConfig, SimConfig};
pub use engine::GridEngine;
pub use entropy::{windowed_entropy, SymbolStream};
pub use error::{GridError, Result};
pub use grid::{Cell, Grid, Neighborhood};
pub use metrics::{init_logging, Metrics};
pub use simulation::Simulation;
