//! Tick metrics and structured logging for simulation runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for a running simulation.
pub struct Metrics {
    tick_count: AtomicU64,
    changed_cells: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            changed_cells: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration, the number of cells whose
    /// symbol changed, and the current entropy reading.
    pub fn record_tick(&self, duration: Duration, changed: usize, entropy: f64) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.changed_cells.store(changed as u64, Ordering::Relaxed);

        // Log at info level every 100 ticks
        if tick % 100 == 0 {
            tracing::info!(
                tick = tick,
                changed = changed,
                entropy = entropy,
                duration_us = duration.as_micros() as u64,
                "Grid tick"
            );
        }
    }

    /// Ticks completed so far.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Cells whose symbol changed on the most recent tick.
    #[must_use]
    pub fn changed_cells(&self) -> u64 {
        self.changed_cells.load(Ordering::Relaxed)
    }

    /// Elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
