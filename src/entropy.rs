//! Shannon entropy over a trailing symbol window.
//!
//! Purely informational: the original system used this to label an "emergent
//! goal" from the recent symbol stream. It never feeds back into the grid.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::alphabet::Symbol;

/// Shannon entropy in bits over the last `min(window_size, len)` elements.
///
/// Returns `0.0` for an empty window or a zero window size (the defined
/// limit; never NaN). Bounded above by `log2` of the number of distinct
/// symbols present in the window.
#[must_use]
pub fn windowed_entropy(sequence: &[Symbol], window_size: usize) -> f64 {
    if sequence.is_empty() || window_size == 0 {
        return 0.0;
    }
    let start = sequence.len().saturating_sub(window_size);
    let window = &sequence[start..];
    let mut freq: HashMap<Symbol, usize> = HashMap::new();
    for &symbol in window {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    let total = window.len() as f64;
    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum();
    -entropy
}

/// Capped trailing log of emitted symbols.
///
/// Pushing beyond capacity drops the oldest entries, mirroring the original's
/// `slice(-n)` memory windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolStream {
    symbols: Vec<Symbol>,
    capacity: usize,
}

impl SymbolStream {
    /// Creates a stream keeping at most `capacity` symbols (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            symbols: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Appends a symbol, evicting the oldest when full.
    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
        if self.symbols.len() > self.capacity {
            let excess = self.symbols.len() - self.capacity;
            self.symbols.drain(..excess);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Retained symbols, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Entropy of the most recent `window_size` retained symbols.
    #[must_use]
    pub fn entropy(&self, window_size: usize) -> f64 {
        windowed_entropy(&self.symbols, window_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    #[test]
    fn test_stream_caps_at_capacity() {
        let mut stream = SymbolStream::new(5);
        for _ in 0..3 {
            stream.push(Alphabet::DEAD);
        }
        for _ in 0..5 {
            stream.push(Alphabet::ALIVE);
        }
        assert_eq!(stream.len(), 5);
        assert!(stream.as_slice().iter().all(|&s| s == Alphabet::ALIVE));
        assert_eq!(stream.entropy(5), 0.0);
    }

    #[test]
    fn test_zero_capacity_clamps_to_one() {
        let mut stream = SymbolStream::new(0);
        stream.push(Alphabet::DEAD);
        stream.push(Alphabet::ALIVE);
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.as_slice(), &[Alphabet::ALIVE]);
    }
}
