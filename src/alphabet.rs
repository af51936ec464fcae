//! Symbol alphabets for grid cells.
//!
//! An [`Alphabet`] is an ordered, finite set of distinct glyph tokens. Cells
//! never store the glyph itself; they store a [`Symbol`], an index into the
//! alphabet, so equality is an integer compare and the set of legal states is
//! closed at construction time.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Index-backed handle to one token of an [`Alphabet`].
///
/// Symbols are only meaningful relative to the alphabet that produced them;
/// comparing symbols from different alphabets compares indices, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(u16);

impl Symbol {
    /// Position of this symbol in its alphabet's enumeration order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered set of distinct glyph tokens a cell may hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    tokens: Vec<char>,
}

impl Alphabet {
    /// The dead state of the binary alphabet.
    pub const DEAD: Symbol = Symbol(0);
    /// The alive state of the binary alphabet.
    pub const ALIVE: Symbol = Symbol(1);

    /// Builds an alphabet from tokens, deduplicating while preserving
    /// first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyAlphabet`] when no tokens remain.
    pub fn new<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut distinct: Vec<char> = Vec::new();
        for token in tokens {
            if !distinct.contains(&token) {
                distinct.push(token);
            }
        }
        if distinct.is_empty() {
            return Err(GridError::EmptyAlphabet);
        }
        debug_assert!(distinct.len() <= u16::MAX as usize);
        Ok(Self { tokens: distinct })
    }

    /// The two-token {dead, alive} alphabet used by the Game-of-Life mode.
    #[must_use]
    pub fn binary() -> Self {
        Self {
            tokens: vec!['·', '█'],
        }
    }

    /// The five mnality core glyphs the original simulation shipped with.
    #[must_use]
    pub fn mnality() -> Self {
        Self {
            tokens: vec!['Ω', '∅', '𝐩', '∀', 'Ξ'],
        }
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// An alphabet is never empty once constructed; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Glyph token behind a symbol. The symbol must come from this alphabet.
    #[must_use]
    pub fn token(&self, symbol: Symbol) -> char {
        self.tokens[symbol.index()]
    }

    /// Looks up the symbol for a glyph token, if present.
    #[must_use]
    pub fn symbol_of(&self, token: char) -> Option<Symbol> {
        self.tokens
            .iter()
            .position(|&t| t == token)
            .map(|i| Symbol(i as u16))
    }

    /// All symbols in stable enumeration order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.tokens.len()).map(|i| Symbol(i as u16))
    }

    /// Draws one symbol uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        Symbol(rng.gen_range(0..self.tokens.len() as u16))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::mnality()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_alphabet_rejected() {
        assert_eq!(Alphabet::new([]), Err(GridError::EmptyAlphabet));
    }

    #[test]
    fn test_duplicates_collapse_in_first_seen_order() {
        let alphabet = Alphabet::new("abcabca".chars()).unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.token(alphabet.symbol_of('a').unwrap()), 'a');
        assert_eq!(alphabet.symbol_of('a').unwrap().index(), 0);
        assert_eq!(alphabet.symbol_of('c').unwrap().index(), 2);
    }

    #[test]
    fn test_binary_constants_line_up() {
        let binary = Alphabet::binary();
        assert_eq!(binary.len(), 2);
        assert_eq!(Alphabet::DEAD.index(), 0);
        assert_eq!(Alphabet::ALIVE.index(), 1);
    }

    #[test]
    fn test_sample_stays_in_range() {
        let alphabet = Alphabet::mnality();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let symbol = alphabet.sample(&mut rng);
            assert!(symbol.index() < alphabet.len());
        }
    }
}
