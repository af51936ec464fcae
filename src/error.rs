//! Error types for grid construction.
//!
//! Seeding is the only fallible operation in the crate; evolution itself is
//! total over valid grids (a zero-area grid is a value, not an error).

use thiserror::Error;

/// Main error type for glyphgrid operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions must both be positive at seed time.
    #[error("invalid grid dimension {width}x{height}: width and height must be positive")]
    InvalidDimension { width: u16, height: u16 },

    /// An alphabet needs at least one symbol to draw from.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
}

/// Result type alias for glyphgrid operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::InvalidDimension {
            width: 0,
            height: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid grid dimension 0x7: width and height must be positive"
        );
    }
}
