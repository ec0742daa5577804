use thiserror::Error;

use crate::location::Location;

/// Reasons a board operation may be rejected.
///
/// Every operation validates before mutating anything, so a returned error
/// always leaves the board, free tile, and connectivity untouched.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum BoardError {
    /// The requested side length is even or smaller than the minimum board.
    #[error("board side length {0} must be odd and at least 3")]
    SideLength(usize),
    /// A cell was left without a tile at build time.
    #[error("no tile provided for cell {0:?}")]
    MissingTile(Location),
    /// No free tile was provided at build time.
    #[error("no free tile provided")]
    MissingFreeTile,
    /// A shift named an even or out-of-range line index.
    #[error("line {0} is not shiftable; only odd in-range indices move")]
    ShiftIndex(usize),
    /// A coordinate fell outside the board.
    #[error("cell {0:?} is outside the board")]
    OutOfBounds(Location),
}
