use ndarray::Ix;

use crate::tile::Side;

pub(crate) type Coord = usize;

/// A cell coordinate `(row, column)` on a board. The top left corner is `Location(0, 0)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// The location one step in the direction of `side`.
    ///
    /// Stepping off the low edge wraps to `usize::MAX`; callers bounds-check the result.
    pub(crate) fn step(self, side: Side) -> Self {
        self.offset_by(side.offset())
    }

    /// Whether this cell is a fixed anchor. Anchor tiles are placed at
    /// construction and never relocated by a shift.
    pub fn is_anchor(&self) -> bool {
        self.0 % 2 == 0 && self.1 % 2 == 0
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}
