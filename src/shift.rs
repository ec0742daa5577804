use std::fmt::{Display, Formatter};

use crate::location::Location;
use crate::tile::Side;

/// Whether a shift moves a row or a column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Move a row; tiles travel left or right.
    Horizontal,
    /// Move a column; tiles travel up or down.
    Vertical,
}

/// Which way the tiles travel along the shifted line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Toward higher indices.
    Positive,
    /// Toward lower indices.
    Negative,
}

/// One board move: slide the full row or column at `index` one cell along
/// `direction`, pushing the free tile in at the trailing border and expelling
/// the leading border tile into the free slot.
///
/// Only odd indices are shiftable; even lines run through fixed anchor tiles.
/// Validity is checked by [`Board::shift_tiles`](crate::Board::shift_tiles).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Shift {
    /// Row or column move.
    pub orientation: Orientation,
    /// Travel direction along the line.
    pub direction: Direction,
    /// The fixed row or column index of the moved line.
    pub index: usize,
}

impl Shift {
    /// Assemble a shift descriptor.
    pub fn new(orientation: Orientation, direction: Direction, index: usize) -> Self {
        Self { orientation, direction, index }
    }

    /// The same line shifted the opposite way. Applying a shift and then its
    /// inverse restores both the board and the free tile.
    pub fn inverted(&self) -> Self {
        Self {
            direction: match self.direction {
                Direction::Positive => Direction::Negative,
                Direction::Negative => Direction::Positive,
            },
            ..*self
        }
    }

    /// The side tiles on the line travel toward.
    pub(crate) fn travel_side(&self) -> Side {
        match (self.orientation, self.direction) {
            (Orientation::Horizontal, Direction::Positive) => Side::Right,
            (Orientation::Horizontal, Direction::Negative) => Side::Left,
            (Orientation::Vertical, Direction::Positive) => Side::Down,
            (Orientation::Vertical, Direction::Negative) => Side::Up,
        }
    }

    /// The two sides perpendicular to the line.
    pub(crate) fn orthogonal_sides(&self) -> [Side; 2] {
        match self.orientation {
            Orientation::Horizontal => [Side::Up, Side::Down],
            Orientation::Vertical => [Side::Left, Side::Right],
        }
    }

    /// The border cell the line vacates, which receives the free tile: the
    /// low-index end for a positive shift, the high-index end for a negative
    /// one.
    pub(crate) fn insert_location(&self, side_length: usize) -> Location {
        let along = match self.direction {
            Direction::Positive => 0,
            Direction::Negative => side_length - 1,
        };

        match self.orientation {
            Orientation::Horizontal => Location(self.index, along),
            Orientation::Vertical => Location(along, self.index),
        }
    }

    /// The border cell the line runs off of, whose tile becomes the new free
    /// tile; always the end opposite [`insert_location`](Self::insert_location).
    pub(crate) fn remove_location(&self, side_length: usize) -> Location {
        self.inverted().insert_location(side_length)
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "orientation:{:?}, direction:{:?}, line:{}",
            self.orientation, self.direction, self.index
        )
    }
}
