use itertools::Itertools;
use ndarray::Array2;

use crate::board::Board;
use crate::error::BoardError;
use crate::location::Location;
use crate::tile::Tile;

/// A validated assembly path for [`Board`]s.
///
/// Place a tile on every cell and supply a free tile, then call
/// [`build`](Self::build). Builders mutate themselves while building but can
/// be [`Clone`]d to save their state at some point.
///
/// Placements outside the requested grid put the builder into an invalid
/// state; the first such problem is reported by `build`, which also rejects
/// even or undersized grids and any cell left empty.
#[derive(Clone)]
pub struct BoardBuilder {
    side_length: usize,
    cells: Array2<Option<Tile>>,
    free_tile: Option<Tile>,
    invalid: Option<BoardError>,
}

impl BoardBuilder {
    /// Start an empty builder for a `side_length` × `side_length` board.
    ///
    /// The side length is not validated here; an even or undersized value is
    /// reported by [`build`](Self::build).
    pub fn with_side_length(side_length: usize) -> Self {
        Self {
            side_length,
            cells: Array2::from_shape_simple_fn((side_length, side_length), || None),
            free_tile: None,
            invalid: None,
        }
    }

    /// Place `tile` at `location`, replacing any previous placement there.
    ///
    /// Invalidates the builder if `location` is outside the grid. If the
    /// builder is already invalid, this function does nothing.
    pub fn tile(&mut self, location: Location, tile: Tile) -> &mut Self {
        if self.invalid.is_some() {
            return self;
        }

        match self.cells.get_mut(location.as_index()) {
            Some(cell) => *cell = Some(tile),
            None => self.invalid = Some(BoardError::OutOfBounds(location)),
        }

        self
    }

    /// Place tiles cell by cell in row-major order, stopping when `tiles`
    /// runs out; any cells not reached stay empty.
    pub fn tiles<I: IntoIterator<Item = Tile>>(&mut self, tiles: I) -> &mut Self {
        let locations = (0..self.side_length)
            .cartesian_product(0..self.side_length)
            .collect_vec();
        for ((row, column), tile) in locations.into_iter().zip(tiles) {
            self.tile(Location(row, column), tile);
        }

        self
    }

    /// Supply the spare tile held off the board.
    pub fn free_tile(&mut self, tile: Tile) -> &mut Self {
        if self.invalid.is_some() {
            return self;
        }

        self.free_tile = Some(tile);
        self
    }

    /// Convert the state of this builder into a [`Board`], running the full
    /// initial connectivity sweep.
    pub fn build(&self) -> Result<Board, BoardError> {
        if let Some(reason) = self.invalid {
            return Err(reason);
        }

        if self.side_length < 3 || self.side_length % 2 == 0 {
            return Err(BoardError::SideLength(self.side_length));
        }

        for (index, cell) in self.cells.indexed_iter() {
            if cell.is_none() {
                return Err(BoardError::MissingTile(Location::from(index)));
            }
        }

        let free_tile = self.free_tile.ok_or(BoardError::MissingFreeTile)?;
        // unwrap is fine: every cell was just checked
        let cells = self.cells.map(|cell| cell.unwrap());

        Ok(Board::from_cells(cells, free_tile))
    }
}
