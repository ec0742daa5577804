use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use std::mem;

use itertools::Itertools;
use ndarray::Array2;
use tracing::{debug, trace};

use crate::error::BoardError;
use crate::location::Location;
use crate::shift::Shift;
use crate::tile::{Item, Rotation, Side, Tile};
use crate::vertex::Vertex;

/// The labyrinth board: an odd-sized square grid of tiles, one free tile held
/// off the board, and the connectivity graph over the grid.
///
/// The graph is kept live at all times: between any two operations, a side is
/// linked on a vertex exactly when the neighbor in that direction exists and
/// the two tiles' facing openings are both set. Construction performs the one
/// full connectivity sweep; every [`shift_tiles`](Self::shift_tiles) afterward
/// repairs only the moved line.
///
/// Build with a [`BoardBuilder`](crate::BoardBuilder).
#[derive(Debug)]
pub struct Board {
    vertices: Array2<Vertex>,
    free_tile: Tile,
    side_length: usize,
}

impl Board {
    /// Assemble a board from a fully validated cell grid. Called by the
    /// builder once every precondition holds.
    pub(crate) fn from_cells(cells: Array2<Tile>, free_tile: Tile) -> Self {
        let side_length = cells.nrows();
        let vertices =
            Array2::from_shape_fn(cells.raw_dim(), |index| Vertex::new(Location::from(index), cells[index]));

        let mut board = Self { vertices, free_tile, side_length };
        board.initialize_edges();
        board
    }

    /// The board's side length N.
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// A copy of the spare tile currently held off the board.
    pub fn free_tile(&self) -> Tile {
        self.free_tile
    }

    /// Rotate the free tile a quarter turn. It has no grid position, so the
    /// graph is untouched.
    pub fn rotate_free_tile(&mut self, rotation: Rotation) {
        self.free_tile.rotate(rotation);
    }

    /// The collectible marker on the tile at `location`, if any.
    pub fn tile_item(&self, location: Location) -> Result<Option<Item>, BoardError> {
        self.vertices
            .get(location.as_index())
            .map(|vertex| vertex.tile.item())
            .ok_or(BoardError::OutOfBounds(location))
    }

    /// A deep snapshot of the tile grid and the free tile, fully independent
    /// of the live board.
    pub fn tiles(&self) -> (Array2<Tile>, Tile) {
        (self.vertices.map(|vertex| vertex.tile), self.free_tile)
    }

    /// Slide the line named by `shift` one cell, exchanging one border tile
    /// with the free tile, and repair the connectivity graph around the moved
    /// line.
    ///
    /// Rejects even or out-of-range line indices with
    /// [`ShiftIndex`](BoardError::ShiftIndex) before touching any state; even
    /// lines run through fixed anchor tiles, which never move.
    pub fn shift_tiles(&mut self, shift: Shift) -> Result<(), BoardError> {
        if shift.index >= self.side_length || shift.index % 2 == 0 {
            return Err(BoardError::ShiftIndex(shift.index));
        }

        debug!(%shift, "shifting tiles");

        // every tile on the line is about to move, so all of its edges are
        // stale, including those into the adjacent lines
        let line = self.line_locations(shift);
        for &location in &line {
            self.clear_links(location);
        }

        // walk from the removal end backward so no tile is overwritten
        // before it has been read
        let removed = self.vertices[shift.remove_location(self.side_length).as_index()].tile;
        for window in (0..self.side_length - 1).rev() {
            let tile = self.vertices[line[window].as_index()].tile;
            self.vertices[line[window + 1].as_index()].tile = tile;
        }
        let inserted = mem::replace(&mut self.free_tile, removed);
        self.vertices[shift.insert_location(self.side_length).as_index()].tile = inserted;

        // local rebuild: both orthogonal neighbors for every line vertex,
        // plus the in-line successor for all but the last in travel order
        let travel = shift.travel_side();
        for (position, &location) in line.iter().enumerate() {
            for side in shift.orthogonal_sides() {
                self.relink(location, side);
            }
            if position + 1 < self.side_length {
                self.relink(location, travel);
            }
        }

        Ok(())
    }

    /// Whether a path of mutually open tile sides joins `source` to `target`
    /// on the current board. A cell always reaches itself.
    pub fn is_reachable(&self, source: Location, target: Location) -> Result<bool, BoardError> {
        for location in [source, target] {
            if self.vertices.get(location.as_index()).is_none() {
                return Err(BoardError::OutOfBounds(location));
            }
        }

        if source == target {
            return Ok(true);
        }

        // breadth-first over live links; unit edge weights make this
        // equivalent to a shortest-path query
        let mut visited = Array2::from_elem(self.vertices.raw_dim(), false);
        visited[source.as_index()] = true;
        let mut frontier = VecDeque::from([source]);

        while let Some(location) = frontier.pop_front() {
            for &side in &self.vertices[location.as_index()].links {
                // a live link implies the neighbor is in range
                let neighbor = location.step(side);
                if neighbor == target {
                    return Ok(true);
                }
                if !visited[neighbor.as_index()] {
                    visited[neighbor.as_index()] = true;
                    frontier.push_back(neighbor);
                }
            }
        }

        Ok(false)
    }

    /// The neighboring location one step toward `side`, if it is on the board.
    fn neighbor(&self, location: Location, side: Side) -> Option<Location> {
        let stepped = location.step(side);
        self.vertices.get(stepped.as_index()).map(|_| stepped)
    }

    /// Record the edge between `location` and its neighbor toward `side` on
    /// both endpoints.
    fn link(&mut self, location: Location, side: Side) {
        let neighbor = location.step(side);
        self.vertices[location.as_index()].links.insert(side);
        self.vertices[neighbor.as_index()].links.insert(side.invert());
        trace!(?location, ?side, "edge added");
    }

    /// Drop the edge between `location` and its neighbor toward `side` from
    /// both endpoints.
    fn unlink(&mut self, location: Location, side: Side) {
        let neighbor = location.step(side);
        self.vertices[location.as_index()].links.remove(&side);
        self.vertices[neighbor.as_index()].links.remove(&side.invert());
    }

    /// Remove every edge incident to `location`.
    fn clear_links(&mut self, location: Location) {
        let sides = self.vertices[location.as_index()].links.iter().copied().collect_vec();
        for side in sides {
            self.unlink(location, side);
        }
    }

    /// Re-test the tile connectivity between `location` and its neighbor
    /// toward `side`, adding the edge if the facing openings match. Assumes
    /// any stale edge was already torn down.
    fn relink(&mut self, location: Location, side: Side) {
        let Some(neighbor) = self.neighbor(location, side) else {
            return;
        };

        if self.vertices[location.as_index()]
            .tile
            .is_connected(&self.vertices[neighbor.as_index()].tile, side)
        {
            self.link(location, side);
        }
    }

    /// The one-time full connectivity sweep. Checking only the forward sides
    /// visits each adjacent pair exactly once.
    fn initialize_edges(&mut self) {
        let locations = (0..self.side_length)
            .cartesian_product(0..self.side_length)
            .collect_vec();
        for (row, column) in locations {
            for &side in Side::FORWARD {
                self.relink(Location(row, column), side);
            }
        }
    }

    /// The cells of the shifted line in travel order, starting at the
    /// insertion border.
    fn line_locations(&self, shift: Shift) -> Vec<Location> {
        let travel = shift.travel_side();
        let mut locations = Vec::with_capacity(self.side_length);

        let mut location = shift.insert_location(self.side_length);
        for _ in 0..self.side_length {
            locations.push(location);
            location = location.step(travel);
        }

        locations
    }

    #[cfg(test)]
    pub(crate) fn vertex(&self, location: Location) -> &Vertex {
        &self.vertices[location.as_index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.vertices.rows() {
            for vertex in row {
                write!(f, "{}", vertex.tile)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "free tile: {}", self.free_tile)
    }
}
