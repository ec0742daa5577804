use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::location::Location;
use crate::tile::{Side, Tile};

/// One graph node: a grid coordinate, the tile currently sitting there, and
/// the set of sides carrying a live edge.
///
/// Vertices are created once per coordinate at construction and never move;
/// shifts only reassign `tile` and rewrite `links`. An undirected edge
/// between neighbors is the same side recorded from both ends, which keeps
/// edge storage local and sidesteps any need for canonical endpoint ordering.
#[derive(Clone, Debug)]
pub(crate) struct Vertex {
    pub(crate) location: Location,
    pub(crate) tile: Tile,
    pub(crate) links: HashSet<Side>,
}

impl Vertex {
    pub(crate) fn new(location: Location, tile: Tile) -> Self {
        Self {
            location,
            tile,
            links: HashSet::with_capacity(4),
        }
    }

    /// Whether `other` is exactly one grid step away and the two tiles'
    /// facing sides are both open. Convenience adjacency test; the board
    /// engine computes sides directly during edge maintenance.
    pub(crate) fn is_connected(&self, other: &Vertex) -> bool {
        let row_diff = other.location.0 as isize - self.location.0 as isize;
        let column_diff = other.location.1 as isize - self.location.1 as isize;

        let side = match (row_diff, column_diff) {
            (-1, 0) => Side::Up,
            (1, 0) => Side::Down,
            (0, -1) => Side::Left,
            (0, 1) => Side::Right,
            _ => return false,
        };

        self.tile.is_connected(&other.tile, side)
    }
}

// identity is the coordinate alone; the occupying tile is irrelevant

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.location.cmp(&other.location)
    }
}
