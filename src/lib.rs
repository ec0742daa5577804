#![warn(missing_docs)]

//! # `meander`
//!
//! A board and connectivity engine for shifting-tile labyrinth games in the style of the classic board game.
//! The board is an odd-sized square grid of rotatable tiles, each opening onto some of its four sides, plus one spare "free" tile held off the board.
//! Begin by assembling a board with a [`BoardBuilder`], or let [`generator`] deal a random classic 7×7 board.
//! Then rotate the free tile, push it into an odd-indexed row or column with [`Board::shift_tiles`], and ask whether one cell can reach another with [`Board::is_reachable`].
//!
//! # Internals
//! The board is an undirected graph over grid cells: two adjacent cells are joined exactly when their facing tile sides are both open.
//! Rather than a general-purpose graph structure, each cell keeps a small set of its currently live sides, so an undirected edge is the same side recorded from both ends.
//! A full connectivity sweep happens once, at construction.
//! A shift only ever invalidates the edges touching the moved line, so the engine tears those down, slides the tiles (exchanging one border tile with the free tile), and re-tests connectivity locally.
//! Reachability is a plain breadth-first search over the live side sets; all edges are unit weight, so this is equivalent to a shortest-path query.

pub use board::Board;
pub use builder::BoardBuilder;
pub use error::BoardError;
pub use location::Location;
pub use shift::{Direction, Orientation, Shift};
pub use tile::{Item, Rotation, Side, Tile, TileKind};

pub(crate) mod board;
mod tests;
pub(crate) mod builder;
pub(crate) mod error;
pub mod facing;
pub mod generator;
pub(crate) mod location;
pub(crate) mod shift;
pub(crate) mod tile;
pub(crate) mod vertex;
