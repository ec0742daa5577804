//! Random initial-state provider for the classic 7×7 game.
//!
//! Deals the traditional tile mix: fixed anchor tiles in their customary
//! orientations on every (even, even) cell, and a shuffled, randomly rotated
//! pool of 34 movable tiles spread over the remaining 33 cells plus the free
//! tile slot. Collectible items 1–12 sit on the non-corner anchors, 13–24 on
//! movable turn and junction tiles.

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::builder::BoardBuilder;
use crate::error::BoardError;
use crate::location::Location;
use crate::tile::{Item, Rotation, Side, Tile, TileKind};

/// The side length of the classic board.
pub const CLASSIC_SIDE_LENGTH: usize = 7;

const MOVABLE_STRAIGHT_COUNT: usize = 13;
const MOVABLE_TURN_COUNT: usize = 15;
const MOVABLE_JUNCTION_COUNT: usize = 6;
/// Items 13–18 go on movable turn tiles, 19–24 on movable junctions.
const FIRST_MOVABLE_ITEM: u8 = 13;
/// How many tiles of each itemed movable kind carry a collectible.
const ITEMED_TILES_PER_KIND: usize = 6;

/// The classic pool of movable tiles, unshuffled and unrotated: 13 straight,
/// 15 turn, and 6 junction tiles, the latter two kinds carrying items 13–24
/// on their first members.
pub fn movable_tile_pool() -> Vec<Tile> {
    let mut next_item = FIRST_MOVABLE_ITEM;
    let mut with_next_item = |kind| {
        // item numbers stay well inside u8 range
        let tile = Tile::with_item(kind, Item::new(next_item).unwrap());
        next_item += 1;
        tile
    };

    let mut pool = Vec::with_capacity(MOVABLE_STRAIGHT_COUNT + MOVABLE_TURN_COUNT + MOVABLE_JUNCTION_COUNT);
    pool.extend((0..MOVABLE_STRAIGHT_COUNT).map(|_| Tile::new(TileKind::Straight)));
    pool.extend((0..ITEMED_TILES_PER_KIND).map(|_| with_next_item(TileKind::Turn)));
    pool.extend((0..MOVABLE_TURN_COUNT - ITEMED_TILES_PER_KIND).map(|_| Tile::new(TileKind::Turn)));
    pool.extend((0..ITEMED_TILES_PER_KIND).map(|_| with_next_item(TileKind::Junction)));

    pool
}

/// Deal a random classic 7×7 board: anchors placed deterministically, the
/// movable pool shuffled and randomly rotated over the movable cells and the
/// free tile slot.
pub fn classic_board<R: Rng>(rng: &mut R) -> Result<Board, BoardError> {
    let side_length = CLASSIC_SIDE_LENGTH;

    let mut pool = movable_tile_pool();
    pool.shuffle(rng);
    for tile in &mut pool {
        for _ in 0..rng.gen_range(0..4) {
            tile.rotate(Rotation::Clockwise);
        }
    }

    let mut builder = BoardBuilder::with_side_length(side_length);
    let mut next_anchor_item = 1u8;
    let mut movable = pool.into_iter();

    for (row, column) in (0..side_length).cartesian_product(0..side_length).collect_vec() {
        let location = Location(row, column);
        if location.is_anchor() {
            let item = if is_corner(location, side_length) {
                None
            } else {
                let item = Item::new(next_anchor_item);
                next_anchor_item += 1;
                item
            };
            builder.tile(location, anchor_tile(location, side_length, item));
        } else {
            // the pool holds 34 tiles for 33 movable cells plus the free slot
            builder.tile(location, movable.next().unwrap());
        }
    }
    builder.free_tile(movable.next().unwrap());

    builder.build()
}

fn is_corner(location: Location, side_length: usize) -> bool {
    let Location(row, column) = location;
    (row == 0 || row == side_length - 1) && (column == 0 || column == side_length - 1)
}

/// The fixed tile for an anchor cell: corners are turns opening into the
/// board, all other anchors are junctions with their closed side toward the
/// nearest border (the vertical axis winning ties).
fn anchor_tile(location: Location, side_length: usize, item: Option<Item>) -> Tile {
    let Location(row, column) = location;
    let last = side_length - 1;

    if is_corner(location, side_length) {
        // quarter turns from the turn tile's reference {down, left} opening
        let turns = match (row == 0, column == 0) {
            (true, true) => 3,   // opens down and right
            (true, false) => 0,  // opens down and left
            (false, true) => 2,  // opens up and right
            (false, false) => 1, // opens up and left
        };
        return oriented(Tile::new(TileKind::Turn), turns);
    }

    let (vertical_closed, vertical_distance) = if row <= last - row {
        (Side::Up, row)
    } else {
        (Side::Down, last - row)
    };
    let (horizontal_closed, horizontal_distance) = if column <= last - column {
        (Side::Left, column)
    } else {
        (Side::Right, last - column)
    };
    let closed = if vertical_distance <= horizontal_distance {
        vertical_closed
    } else {
        horizontal_closed
    };

    // the junction's reference orientation closes its right side; each
    // clockwise turn walks the closed side right → down → left → up
    let turns = match closed {
        Side::Right => 0,
        Side::Down => 1,
        Side::Left => 2,
        Side::Up => 3,
    };

    let tile = match item {
        Some(item) => Tile::with_item(TileKind::Junction, item),
        None => Tile::new(TileKind::Junction),
    };
    oriented(tile, turns)
}

fn oriented(mut tile: Tile, clockwise_turns: usize) -> Tile {
    for _ in 0..clockwise_turns {
        tile.rotate(Rotation::Clockwise);
    }
    tile
}
