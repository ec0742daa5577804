//! Presentation-side derivation of a tile's render orientation.
//!
//! The engine never consumes this; it exists for rendering code, which needs
//! to know how far to turn a tile model from its reference orientation. The
//! result is a pure function of the tile's open-side set, so any consumer
//! reproduces the same facing from the same tile state.

use crate::tile::{Side, Tile, TileKind};

/// A render rotation about the vertical axis, relative to the tile kind's
/// reference orientation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RenderRotation {
    /// No turn.
    Deg0,
    /// A quarter turn clockwise.
    Deg90,
    /// A half turn.
    Deg180,
    /// A quarter turn counter-clockwise.
    DegNeg90,
}

impl RenderRotation {
    /// The rotation in degrees, in `{0, 90, 180, -90}`.
    pub fn degrees(&self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::DegNeg90 => -90,
        }
    }
}

/// Derive the render rotation for `tile` from its open sides.
pub fn render_rotation(tile: &Tile) -> RenderRotation {
    match tile.kind() {
        TileKind::Straight => straight_rotation(tile),
        TileKind::Turn => turn_rotation(tile),
        TileKind::Junction => junction_rotation(tile),
    }
}

fn straight_rotation(tile: &Tile) -> RenderRotation {
    if tile.is_open(Side::Up) {
        RenderRotation::Deg0
    } else {
        RenderRotation::Deg90
    }
}

fn turn_rotation(tile: &Tile) -> RenderRotation {
    match (tile.is_open(Side::Down), tile.is_open(Side::Left)) {
        (true, true) => RenderRotation::Deg0,
        (true, false) => RenderRotation::DegNeg90,
        (false, true) => RenderRotation::Deg90,
        (false, false) => RenderRotation::Deg180,
    }
}

fn junction_rotation(tile: &Tile) -> RenderRotation {
    // a junction closes exactly one side; that side picks the facing
    if !tile.is_open(Side::Right) {
        RenderRotation::Deg0
    } else if !tile.is_open(Side::Left) {
        RenderRotation::Deg180
    } else if !tile.is_open(Side::Up) {
        RenderRotation::DegNeg90
    } else {
        RenderRotation::Deg90
    }
}
