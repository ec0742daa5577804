use std::fmt::{Display, Formatter};
use std::num::NonZero;

use strum::VariantArray;

/// The shape of a tile, which fixes how many of its sides are open.
///
/// Straight and turn tiles open two sides, junction tiles three.
/// Rotation only relabels which compass side each opening faces; it never
/// changes the count.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TileKind {
    /// Two openings on opposite sides.
    Straight,
    /// Two openings on perpendicular sides.
    Turn,
    /// Three openings.
    Junction,
}

/// One of the four compass sides of a tile, in the board frame.
///
/// Rows grow downward and columns grow rightward, so [`Down`](Side::Down) and
/// [`Right`](Side::Right) step toward higher indices.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Side {
    /// Toward lower row indices.
    Up,
    /// Toward higher row indices.
    Down,
    /// Toward lower column indices.
    Left,
    /// Toward higher column indices.
    Right,
}

impl Side {
    /// The forward sides: stepping along one of these reaches a cell indexed
    /// higher in row-major order. Sweeping only these visits each adjacent
    /// pair exactly once.
    pub(crate) const FORWARD: &'static [Self] = &[Self::Down, Self::Right];

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The `(row, column)` delta of one step toward this side.
    pub(crate) fn offset(&self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// A quarter-turn direction for [`Tile::rotate`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rotation {
    /// A quarter turn clockwise.
    Clockwise,
    /// A quarter turn counter-clockwise.
    CounterClockwise,
}

/// A collectible marker carried by a tile. Opaque to the engine; only its
/// identity matters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Item(pub NonZero<u8>);

impl Item {
    /// Wrap a nonzero item number.
    pub fn new(id: u8) -> Option<Self> {
        NonZero::new(id).map(Self)
    }
}

/// A single board cell's tile: a kind, four open-or-closed sides, and an
/// optional collectible marker.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Tile {
    kind: TileKind,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    item: Option<Item>,
}

impl Tile {
    /// Create a tile of the given kind in its reference orientation:
    /// straight opens up and down, turn opens down and left, junction opens
    /// up, down, and left.
    pub fn new(kind: TileKind) -> Self {
        let (up, down, left, right) = match kind {
            TileKind::Straight => (true, true, false, false),
            TileKind::Turn => (false, true, true, false),
            TileKind::Junction => (true, true, true, false),
        };

        Self { kind, up, down, left, right, item: None }
    }

    /// Create a tile of the given kind carrying `item`.
    pub fn with_item(kind: TileKind, item: Item) -> Self {
        Self { item: Some(item), ..Self::new(kind) }
    }

    /// This tile's kind.
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// This tile's collectible marker, if any.
    pub fn item(&self) -> Option<Item> {
        self.item
    }

    /// Whether a path exits this tile on `side`.
    pub fn is_open(&self, side: Side) -> bool {
        match side {
            Side::Up => self.up,
            Side::Down => self.down,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Rotate the openings one quarter turn in place.
    pub fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Clockwise => self.rotate_cw(),
            Rotation::CounterClockwise => self.rotate_ccw(),
        }
    }

    fn rotate_cw(&mut self) {
        let tmp = self.up;
        self.up = self.left;
        self.left = self.down;
        self.down = self.right;
        self.right = tmp;
    }

    fn rotate_ccw(&mut self) {
        let tmp = self.up;
        self.up = self.right;
        self.right = self.down;
        self.down = self.left;
        self.left = tmp;
    }

    /// Whether this tile connects to `other` through `side`, where `side` is
    /// the side of `self` facing `other`. True iff both facing openings are
    /// set, so the predicate is symmetric under side inversion.
    pub fn is_connected(&self, other: &Tile, side: Side) -> bool {
        self.is_open(side) && other.is_open(side.invert())
    }

    /// The number of open sides; fixed by the kind and invariant under
    /// rotation.
    pub fn open_side_count(&self) -> usize {
        Side::VARIANTS.iter().filter(|side| self.is_open(**side)).count()
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match (self.up, self.down, self.left, self.right) {
            (true, true, false, false) => '│',
            (false, false, true, true) => '─',
            (false, true, true, false) => '┐',
            (false, true, false, true) => '┌',
            (true, false, true, false) => '┘',
            (true, false, false, true) => '└',
            (true, true, true, false) => '┤',
            (true, true, false, true) => '├',
            (false, true, true, true) => '┬',
            (true, false, true, true) => '┴',
            // unreachable for tiles built through new(); placeholder only
            _ => '·',
        })
    }
}
