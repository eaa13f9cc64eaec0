use crate::{others::Side, piece_kind::PieceKind};

/// One board position: what stands on it and where it is.
///
/// Coordinates are assigned once, when the board lays out its grid, and are never re-derived
/// afterwards. Occupants move between cells by copying (`copy_occupant_from` then `clear`), the
/// cells themselves never move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    kind: PieceKind,
    side: Side,
    x: u8,
    y: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl Cell {
    /// Raw constructor, no check that `kind == Empty` iff `side == NoSide`. Prefer
    /// [`Cell::empty`] and [`Cell::occupied`].
    #[inline(always)]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side, x: 0, y: 0 }
    }

    #[inline(always)]
    pub const fn empty() -> Self {
        Self::new(PieceKind::Empty, Side::NoSide)
    }

    /// A cell holding `kind` owned by `side`. Passing `Empty` or `NoSide` for either half gives
    /// an empty cell.
    #[inline(always)]
    pub const fn occupied(kind: PieceKind, side: Side) -> Self {
        match (kind, side) {
            (PieceKind::Empty, _) | (_, Side::NoSide) => Self::empty(),
            _ => Self::new(kind, side),
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline(always)]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline(always)]
    pub fn x(&self) -> u8 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Occupant only, as a `(kind, side)` pair
    #[inline(always)]
    pub fn occupant(&self) -> (PieceKind, Side) {
        (self.kind, self.side)
    }

    /// Nothing stands here. Looks at the side, which is what the path and capture checks use
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.side == Side::NoSide
    }

    pub fn set_occupant(&mut self, kind: PieceKind, side: Side) {
        self.kind = kind;
        self.side = side;
    }

    /// Takes over `other`'s piece and side, keeps its own coordinates
    pub fn copy_occupant_from(&mut self, other: &Cell) {
        self.kind = other.kind;
        self.side = other.side;
    }

    pub fn clear(&mut self) {
        self.kind = PieceKind::Empty;
        self.side = Side::NoSide;
    }

    /// Pins the cell to its grid position, only used while a board is laid out
    pub fn place_at(&mut self, x: u8, y: u8) {
        self.x = x;
        self.y = y;
    }
}
