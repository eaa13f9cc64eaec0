//! Per-piece move rules. Every check is a pure function of the board and the two cells, the
//! board commits the move itself once a check says `Ok`.

mod bishops;
mod kings;
mod knights;
mod path;
mod pawns;
mod queens;
mod rooks;

use types::Cell;

/// Board-relative displacement from `from` to `to`
#[inline(always)]
pub(crate) fn delta(from: &Cell, to: &Cell) -> (i32, i32) {
    (
        to.x() as i32 - from.x() as i32,
        to.y() as i32 - from.y() as i32,
    )
}

/// The kind of line a displacement travels along, if any
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Line {
    /// Along a row or a column
    Straight,
    Diagonal,
}

/// `None` for a zero displacement or anything that is neither straight nor diagonal
pub(crate) fn line_between(dx: i32, dy: i32) -> Option<Line> {
    match (dx, dy) {
        (0, 0) => None,
        (0, _) | (_, 0) => Some(Line::Straight),
        _ if dx.abs() == dy.abs() => Some(Line::Diagonal),
        _ => None,
    }
}
