use types::{Cell, MoveResult};

use super::{Line, delta, line_between};
use crate::Board;

impl Board {
    /// Any distance along a row or a column over free cells. A zero-length move is refused.
    pub(crate) fn check_rook(&self, from: &Cell, to: &Cell) -> MoveResult {
        let (dx, dy) = delta(from, to);
        match line_between(dx, dy) {
            Some(Line::Straight) if self.is_path_clear(from, to) => MoveResult::Ok,
            _ => MoveResult::RookInvalid,
        }
    }
}
