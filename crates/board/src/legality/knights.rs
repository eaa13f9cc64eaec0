use types::{Cell, MoveResult};

use super::delta;
use crate::Board;

impl Board {
    /// Two cells along one axis and one along the other. Knights jump, nothing in between matters
    pub(crate) fn check_knight(&self, from: &Cell, to: &Cell) -> MoveResult {
        let (dx, dy) = delta(from, to);
        match (dx.abs(), dy.abs()) {
            (2, 1) | (1, 2) => MoveResult::Ok,
            _ => MoveResult::KnightInvalid,
        }
    }
}
