use types::{Cell, MoveResult};

use super::delta;
use crate::Board;

impl Board {
    /// A single diagonal step. With `king_orthogonal_steps` set the king may also take a single
    /// step along a row or column.
    pub(crate) fn check_king(&self, from: &Cell, to: &Cell) -> MoveResult {
        let (dx, dy) = delta(from, to);
        let (dx, dy) = (dx.abs(), dy.abs());

        let legal = if self.config().king_orthogonal_steps {
            dx.max(dy) == 1
        } else {
            dx == 1 && dy == 1
        };

        if legal {
            MoveResult::Ok
        } else {
            MoveResult::KingInvalid
        }
    }
}
