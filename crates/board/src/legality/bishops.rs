use types::{Cell, MoveResult};

use super::{Line, delta, line_between};
use crate::Board;

impl Board {
    /// Any distance along a diagonal over free cells. A zero-length move is refused.
    pub(crate) fn check_bishop(&self, from: &Cell, to: &Cell) -> MoveResult {
        let (dx, dy) = delta(from, to);
        match line_between(dx, dy) {
            Some(Line::Diagonal) if self.is_path_clear(from, to) => MoveResult::Ok,
            _ => MoveResult::BishopInvalid,
        }
    }
}

#[cfg(test)]
mod bishop_moves {
    use types::{Cell, MoveResult, PieceKind::*, Side::*};

    use crate::Board;

    #[test]
    fn locked_in_at_the_start() {
        let mut board = Board::starting();
        assert_eq!(board.request_move(2, 0, 4, 2), MoveResult::BishopInvalid);
        assert_eq!(board.request_move(2, 0, 2, 2), MoveResult::BishopInvalid);

        // opening the diagonal frees it
        assert_eq!(board.request_move(3, 1, 3, 2), MoveResult::Ok);
        assert_eq!(board.request_move(2, 0, 5, 3), MoveResult::Ok);
        assert_eq!(board.cell(5, 3).unwrap().occupant(), (Bishop, First));
    }

    #[test]
    fn all_four_diagonals() {
        for (x, y) in [(7, 7), (0, 0), (0, 6), (6, 0), (4, 4)] {
            let mut board = Board::new();
            board.put(Bishop, Second, 3, 3).unwrap();
            assert_eq!(board.request_move(3, 3, x, y), MoveResult::Ok, "to ({x}, {y})");
        }
    }

    #[test]
    fn refuses_straight_and_odd_shapes() {
        for (x, y) in [(3, 6), (0, 3), (4, 5), (7, 6)] {
            let mut board = Board::new();
            board.put(Bishop, Second, 3, 3).unwrap();
            assert_eq!(board.request_move(3, 3, x, y), MoveResult::BishopInvalid, "to ({x}, {y})");
        }
    }

    #[test]
    fn blocked_midway() {
        let mut board = Board::new();
        board.put(Bishop, First, 0, 0).unwrap();
        board.put(Knight, Second, 3, 3).unwrap();
        assert_eq!(board.request_move(0, 0, 6, 6), MoveResult::BishopInvalid);
        assert_eq!(board.request_move(0, 0, 3, 3), MoveResult::Ok);
    }

    #[test]
    fn zero_length_move_is_refused() {
        let mut board = Board::new();
        board.set_cell(&Cell::new(Bishop, NoSide), 5, 1).unwrap();
        assert_eq!(board.request_move(5, 1, 5, 1), MoveResult::BishopInvalid);
        assert_eq!(board.cell(5, 1).unwrap().kind(), Bishop);
    }
}
