use types::{Cell, MoveResult};

use super::{delta, line_between};
use crate::Board;

impl Board {
    /// Rook or bishop lines, same rule about free cells in between
    pub(crate) fn check_queen(&self, from: &Cell, to: &Cell) -> MoveResult {
        let (dx, dy) = delta(from, to);
        match line_between(dx, dy) {
            Some(_) if self.is_path_clear(from, to) => MoveResult::Ok,
            _ => MoveResult::QueenInvalid,
        }
    }
}

#[cfg(test)]
mod queen_moves {
    use types::{Cell, MoveResult, PieceKind::*, Side::*};

    use crate::Board;

    #[test]
    fn hemmed_in_at_the_start() {
        let mut board = Board::starting();
        assert_eq!(board.request_move(3, 0, 3, 3), MoveResult::QueenInvalid);
        assert_eq!(board.request_move(3, 7, 6, 4), MoveResult::QueenInvalid);
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn straight_and_diagonal() {
        for (x, y) in [(3, 7), (0, 3), (7, 3), (3, 0), (0, 0), (7, 7), (0, 6), (6, 0)] {
            let mut board = Board::new();
            board.put(Queen, First, 3, 3).unwrap();
            assert_eq!(board.request_move(3, 3, x, y), MoveResult::Ok, "to ({x}, {y})");
            assert_eq!(board.cell(x, y).unwrap().occupant(), (Queen, First));
        }
    }

    #[test]
    fn refuses_knight_shapes() {
        for (x, y) in [(4, 5), (5, 4), (1, 2), (7, 0)] {
            let mut board = Board::new();
            board.put(Queen, First, 3, 3).unwrap();
            assert_eq!(board.request_move(3, 3, x, y), MoveResult::QueenInvalid, "to ({x}, {y})");
        }
    }

    #[test]
    fn blocked_on_both_kinds_of_line() {
        let mut board = Board::new();
        board.put(Queen, Second, 3, 3).unwrap();
        board.put(Pawn, First, 3, 5).unwrap();
        board.put(Pawn, Second, 5, 5).unwrap();

        assert_eq!(board.request_move(3, 3, 3, 7), MoveResult::QueenInvalid);
        assert_eq!(board.request_move(3, 3, 6, 6), MoveResult::QueenInvalid);
        assert_eq!(board.request_move(3, 3, 3, 5), MoveResult::Ok);
    }

    #[test]
    fn zero_length_move_is_refused() {
        let mut board = Board::new();
        board.set_cell(&Cell::new(Queen, NoSide), 0, 0).unwrap();
        assert_eq!(board.request_move(0, 0, 0, 0), MoveResult::QueenInvalid);
    }
}
