use types::{Cell, MoveResult};

use super::delta;
use crate::Board;

impl Board {
    /// One cell forward onto an empty cell, or one cell diagonally forward onto an opponent's
    /// piece. Forward is +y for `First` and -y for `Second`; a pawn without a side never moves.
    ///
    /// No double step from the starting row, no en passant, no promotion.
    pub(crate) fn check_pawn(&self, from: &Cell, to: &Cell) -> MoveResult {
        let Some(forward) = from.side().forward() else {
            return MoveResult::PawnInvalid;
        };

        let (dx, dy) = delta(from, to);
        if dy != forward {
            return MoveResult::PawnInvalid;
        }

        match dx.abs() {
            0 if to.is_empty() => MoveResult::Ok,
            1 if from.side().is_opponent_of(to.side()) => MoveResult::Ok,
            _ => MoveResult::PawnInvalid,
        }
    }
}

#[cfg(test)]
mod pawn_moves {
    use types::{Cell, MoveResult, PieceKind::*, Side::*};

    use crate::Board;

    #[test]
    fn single_steps_from_the_start() {
        let mut board = Board::starting();
        assert_eq!(board.request_move(0, 1, 0, 2), MoveResult::Ok);
        assert!(board.cell(0, 1).unwrap().is_empty());
        assert_eq!(board.cell(0, 2).unwrap().occupant(), (Pawn, First));

        assert_eq!(board.request_move(7, 6, 7, 5), MoveResult::Ok);
        assert_eq!(board.cell(7, 5).unwrap().occupant(), (Pawn, Second));
    }

    #[test]
    fn no_double_step() {
        let mut board = Board::starting();
        assert_eq!(board.request_move(4, 1, 4, 3), MoveResult::PawnInvalid);
        assert_eq!(board.request_move(4, 6, 4, 4), MoveResult::PawnInvalid);
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn never_backwards_or_sideways() {
        let mut board = Board::new();
        board.put(Pawn, First, 3, 3).unwrap();
        board.put(Pawn, Second, 5, 5).unwrap();

        assert_eq!(board.request_move(3, 3, 3, 2), MoveResult::PawnInvalid);
        assert_eq!(board.request_move(3, 3, 4, 3), MoveResult::PawnInvalid);
        assert_eq!(board.request_move(5, 5, 5, 6), MoveResult::PawnInvalid);
        assert_eq!(board.request_move(5, 5, 4, 5), MoveResult::PawnInvalid);
    }

    #[test]
    fn capture_direction() {
        let mut board = Board::new();
        board.put(Pawn, First, 3, 4).unwrap();
        board.put(Pawn, Second, 4, 5).unwrap();

        assert_eq!(board.request_move(3, 4, 4, 5), MoveResult::Ok);
        assert_eq!(board.cell(4, 5).unwrap().occupant(), (Pawn, First));
        assert!(board.cell(3, 4).unwrap().is_empty());

        let mut board = Board::new();
        board.put(Pawn, Second, 3, 4).unwrap();
        board.put(Knight, First, 2, 3).unwrap();
        assert_eq!(board.request_move(3, 4, 2, 3), MoveResult::Ok);
        assert_eq!(board.cell(2, 3).unwrap().occupant(), (Pawn, Second));
    }

    #[test]
    fn diagonal_needs_a_victim() {
        let mut board = Board::new();
        board.put(Pawn, First, 3, 4).unwrap();
        assert_eq!(board.request_move(3, 4, 4, 5), MoveResult::PawnInvalid);
        assert_eq!(board.request_move(3, 4, 2, 5), MoveResult::PawnInvalid);
    }

    #[test]
    fn blocked_straight_ahead() {
        let mut board = Board::new();
        board.put(Pawn, First, 3, 4).unwrap();
        board.put(Pawn, Second, 3, 5).unwrap();
        assert_eq!(board.request_move(3, 4, 3, 5), MoveResult::PawnInvalid);
        assert_eq!(board.request_move(3, 5, 3, 4), MoveResult::PawnInvalid);
    }

    #[test]
    fn no_promotion_on_the_last_row() {
        let mut board = Board::new();
        board.put(Pawn, First, 6, 6).unwrap();
        assert_eq!(board.request_move(6, 6, 6, 7), MoveResult::Ok);
        assert_eq!(board.cell(6, 7).unwrap().kind(), Pawn);
    }

    #[test]
    fn pawn_without_a_side_is_stuck() {
        let mut board = Board::new();
        board.set_cell(&Cell::new(Pawn, NoSide), 2, 2).unwrap();
        assert_eq!(board.request_move(2, 2, 2, 3), MoveResult::PawnInvalid);
        assert_eq!(board.request_move(2, 2, 2, 1), MoveResult::PawnInvalid);
    }
}
