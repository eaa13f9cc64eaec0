use crate::piece_kind::PieceKind;

/// Verdict of a move request. Everything but `Ok` is a rejection, and a rejected request never
/// touches the board.
///
/// The discriminants are the status codes the front ends exchange, see [`MoveResult::code`].
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveResult {
    Ok = 0,
    OutOfBound = 1,
    SameColorPiece = 2,
    SourceEmpty = 3,
    GenericError = 4,
    PawnInvalid = 5,
    RookInvalid = 6,
    KnightInvalid = 7,
    BishopInvalid = 8,
    QueenInvalid = 9,
    KingInvalid = 10,
}

impl MoveResult {
    pub const ALL: [MoveResult; 11] = [
        MoveResult::Ok,
        MoveResult::OutOfBound,
        MoveResult::SameColorPiece,
        MoveResult::SourceEmpty,
        MoveResult::GenericError,
        MoveResult::PawnInvalid,
        MoveResult::RookInvalid,
        MoveResult::KnightInvalid,
        MoveResult::BishopInvalid,
        MoveResult::QueenInvalid,
        MoveResult::KingInvalid,
    ];

    #[inline(always)]
    pub fn is_ok(self) -> bool {
        self == MoveResult::Ok
    }

    #[inline(always)]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// The piece-specific rejection for a piece kind. `Empty` has nothing to move
    pub fn invalid_for(kind: PieceKind) -> Self {
        match kind {
            PieceKind::King => MoveResult::KingInvalid,
            PieceKind::Queen => MoveResult::QueenInvalid,
            PieceKind::Bishop => MoveResult::BishopInvalid,
            PieceKind::Knight => MoveResult::KnightInvalid,
            PieceKind::Rook => MoveResult::RookInvalid,
            PieceKind::Pawn => MoveResult::PawnInvalid,
            PieceKind::Empty => MoveResult::SourceEmpty,
        }
    }

    /// Text shown to the player
    pub fn message(self) -> &'static str {
        match self {
            MoveResult::Ok => "Move accepted",
            MoveResult::OutOfBound => "Coordinates out of bound",
            MoveResult::SameColorPiece => "Invalid move: cannot land on your own piece",
            MoveResult::SourceEmpty => "No player piece on the origin move coordinates",
            MoveResult::GenericError => "Invalid move",
            MoveResult::PawnInvalid => "Wrong pawn move",
            MoveResult::RookInvalid => "Wrong rook move",
            MoveResult::KnightInvalid => "Wrong knight move",
            MoveResult::BishopInvalid => "Wrong bishop move",
            MoveResult::QueenInvalid => "Wrong queen move",
            MoveResult::KingInvalid => "Wrong king move",
        }
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod move_result_tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        for (code, result) in MoveResult::ALL.into_iter().enumerate() {
            assert_eq!(result.code() as usize, code);
            assert_eq!(MoveResult::from_code(code as u8), Some(result));
        }
        assert_eq!(MoveResult::KingInvalid.code(), 10);
        assert_eq!(MoveResult::from_code(11), None);
    }

    #[test]
    fn only_ok_is_ok() {
        let accepted: Vec<_> = MoveResult::ALL.into_iter().filter(|r| r.is_ok()).collect();
        assert_eq!(accepted, vec![MoveResult::Ok]);
    }

    #[test]
    fn per_piece_rejections() {
        assert_eq!(MoveResult::invalid_for(PieceKind::Knight), MoveResult::KnightInvalid);
        assert_eq!(MoveResult::invalid_for(PieceKind::Pawn), MoveResult::PawnInvalid);
        assert_eq!(MoveResult::invalid_for(PieceKind::Empty), MoveResult::SourceEmpty);
    }

    #[test]
    fn display_uses_the_message() {
        assert_eq!(MoveResult::RookInvalid.to_string(), "Wrong rook move");
        assert_eq!(
            MoveResult::SameColorPiece.to_string(),
            "Invalid move: cannot land on your own piece"
        );
    }
}
