/// What occupies a cell. `Empty` is the "nothing here" sentinel and always pairs with
/// [`Side::NoSide`](crate::Side::NoSide) on a well-formed cell.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
    Empty,
}

impl PieceKind {
    pub const ALL_PIECES: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self == PieceKind::Empty
    }

    /// Queen, rook and bishop need every cell between source and destination to be free
    #[inline(always)]
    pub fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop)
    }

    /// For parsing placement strings, case is ignored here (case carries the side)
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'B' => Some(Self::Bishop),
            'N' => Some(Self::Knight),
            'R' => Some(Self::Rook),
            'P' => Some(Self::Pawn),
            _ => None,
        }
    }

    /// Upper case placement letter, `None` for `Empty`
    pub fn letter(self) -> Option<char> {
        match self {
            Self::King => Some('K'),
            Self::Queen => Some('Q'),
            Self::Bishop => Some('B'),
            Self::Knight => Some('N'),
            Self::Rook => Some('R'),
            Self::Pawn => Some('P'),
            Self::Empty => None,
        }
    }
}
