pub mod cell;
pub mod move_result;
pub mod others;
pub mod piece_kind;

pub use cell::Cell;
pub use move_result::MoveResult;
pub use others::Side;
pub use piece_kind::PieceKind;

/// Width and height of the board
pub const BOARD_SIZE: usize = 8;
