use log::debug;
use thiserror::Error;
use types::{
    BOARD_SIZE, Cell, MoveResult,
    PieceKind::{self, *},
    Side::{self, *},
};
use utilities::square_name;

use crate::config::RuleConfig;

/// Highest valid coordinate on either axis
const LAST: i32 = BOARD_SIZE as i32 - 1;

/// Back rank, left to right, for both sides
const BACK_RANK: [PieceKind; BOARD_SIZE] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("({x}, {y}) is off the board")]
pub struct OffBoard {
    pub x: i32,
    pub y: i32,
}

/// The 8x8 grid plus whose turn it is.
///
/// Cells are indexed `[x][y]` and keep the coordinates they were given when the grid was laid
/// out, moves only ever copy occupants between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],

    /// Advisory, `request_move` never looks at it
    side_to_move: Side,

    config: RuleConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board, every cell pinned to its grid position
    pub fn new() -> Self {
        Self::with_config(RuleConfig::default())
    }

    /// Empty board using `config` for the rule variations
    pub fn with_config(config: RuleConfig) -> Self {
        let mut cells = [[Cell::empty(); BOARD_SIZE]; BOARD_SIZE];
        for (x, column) in cells.iter_mut().enumerate() {
            for (y, cell) in column.iter_mut().enumerate() {
                cell.place_at(x as u8, y as u8);
            }
        }

        Self {
            cells,
            side_to_move: First,
            config,
        }
    }

    /// Sets up a new game with the initial position
    pub fn starting() -> Self {
        let mut board = Self::new();
        board.reset_to_starting_position();
        board
    }

    /// Puts every piece back on its starting cell, empties the middle rows and hands the move to
    /// `First`
    pub fn reset_to_starting_position(&mut self) {
        for x in 0..BOARD_SIZE {
            self.cells[x][0].set_occupant(BACK_RANK[x], First);
            self.cells[x][1].set_occupant(Pawn, First);
            for y in 2..BOARD_SIZE - 2 {
                self.cells[x][y].clear();
            }
            self.cells[x][BOARD_SIZE - 2].set_occupant(Pawn, Second);
            self.cells[x][BOARD_SIZE - 1].set_occupant(BACK_RANK[x], Second);
        }
        self.side_to_move = First;
    }

    #[inline(always)]
    pub fn config(&self) -> RuleConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RuleConfig) {
        self.config = config;
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// Flips the turn
    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.flip();
    }

    /// Cell at `(x, y)`, `None` when off the board
    #[inline(always)]
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.cells.get(x)?.get(y)
    }

    /// Copies `cell`'s occupant onto `(x, y)`. The target keeps its own coordinates whatever
    /// `cell` says about its position.
    pub fn set_cell(&mut self, cell: &Cell, x: i32, y: i32) -> Result<(), OffBoard> {
        let target = usize::try_from(x)
            .ok()
            .zip(usize::try_from(y).ok())
            .and_then(|(cx, cy)| self.cells.get_mut(cx)?.get_mut(cy))
            .ok_or(OffBoard { x, y })?;
        target.copy_occupant_from(cell);
        Ok(())
    }

    /// Shorthand for placing a piece when building scenarios
    pub fn put(&mut self, kind: PieceKind, side: Side, x: i32, y: i32) -> Result<(), OffBoard> {
        self.set_cell(&Cell::occupied(kind, side), x, y)
    }

    /// Iterates over every cell, column by column
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Checks the move from `(x1, y1)` to `(x2, y2)` against the rules of the piece on the source
    /// cell and plays it when legal.
    ///
    /// Rejections leave the board exactly as it was. Whose turn it is is not checked here.
    pub fn request_move(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> MoveResult {
        let result = self.judge(x1, y1, x2, y2);
        debug!("move ({x1}, {y1}) -> ({x2}, {y2}): {result:?}");
        result
    }

    fn judge(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> MoveResult {
        if !self.in_bounds(x1, y1, x2, y2) {
            return MoveResult::OutOfBound;
        }

        // y2 may be one past the board under the lenient bound, there is no cell behind it
        let (Some(&from), Some(&to)) = (self.cell(x1, y1), self.cell(x2, y2)) else {
            return MoveResult::GenericError;
        };

        if from.side() == to.side() && to.side() != NoSide {
            return MoveResult::SameColorPiece;
        }

        let verdict = match from.kind() {
            King => self.check_king(&from, &to),
            Queen => self.check_queen(&from, &to),
            Bishop => self.check_bishop(&from, &to),
            Knight => self.check_knight(&from, &to),
            Rook => self.check_rook(&from, &to),
            Pawn => self.check_pawn(&from, &to),
            Empty => return MoveResult::SourceEmpty,
        };

        if verdict.is_ok() {
            self.commit(&from, &to);
        } else {
            log::trace!(
                "{:?} {} -> {} refused",
                from.kind(),
                square_name(from.x(), from.y()),
                square_name(to.x(), to.y())
            );
        }
        verdict
    }

    /// `x1`, `y1` and `x2` must be on the board. `y2` is allowed one past the last row unless
    /// the config asks for the strict bound
    fn in_bounds(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        let y2_limit = if self.config.strict_destination_bound {
            LAST
        } else {
            LAST + 1
        };
        [x1, y1, x2].iter().all(|c| (0..=LAST).contains(c)) && (0..=y2_limit).contains(&y2)
    }

    /// Destination takes over the source's occupant, source is emptied
    fn commit(&mut self, from: &Cell, to: &Cell) {
        self.cells[to.x() as usize][to.y() as usize].copy_occupant_from(from);
        self.cells[from.x() as usize][from.y() as usize].clear();
    }
}
