//! Turn-keeping layer on top of the engine.
//!
//! The board itself accepts any legal-looking move from either side. A [`GameSession`] is what a
//! front end talks to: it parses what the player typed, refuses to move the opponent's pieces,
//! passes the turn after every accepted move and ends the game when a king is taken.

use std::str::FromStr;

use board::{Board, RuleConfig};
use log::info;
use thiserror::Error;
use types::{MoveResult, PieceKind, Side};
use utilities::{Algebraic, AlgebraicError, square_name};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("type a move as four digits x1y1x2y2 or as two squares like e2e4, got `{0}`")]
    Malformed(String),
    #[error(transparent)]
    Square(#[from] AlgebraicError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("That's not your piece, {0} to move")]
    NotYourPiece(Side),
    #[error("{0}")]
    Rejected(MoveResult),
    #[error("The game is over, {0} won")]
    GameOver(Side),
}

/// Source and destination coordinates of a requested move, as the engine takes them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl MoveRequest {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl FromStr for MoveRequest {
    type Err = InputError;

    /// Four digits (`"0102"`, x before y in each pair) or two squares (`"a2a3"`, `"a2 a3"`).
    ///
    /// Digits are taken as typed, `9` included, so the engine gets to say what is out of bounds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let chars: Vec<char> = compact.chars().collect();
        if chars.len() != 4 {
            return Err(InputError::Malformed(s.trim().to_string()));
        }

        if let Some(digits) = chars
            .iter()
            .map(|c| c.to_digit(10).map(|d| d as i32))
            .collect::<Option<Vec<i32>>>()
        {
            return Ok(Self::new(digits[0], digits[1], digits[2], digits[3]));
        }

        let (from, to) = compact.split_at(compact.char_indices().nth(2).map_or(0, |(i, _)| i));
        let (x1, y1) = from.coords()?;
        let (x2, y2) = to.coords()?;
        Ok(Self::new(x1 as i32, y1 as i32, x2 as i32, y2 as i32))
    }
}

/// What happened after an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game goes on with `next` to move
    Continue { next: Side },
    /// The mover took the opposing king
    Won(Side),
}

pub struct GameSession {
    board: Board,
    winner: Option<Side>,
    moves_played: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl GameSession {
    /// A new game from the starting position
    pub fn new(config: RuleConfig) -> Self {
        let mut board = Board::with_config(config);
        board.reset_to_starting_position();
        Self::from_board(board)
    }

    /// Continues from an arbitrary position, whoever the board says is to move goes next
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            winner: None,
            moves_played: 0,
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[inline(always)]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Side {
        self.board.side_to_move()
    }

    /// Back to the starting position, keeping the rule config
    pub fn restart(&mut self) {
        self.board.reset_to_starting_position();
        self.winner = None;
        self.moves_played = 0;
    }

    /// Parses a typed move and plays it
    pub fn submit(&mut self, input: &str) -> Result<Outcome, SessionError> {
        let request: MoveRequest = input.parse()?;
        self.play(request)
    }

    pub fn play(&mut self, request: MoveRequest) -> Result<Outcome, SessionError> {
        if let Some(winner) = self.winner {
            return Err(SessionError::GameOver(winner));
        }

        let mover = self.board.side_to_move();
        let MoveRequest { x1, y1, x2, y2 } = request;

        // Empty and off-board sources go through to the engine, it has a code for them
        if let Some(source) = self.board.cell(x1, y1) {
            if !source.is_empty() && source.side() != mover {
                return Err(SessionError::NotYourPiece(mover));
            }
        }

        let captured = self.board.cell(x2, y2).map(|cell| cell.kind());
        let result = self.board.request_move(x1, y1, x2, y2);
        if !result.is_ok() {
            return Err(SessionError::Rejected(result));
        }

        self.moves_played += 1;
        info!(
            "{mover} plays {}{}",
            square_name(x1 as u8, y1 as u8),
            square_name(x2 as u8, y2 as u8)
        );

        if captured == Some(PieceKind::King) {
            info!("{mover} took the king after {} moves", self.moves_played);
            self.winner = Some(mover);
            return Ok(Outcome::Won(mover));
        }

        self.board.pass_turn();
        Ok(Outcome::Continue {
            next: self.board.side_to_move(),
        })
    }
}
