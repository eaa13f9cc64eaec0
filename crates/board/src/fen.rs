use thiserror::Error;
use types::{BOARD_SIZE, PieceKind, Side};

use crate::Board;

/// Piece placement of the starting position, top row (`y = 7`) first
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("placement must have 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} describes {cells} cells instead of 8")]
    RowWidth { row: usize, cells: usize },
    #[error("invalid piece character: {0}")]
    BadPiece(char),
    #[error("side to move must be 'w' or 'b', found `{0}`")]
    BadSide(String),
    #[error("unexpected trailing field `{0}`")]
    Trailing(String),
}

impl Board {
    /// Builds a board from the piece placement field of a FEN record, optionally followed by the
    /// side to move (`w` for `First`, `b` for `Second`).
    ///
    /// Upper case letters belong to `First`, lower case to `Second`, digits are runs of empty
    /// cells. Rows go from `y = 7` down to `y = 0`, cells within a row from `x = 0` to `x = 7`.
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        let mut fields = text.split_whitespace();
        let mut board = Board::new();

        Self::parse_piece_placement(&mut board, fields.next().unwrap_or(""))?;

        if let Some(side) = fields.next() {
            board.set_side_to_move(Self::parse_side_to_move(side)?);
        }

        match fields.next() {
            Some(extra) => Err(PlacementError::Trailing(extra.to_string())),
            None => Ok(board),
        }
    }

    fn parse_piece_placement(board: &mut Board, placement: &str) -> Result<(), PlacementError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(PlacementError::RowCount(rows.len()));
        }

        for (row, text) in rows.iter().enumerate() {
            let y = (BOARD_SIZE - 1 - row) as i32;
            let mut x = 0usize;

            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    x += run as usize;
                } else {
                    let (kind, side) = Self::char_to_piece(ch)?;
                    if x < BOARD_SIZE {
                        // x and y are on the board, checked just above
                        let _ = board.put(kind, side, x as i32, y);
                    }
                    x += 1;
                }

                if x > BOARD_SIZE {
                    break;
                }
            }

            if x != BOARD_SIZE {
                return Err(PlacementError::RowWidth { row, cells: x });
            }
        }

        Ok(())
    }

    fn char_to_piece(ch: char) -> Result<(PieceKind, Side), PlacementError> {
        let kind = PieceKind::from_letter(ch).ok_or(PlacementError::BadPiece(ch))?;
        let side = if ch.is_ascii_uppercase() {
            Side::First
        } else {
            Side::Second
        };
        Ok((kind, side))
    }

    fn parse_side_to_move(side: &str) -> Result<Side, PlacementError> {
        match side {
            "w" => Ok(Side::First),
            "b" => Ok(Side::Second),
            _ => Err(PlacementError::BadSide(side.to_string())),
        }
    }

    /// Piece placement field for the current board, the inverse of [`Board::from_placement`]
    pub fn placement(&self) -> String {
        let mut out = String::new();

        for y in (0..BOARD_SIZE as i32).rev() {
            let mut empty_run = 0;
            for x in 0..BOARD_SIZE as i32 {
                let letter = self
                    .cell(x, y)
                    .filter(|cell| !cell.is_empty())
                    .and_then(|cell| Some((cell.kind().letter()?, cell.side())));

                match letter {
                    Some((letter, side)) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        out.push(match side {
                            Side::Second => letter.to_ascii_lowercase(),
                            _ => letter,
                        });
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if y > 0 {
                out.push('/');
            }
        }

        out
    }
}
