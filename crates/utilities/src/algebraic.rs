use thiserror::Error;

/// Why a square name could not be turned into board coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraicError {
    #[error("square name `{0}` must be a file letter followed by a rank digit")]
    Malformed(String),
    #[error("file `{0}` is outside a..h")]
    BadFile(char),
    #[error("rank `{0}` is outside 1..8")]
    BadRank(char),
}

/// Niceties for `&str` square names, turning them into the `(x, y)` coordinates the board is
/// indexed with. Files `a..h` map to `x = 0..7`, ranks `1..8` map to `y = 0..7`.
pub trait Algebraic {
    /// Takes in a `str` for a square in algebraic notation and returns its `(x, y)` coordinates
    /// # Example
    ///
    /// let coords = "g2".coords();
    /// assert_eq!(coords, Ok((6, 1)));
    fn coords(&self) -> Result<(u8, u8), AlgebraicError>;
}

impl Algebraic for str {
    fn coords(&self) -> Result<(u8, u8), AlgebraicError> {
        let sq = self.trim();
        let mut chars = sq.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(AlgebraicError::Malformed(sq.to_string()));
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(AlgebraicError::BadFile(file_char));
        }

        let rank = match rank_char.to_digit(10) {
            Some(r @ 1..=8) => r as u8 - 1,
            _ => return Err(AlgebraicError::BadRank(rank_char)),
        };

        Ok((file as u8 - b'a', rank))
    }
}

/// `(x, y)` to square name. Coordinates past the board are still rendered, `(0, 8)` becomes `a9`,
/// so that rejected requests can be echoed back verbatim.
pub fn square_name(x: u8, y: u8) -> String {
    format!("{}{}", (b'a' + x) as char, y + 1)
}
