//! Text and HTML pictures of the board for whatever front end is showing the game.

use std::fmt;

use types::{BOARD_SIZE, Cell, PieceKind, Side};

use crate::Board;

/// Where a picture of the board is going
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    /// Serial / terminal console
    Console,
    /// Remote browser client
    Html,
    /// Display wired to the controller, nothing can draw there yet
    Display,
}

/// Letter shown for a cell: `K Q B H R P` for `First`, lower case for `Second`, blank when empty.
/// Knights are `H` so they don't get confused with kings at a glance.
fn symbol(cell: &Cell) -> char {
    let letter = match cell.kind() {
        PieceKind::Knight => Some('H'),
        kind => kind.letter(),
    };

    match (letter, cell.side()) {
        (Some(letter), Side::First) => letter,
        (Some(letter), Side::Second) => letter.to_ascii_lowercase(),
        _ => ' ',
    }
}

impl Board {
    /// Draws the board for `target`, `None` when that target can't be drawn on
    pub fn render(&self, target: RenderTarget) -> Option<String> {
        match target {
            RenderTarget::Console => Some(self.to_string()),
            RenderTarget::Html => Some(self.render_html()),
            RenderTarget::Display => None,
        }
    }

    fn render_html(&self) -> String {
        let mut html = String::from("<table class=\"board\">\n");
        for y in (0..BOARD_SIZE as i32).rev() {
            html.push_str("<tr>");
            for cell in (0..BOARD_SIZE as i32).filter_map(|x| self.cell(x, y)) {
                match symbol(cell) {
                    ' ' => html.push_str("<td>&nbsp;</td>"),
                    letter => html.push_str(&format!("<td>{letter}</td>")),
                }
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>\n");
        html
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE as i32).rev() {
            write!(f, " {}| ", y + 1)?;
            for cell in (0..BOARD_SIZE as i32).filter_map(|x| self.cell(x, y)) {
                write!(f, "[{}]", symbol(cell))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    {}", "_".repeat(3 * BOARD_SIZE))?;
        write!(f, "    ")?;
        for file in "ABCDEFGH".chars() {
            write!(f, " {file} ")?;
        }
        writeln!(f)
    }
}
