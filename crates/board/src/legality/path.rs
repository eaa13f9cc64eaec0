use log::trace;
use types::Cell;
use utilities::square_name;

use super::delta;
use crate::Board;

impl Board {
    /// True when every cell strictly between `from` and `to` is unoccupied.
    ///
    /// Walks one step at a time along `(signum(dx), signum(dy))`, so it only means something for
    /// straight or diagonal displacements. Adjacent cells and a zero displacement have nothing in
    /// between and are trivially clear.
    pub(crate) fn is_path_clear(&self, from: &Cell, to: &Cell) -> bool {
        let (dx, dy) = delta(from, to);
        let (step_x, step_y) = (dx.signum(), dy.signum());
        let distance = dx.abs().max(dy.abs());
        let (x0, y0) = (from.x() as i32, from.y() as i32);

        for i in 1..distance {
            let (x, y) = (x0 + step_x * i, y0 + step_y * i);
            let free = self.cell(x, y).is_some_and(Cell::is_empty);
            if !free {
                trace!("path blocked at {}", square_name(x as u8, y as u8));
                return false;
            }
        }
        true
    }
}
