use crate::core::coord::Coord;

/// Squares per board side.
pub const SIDE: usize = 8;
/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// A square on the 8×8 board, indexed row-major from the top-left corner.
///
/// Row = `index / 8`, column = `index % 8`. Stepping off any edge yields `None`; steps never
/// wrap from one row into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub fn new(index: usize) -> Option<Square> {
        (index < CELLS).then_some(Square(index as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> i32 {
        (self.0 as usize / SIDE) as i32
    }

    #[inline]
    pub fn col(self) -> i32 {
        (self.0 as usize % SIDE) as i32
    }

    pub fn from_row_col(row: i32, col: i32) -> Option<Square> {
        let side = SIDE as i32;
        if !(0..side).contains(&row) || !(0..side).contains(&col) {
            return None;
        }
        Some(Square((row * side + col) as u8))
    }

    /// The square `delta` away, or `None` if that leaves the board.
    #[inline]
    pub fn shifted(self, delta: Coord) -> Option<Square> {
        Square::from_row_col(self.row() + delta.y, self.col() + delta.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifting_never_wraps_rows() {
        let h1 = Square::new(7).unwrap();
        assert_eq!(h1.shifted(Coord::new(1, 0)), None);
        let a2 = Square::new(8).unwrap();
        assert_eq!(a2.shifted(Coord::new(-1, 0)), None);
        let diagonal = Coord::new(1, 0) + Coord::new(0, 1);
        assert_eq!(a2.shifted(diagonal).map(Square::index), Some(17));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(Square::new(63).is_some());
        assert!(Square::new(64).is_none());
    }
}
