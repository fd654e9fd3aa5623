//! The playfield and wrap-around coordinate arithmetic
use ratatui::layout::{Position, Positions, Rect, Size};

/// A grid cell, addressed in whole cells (not terminal columns) relative to
/// the top-left corner of the board
pub(crate) type Cell = Position;

/// The extent of the playfield, in cells.  Both dimensions are always
/// nonzero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    width: u16,
    height: u16,
}

impl Board {
    /// Returns `None` if either dimension is zero
    pub(crate) fn new(width: u16, height: u16) -> Option<Board> {
        (width > 0 && height > 0).then_some(Board { width, height })
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// The cell at which a fresh snake is placed
    pub(crate) fn center(self) -> Cell {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    #[cfg(test)]
    pub(crate) fn contains(self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Iterate over every cell of the board in row-major order
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    /// Offset `cell` by `(dx, dy)`, wrapping around whichever edges are
    /// crossed
    pub(crate) fn offset(self, cell: Cell, (dx, dy): (i32, i32)) -> Cell {
        Position::new(
            wrap(i32::from(cell.x) + dx, self.width),
            wrap(i32::from(cell.y) + dy, self.height),
        )
    }
}

/// Reduce `value` into `[0, extent)`, so that stepping off one edge of the
/// board reappears on the opposite edge.
///
/// # Panics
///
/// Panics if `extent` is zero.
pub(crate) fn wrap(value: i32, extent: u16) -> u16 {
    let r = value.rem_euclid(i32::from(extent));
    u16::try_from(r).expect("remainder modulo a u16 should fit in a u16")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 32, 0)]
    #[case(5, 32, 5)]
    #[case(31, 32, 31)]
    #[case(32, 32, 0)]
    #[case(33, 32, 1)]
    #[case(-1, 32, 31)]
    #[case(-33, 32, 31)]
    #[case(-1, 1, 0)]
    fn test_wrap(#[case] value: i32, #[case] extent: u16, #[case] r: u16) {
        assert_eq!(wrap(value, extent), r);
    }

    #[test]
    fn zero_sized_board() {
        assert_eq!(Board::new(0, 5), None);
        assert_eq!(Board::new(5, 0), None);
    }

    #[test]
    fn center() {
        let board = Board::new(32, 24).unwrap();
        assert_eq!(board.center(), Position::new(16, 12));
        let board = Board::new(5, 3).unwrap();
        assert_eq!(board.center(), Position::new(2, 1));
    }

    #[test]
    fn positions_cover_board() {
        let board = Board::new(4, 3).unwrap();
        let cells = board.positions().collect::<Vec<_>>();
        assert_eq!(cells.len(), board.cell_count());
        assert_eq!(cells.first(), Some(&Position::new(0, 0)));
        assert_eq!(cells.last(), Some(&Position::new(3, 2)));
        assert!(cells.iter().all(|&c| board.contains(c)));
    }

    #[test]
    fn offsets_stay_on_board() {
        let board = Board::new(7, 5).unwrap();
        for cell in board.positions() {
            for delta in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
                let moved = board.offset(cell, delta);
                assert!(
                    board.contains(moved),
                    "{cell:?} + {delta:?} = {moved:?} left the board"
                );
            }
        }
    }
}
