use crate::geometry::{Board, Cell};
use enum_map::Enum;
use rand::Rng;

/// A heading of the snake
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Choose a direction uniformly at random
    pub(crate) fn random<R: Rng>(rng: &mut R) -> Direction {
        Direction::from_usize(rng.random_range(0..Direction::LENGTH))
    }

    /// The unit vector of this direction in board coordinates, where y grows
    /// downwards
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The anti-reversal rule: a snake heading in `current` may not turn to
    /// face `self`, as doing so would drive its head straight into its neck.
    pub(crate) fn is_reversal_of(self, current: Direction) -> bool {
        self == current.reverse()
    }

    /// Return the cell one step from `cell` in this direction, wrapping
    /// around the edges of `board`
    pub(crate) fn advance(self, cell: Cell, board: Board) -> Cell {
        board.offset(cell, self.offset())
    }
}
