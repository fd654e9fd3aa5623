use super::direction::Direction;
use crate::geometry::{Board, Cell};
use crate::render::{Drawable, TileSink, Tint};
use rand::Rng;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first
    pub(super) body: VecDeque<Cell>,

    /// The length that the body grows towards; the tail is only trimmed once
    /// the body exceeds this
    pub(super) target_length: usize,

    /// The direction in which the snake is currently moving
    pub(super) heading: Direction,

    /// The direction to switch to at the start of the next tick
    pub(super) pending_heading: Option<Direction>,

    /// Where the snake's head is placed whenever it is (re)started
    start: Cell,

    tint: Tint,
}

impl Snake {
    /// Create a new snake of length 1 at `start`, moving in `heading`
    pub(super) fn new(start: Cell, heading: Direction, tint: Tint) -> Snake {
        Snake {
            body: VecDeque::from([start]),
            target_length: 1,
            heading,
            pending_heading: None,
            start,
            tint,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body should never be empty")
    }

    /// Return the cells occupied by the snake, head first
    pub(super) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    /// Request that the snake turn to face `heading` on the next tick.
    /// Requests that would reverse the snake onto itself are ignored.
    pub(super) fn set_pending_heading(&mut self, heading: Direction) {
        if !heading.is_reversal_of(self.heading) {
            self.pending_heading = Some(heading);
        }
    }

    /// Make the pending heading, if any, the current heading
    pub(super) fn commit_heading(&mut self) {
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }
    }

    /// Move the snake forwards one cell in the current direction, wrapping
    /// around the edges of `board`
    pub(super) fn advance(&mut self, board: Board) {
        let head = self.heading.advance(self.head(), board);
        self.body.push_front(head);
        while self.body.len() > self.target_length {
            let _ = self.body.pop_back();
        }
    }

    /// Extend the snake's target length in response to eating food.  The
    /// body catches up on the next call to `advance()`.
    pub(super) fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Has the snake's head run into the rest of its body?
    pub(super) fn self_intersects(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    /// Put the snake back at its starting cell with a length of 1 and a
    /// random heading
    pub(super) fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.body.clear();
        self.body.push_back(self.start);
        self.target_length = 1;
        self.heading = Direction::random(rng);
        self.pending_heading = None;
    }
}

impl Drawable for Snake {
    fn draw(&self, sink: &mut dyn TileSink) {
        for &cell in &self.body {
            self.tint.draw_at(sink, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::{layout::Position, style::Color};
    use rstest::rstest;

    const TINT: Tint = Tint {
        fill: Color::Green,
        border: Color::Cyan,
    };

    fn board() -> Board {
        Board::new(32, 24).unwrap()
    }

    #[test]
    fn advance_keeps_length() {
        let mut snake = Snake::new(Position::new(16, 12), Direction::Right, TINT);
        snake.advance(board());
        assert_eq!(snake.body(), &VecDeque::from([Position::new(17, 12)]));
        assert_eq!(snake.target_length, 1);
    }

    #[test]
    fn grow_then_advance_adds_one_segment() {
        let mut plain = Snake::new(Position::new(16, 12), Direction::Right, TINT);
        let mut grown = plain.clone();
        plain.advance(board());
        grown.grow();
        grown.advance(board());
        assert_eq!(grown.len(), plain.len() + 1);
        assert_eq!(
            grown.body(),
            &VecDeque::from([Position::new(17, 12), Position::new(16, 12)])
        );
    }

    #[test]
    fn length_never_exceeds_target() {
        let mut snake = Snake::new(Position::new(0, 0), Direction::Down, TINT);
        snake.grow();
        snake.grow();
        let mut prev_len = snake.len();
        for _ in 0..10 {
            snake.advance(board());
            assert_eq!(snake.len(), (prev_len + 1).min(snake.target_length));
            prev_len = snake.len();
        }
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_wraps_around() {
        let mut snake = Snake::new(Position::new(31, 0), Direction::Right, TINT);
        snake.advance(board());
        assert_eq!(snake.head(), Position::new(0, 0));
        snake.heading = Direction::Up;
        snake.advance(board());
        assert_eq!(snake.head(), Position::new(0, 23));
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn reversal_is_ignored(#[case] heading: Direction) {
        let mut snake = Snake::new(Position::new(5, 5), heading, TINT);
        snake.set_pending_heading(heading.reverse());
        assert_eq!(snake.pending_heading, None);
        snake.commit_heading();
        assert_eq!(snake.heading, heading);
    }

    #[test]
    fn turn_is_committed_once() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, TINT);
        snake.set_pending_heading(Direction::Up);
        assert_eq!(snake.heading, Direction::Right);
        snake.commit_heading();
        assert_eq!(snake.heading, Direction::Up);
        assert_eq!(snake.pending_heading, None);
        snake.commit_heading();
        assert_eq!(snake.heading, Direction::Up);
    }

    #[test]
    fn later_turn_replaces_earlier() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, TINT);
        snake.set_pending_heading(Direction::Up);
        snake.set_pending_heading(Direction::Down);
        snake.set_pending_heading(Direction::Left);
        snake.commit_heading();
        assert_eq!(snake.heading, Direction::Down);
    }

    #[test]
    fn self_intersection() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Up, TINT);
        assert!(!snake.self_intersects());
        snake.body = VecDeque::from([
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
            Position::new(5, 5),
        ]);
        snake.target_length = 5;
        assert!(snake.self_intersects());
    }

    #[test]
    fn reset_restores_start() {
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        let mut snake = Snake::new(Position::new(16, 12), Direction::Right, TINT);
        snake.grow();
        snake.grow();
        for _ in 0..5 {
            snake.advance(board());
        }
        snake.set_pending_heading(Direction::Down);
        snake.reset(&mut rng);
        assert_eq!(snake.body(), &VecDeque::from([Position::new(16, 12)]));
        assert_eq!(snake.target_length, 1);
        assert_eq!(snake.pending_heading, None);
    }
}
