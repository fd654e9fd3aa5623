use crate::consts;
use crate::geometry::{Board, Cell};
use crate::render::{Drawable, TileSink, Tint};
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use std::collections::HashSet;

/// The single piece of food on the board
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) position: Cell,
    tint: Tint,
}

impl Food {
    /// Create food at `position`.  Callers should follow up with
    /// [`Food::relocate()`] to put it somewhere random.
    pub(super) fn new(position: Cell, tint: Tint) -> Food {
        Food { position, tint }
    }

    /// Move the food to a uniformly random cell of `board` that is not in
    /// `occupied`.
    ///
    /// A handful of blind samples are tried first, as the board is normally
    /// mostly empty; if none of them land on a free cell, the free cells are
    /// enumerated and one is chosen directly.  Returns `false`, leaving the
    /// food where it is, if there are no free cells.
    pub(super) fn relocate<R: Rng>(
        &mut self,
        board: Board,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> bool {
        for _ in 0..consts::PLACEMENT_ATTEMPTS {
            let cell = Position::new(
                rng.random_range(0..board.width()),
                rng.random_range(0..board.height()),
            );
            if !occupied.contains(&cell) {
                self.position = cell;
                return true;
            }
        }
        match board
            .positions()
            .filter(|p| !occupied.contains(p))
            .choose(rng)
        {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => false,
        }
    }
}

impl Drawable for Food {
    fn draw(&self, sink: &mut dyn TileSink) {
        self.tint.draw_at(sink, self.position);
    }
}
