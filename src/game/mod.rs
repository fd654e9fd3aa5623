mod direction;
mod food;
mod snake;
pub(crate) use self::direction::Direction;
use self::food::Food;
use self::snake::Snake;
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::geometry::{Board, Cell};
use crate::input::{EventSource, InputEvent};
use crate::render::{Drawable, TileSink, Tint};
use rand::Rng;
use ratatui::style::Color;
use std::collections::HashSet;
use std::io;
use std::num::NonZeroU32;
use std::ops::ControlFlow;

/// The game state: one snake & one piece of food on a wrap-around board
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    food: Food,
    background: Color,
    tick_rate: NonZeroU32,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(config: &GameConfig, mut rng: R) -> Game<R> {
        let board = config.board;
        let colors = config.colors;
        let snake = Snake::new(
            board.center(),
            Direction::random(&mut rng),
            Tint {
                fill: colors.snake,
                border: colors.border,
            },
        );
        let food = Food::new(
            board.center(),
            Tint {
                fill: colors.food,
                border: colors.border,
            },
        );
        let mut game = Game {
            rng,
            board,
            snake,
            food,
            background: colors.background,
            tick_rate: config.tick_rate,
        };
        game.place_food();
        game
    }

    /// Run the game until the player quits, rendering to `sink` after every
    /// tick
    pub(crate) fn run<E, S, C>(
        &mut self,
        events: &mut E,
        sink: &mut S,
        clock: &mut C,
    ) -> io::Result<()>
    where
        E: EventSource,
        S: TileSink,
        C: Clock,
    {
        tracing::info!(
            width = self.board.width(),
            height = self.board.height(),
            tick_rate = self.tick_rate.get(),
            "Starting game"
        );
        self.draw(sink)?;
        loop {
            clock.tick(self.tick_rate);
            if self.handle_events(events.drain()?).is_break() {
                tracing::info!(length = self.snake.len(), "Quitting");
                return Ok(());
            }
            self.step();
            self.draw(sink)?;
        }
    }

    /// Perform the state changes of a single tick: turn, move, and then deal
    /// with whatever the snake's head ran into
    pub(crate) fn step(&mut self) -> StepOutcome {
        self.snake.commit_heading();
        self.snake.advance(self.board);
        if self.snake.self_intersects() {
            tracing::info!(length = self.snake.len(), "Snake collided with itself");
            self.snake.reset(&mut self.rng);
            self.place_food();
            StepOutcome::Collided
        } else if self.snake.head() == self.food.position {
            self.snake.grow();
            self.place_food();
            StepOutcome::Ate
        } else {
            StepOutcome::Moved
        }
    }

    /// Move the food to a cell not occupied by the snake.  If the snake fills
    /// the whole board, it is reset to make room.
    ///
    /// # Panics
    ///
    /// Panics if the board has only one cell.
    fn place_food(&mut self) {
        let occupied = self.occupied();
        if !self.food.relocate(self.board, &occupied, &mut self.rng) {
            tracing::warn!(
                length = self.snake.len(),
                "Snake fills the board; no room left for food"
            );
            self.snake.reset(&mut self.rng);
            let occupied = self.occupied();
            let placed = self.food.relocate(self.board, &occupied, &mut self.rng);
            assert!(placed, "board should have room for food after reset");
        }
        tracing::debug!(x = self.food.position.x, y = self.food.position.y, "Placed food");
    }

    fn occupied(&self) -> HashSet<Cell> {
        self.snake.body().iter().copied().collect()
    }
}

impl<R> Game<R> {
    pub(crate) fn board(&self) -> Board {
        self.board
    }

    /// Apply queued input events to the snake.  Returns `Break` as soon as a
    /// quit request is seen; any events after it are discarded.
    pub(crate) fn handle_events<I>(&mut self, events: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for ev in events {
            match ev {
                InputEvent::Quit => return ControlFlow::Break(()),
                InputEvent::KeyDown(d) => self.snake.set_pending_heading(d),
            }
        }
        ControlFlow::Continue(())
    }

    /// Render the current frame: background, then food, then snake
    pub(crate) fn draw<S: TileSink>(&self, sink: &mut S) -> io::Result<()> {
        sink.fill(self.background);
        self.food.draw(sink);
        self.snake.draw(sink);
        sink.present()
    }
}

/// What happened during a call to [`Game::step()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepOutcome {
    /// The snake moved into an empty cell
    Moved,

    /// The snake ate the food
    Ate,

    /// The snake ran into itself and was reset
    Collided,
}
